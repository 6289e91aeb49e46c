//! The static item catalog and its upgrade rules.
//!
//! The catalog is a process-wide, ordered list of [`ItemTemplate`]s. Each
//! template carries a baseline status and criticality plus optional
//! [`Conditions`] deciding whether it applies to a given plan. Declaration
//! order in [`CATALOG`] is the order of every generated checklist.
//!
//! Plan-specific upgrades (recommended → required, not critical → critical)
//! are kept out of the templates in the separate tables of [`rules`].

use crate::models::{
    ChecklistCategory, Elevation, ExperienceLevel, GroupSize, HikePlan, HikeType, ItemStatus,
    Terrain, Weather,
};

pub mod items;
pub mod rules;

pub use items::CATALOG;
pub use rules::{PlanPredicate, Upgrade, UpgradeRule, CRITICALITY_UPGRADES, STATUS_UPGRADES};

/// Inclusion conditions of a template.
///
/// Every present group must pass (logical AND); an absent group always
/// passes. Set groups test membership, `min_duration` is an inclusive lower
/// bound and `group_size` tests equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditions {
    pub hike_types: Option<&'static [HikeType]>,
    pub terrains: Option<&'static [Terrain]>,
    pub elevations: Option<&'static [Elevation]>,
    pub min_duration: Option<u32>,
    pub group_size: Option<GroupSize>,
    pub experience_levels: Option<&'static [ExperienceLevel]>,
    /// Passes for any listed weather, and always passes for [`Weather::Mixed`]
    pub weather: Option<&'static [Weather]>,
}

impl Conditions {
    /// No conditions at all; base for struct update syntax in the catalog.
    pub const NONE: Conditions = Conditions {
        hike_types: None,
        terrains: None,
        elevations: None,
        min_duration: None,
        group_size: None,
        experience_levels: None,
        weather: None,
    };

    /// Evaluates every present condition group against the plan.
    pub fn matches(&self, plan: &HikePlan) -> bool {
        within(self.hike_types, &plan.hike_type)
            && within(self.terrains, &plan.terrain)
            && within(self.elevations, &plan.elevation)
            && self.min_duration.map_or(true, |min| plan.duration >= min)
            && self.group_size.map_or(true, |size| size == plan.group_size)
            && within(self.experience_levels, &plan.experience_level)
            && self.weather_matches(plan.weather)
    }

    /// True when the template declares a weather condition.
    pub fn is_weather_dependent(&self) -> bool {
        self.weather.is_some()
    }

    fn weather_matches(&self, weather: Weather) -> bool {
        match self.weather {
            None => true,
            Some(_) if weather == Weather::Mixed => true,
            Some(allowed) => allowed.contains(&weather),
        }
    }
}

fn within<T: PartialEq>(allowed: Option<&[T]>, value: &T) -> bool {
    allowed.map_or(true, |set| set.contains(value))
}

/// One catalog entry before plan-specific filtering and adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub category: ChecklistCategory,
    pub base_status: ItemStatus,
    pub is_critical: bool,
    pub conditions: Option<Conditions>,
}

impl ItemTemplate {
    /// Creates an unconditional template.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        category: ChecklistCategory,
        base_status: ItemStatus,
        is_critical: bool,
    ) -> Self {
        Self {
            name,
            description,
            category,
            base_status,
            is_critical,
            conditions: None,
        }
    }

    /// Restricts the template to plans matching `conditions`.
    pub const fn when(self, conditions: Conditions) -> Self {
        Self {
            name: self.name,
            description: self.description,
            category: self.category,
            base_status: self.base_status,
            is_critical: self.is_critical,
            conditions: Some(conditions),
        }
    }

    /// Whether the template is a candidate for the plan.
    pub fn applies_to(&self, plan: &HikePlan) -> bool {
        self.conditions
            .as_ref()
            .map_or(true, |conditions| conditions.matches(plan))
    }

    /// True when the template carries a weather condition.
    pub fn is_weather_dependent(&self) -> bool {
        self.conditions
            .as_ref()
            .is_some_and(Conditions::is_weather_dependent)
    }
}

/// Looks up a catalog template by name.
pub fn template(name: &str) -> Option<&'static ItemTemplate> {
    CATALOG.iter().find(|template| template.name == name)
}
