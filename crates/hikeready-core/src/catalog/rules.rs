//! Name-keyed upgrade rules applied after the inclusion filter.
//!
//! Each rule pairs one catalog item name with one plan-attribute predicate and
//! the upgrade it grants. Upgrades only ever raise an item: recommended to
//! required, or not critical to critical.

use crate::models::{Elevation, HikePlan, HikeType, ItemStatus, Weather};

/// Test against a single plan attribute.
///
/// Weather predicates compare the plan's literal weather value, so a `Mixed`
/// plan does not satisfy `Weather(Cold)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPredicate {
    HikeType(HikeType),
    Elevation(Elevation),
    Weather(Weather),
}

impl PlanPredicate {
    /// Whether the plan satisfies the predicate.
    pub fn holds(&self, plan: &HikePlan) -> bool {
        match *self {
            PlanPredicate::HikeType(hike_type) => plan.hike_type == hike_type,
            PlanPredicate::Elevation(elevation) => plan.elevation == elevation,
            PlanPredicate::Weather(weather) => plan.weather == weather,
        }
    }
}

/// What a rule raises on the matching item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upgrade {
    /// Status becomes required
    Required,
    /// Item becomes critical
    Critical,
}

impl Upgrade {
    /// Raises the given status/criticality pair. Never lowers either.
    pub fn apply(self, status: &mut ItemStatus, is_critical: &mut bool) {
        match self {
            Upgrade::Required => *status = ItemStatus::Required,
            Upgrade::Critical => *is_critical = true,
        }
    }
}

/// One `(item name, predicate, upgrade)` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeRule {
    pub item: &'static str,
    pub when: PlanPredicate,
    pub upgrade: Upgrade,
}

impl UpgradeRule {
    const fn new(item: &'static str, when: PlanPredicate, upgrade: Upgrade) -> Self {
        Self {
            item,
            when,
            upgrade,
        }
    }

    /// Whether the rule fires for the named item on this plan.
    pub fn applies(&self, item: &str, plan: &HikePlan) -> bool {
        self.item == item && self.when.holds(plan)
    }
}

/// Recommended items that become required for some plans.
#[rustfmt::skip]
pub static STATUS_UPGRADES: &[UpgradeRule] = &[
    UpgradeRule::new("Trekking poles", PlanPredicate::Elevation(Elevation::High), Upgrade::Required),
    UpgradeRule::new("Rain pants", PlanPredicate::HikeType(HikeType::Overnight), Upgrade::Required),
    UpgradeRule::new("Rain pants", PlanPredicate::Weather(Weather::Rain), Upgrade::Required),
    UpgradeRule::new("Waterproof pack cover", PlanPredicate::Weather(Weather::Rain), Upgrade::Required),
    UpgradeRule::new("Warm insulating layers", PlanPredicate::Weather(Weather::Cold), Upgrade::Required),
    UpgradeRule::new("Warm gloves", PlanPredicate::Weather(Weather::Cold), Upgrade::Required),
    UpgradeRule::new("Sun hat with brim", PlanPredicate::Weather(Weather::Heat), Upgrade::Required),
];

/// Items that become critical under specific weather.
#[rustfmt::skip]
pub static CRITICALITY_UPGRADES: &[UpgradeRule] = &[
    UpgradeRule::new("Warm insulating layers", PlanPredicate::Weather(Weather::Cold), Upgrade::Critical),
    UpgradeRule::new("Warm gloves", PlanPredicate::Weather(Weather::Cold), Upgrade::Critical),
    UpgradeRule::new("Rain pants", PlanPredicate::Weather(Weather::Rain), Upgrade::Critical),
    UpgradeRule::new("Extra water (1L+)", PlanPredicate::Weather(Weather::Heat), Upgrade::Critical),
];
