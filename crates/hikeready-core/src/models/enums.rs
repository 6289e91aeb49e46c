//! Enumerations describing hikes, checklist items and readiness verdicts.
//!
//! Every enum round-trips through a lowercase kebab-case string, which is the
//! representation used by serde, the database and the CLI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Implements `ALL`, `as_str` and `FromStr` for a fieldless enum.
///
/// Parsing is case-insensitive and the error names the rejected value.
macro_rules! string_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Canonical string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(format!("Invalid {}: {s}", $what)),
                }
            }
        }
    };
}

/// Length class of the hike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HikeType {
    /// A few hours, back well before dark
    Short,
    /// A full day on the trail
    Day,
    /// At least one night outside
    Overnight,
}

string_enum!(HikeType, "hike type", {
    Short => "short",
    Day => "day",
    Overnight => "overnight",
});

/// Dominant terrain along the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Terrain {
    Forest,
    Mountain,
    Coastal,
    Volcanic,
}

string_enum!(Terrain, "terrain", {
    Forest => "forest",
    Mountain => "mountain",
    Coastal => "coastal",
    Volcanic => "volcanic",
});

impl Terrain {
    /// Capitalized name used when building a default plan name.
    pub fn label(&self) -> &'static str {
        match self {
            Terrain::Forest => "Forest",
            Terrain::Mountain => "Mountain",
            Terrain::Coastal => "Coastal",
            Terrain::Volcanic => "Volcanic",
        }
    }
}

/// Elevation band of the route.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Elevation {
    Low,
    Medium,
    High,
}

string_enum!(Elevation, "elevation", {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Whether the hiker goes alone or with others.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum GroupSize {
    Solo,
    Group,
}

string_enum!(GroupSize, "group size", {
    Solo => "solo",
    Group => "group",
});

/// Self-reported hiking experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

string_enum!(ExperienceLevel, "experience level", {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

/// Expected weather for the hike.
///
/// `Mixed` means several conditions are anticipated; the checklist generator
/// then includes every weather-conditioned item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Weather {
    /// Also the value assumed for plans stored before weather was recorded
    #[default]
    Clear,
    Rain,
    Cold,
    Heat,
    Mixed,
}

string_enum!(Weather, "weather", {
    Clear => "clear",
    Rain => "rain",
    Cold => "cold",
    Heat => "heat",
    Mixed => "mixed",
});

/// Whether a checklist item counts towards the readiness percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// Counted in the readiness percentage
    Required,
    /// Shown, but never counted in the percentage
    Recommended,
}

string_enum!(ItemStatus, "item status", {
    Required => "required",
    Recommended => "recommended",
});

/// Grouping of checklist items.
///
/// Declaration order is the order categories are displayed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum ChecklistCategory {
    Gear,
    WaterNutrition,
    Clothing,
    WeatherProtection,
    SafetyNavigation,
    PowerPhone,
    KnowledgePlanning,
}

string_enum!(ChecklistCategory, "checklist category", {
    Gear => "gear",
    WaterNutrition => "water-nutrition",
    Clothing => "clothing",
    WeatherProtection => "weather-protection",
    SafetyNavigation => "safety-navigation",
    PowerPhone => "power-phone",
    KnowledgePlanning => "knowledge-planning",
});

impl ChecklistCategory {
    /// Human-readable heading for the category.
    pub fn label(&self) -> &'static str {
        match self {
            ChecklistCategory::Gear => "Gear",
            ChecklistCategory::WaterNutrition => "Water & Nutrition",
            ChecklistCategory::Clothing => "Clothing",
            ChecklistCategory::WeatherProtection => "Weather Protection",
            ChecklistCategory::SafetyNavigation => "Safety & Navigation",
            ChecklistCategory::PowerPhone => "Power & Phone",
            ChecklistCategory::KnowledgePlanning => "Knowledge & Planning",
        }
    }

    /// Icon shown next to the category heading.
    pub fn icon(&self) -> &'static str {
        match self {
            ChecklistCategory::Gear => "🎒",
            ChecklistCategory::WaterNutrition => "💧",
            ChecklistCategory::Clothing => "👕",
            ChecklistCategory::WeatherProtection => "🌧️",
            ChecklistCategory::SafetyNavigation => "🧭",
            ChecklistCategory::PowerPhone => "🔋",
            ChecklistCategory::KnowledgePlanning => "📋",
        }
    }
}

/// Tri-state verdict of a readiness score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReadinessStatus {
    /// All required items done and nothing critical missing
    Ready,
    /// At least 70% done and nothing critical missing
    Caution,
    /// Anything else
    NotReady,
}

string_enum!(ReadinessStatus, "readiness status", {
    Ready => "ready",
    Caution => "caution",
    NotReady => "not-ready",
});

impl ReadinessStatus {
    /// Get the verdict with a consistent icon for display.
    ///
    /// ```rust
    /// use hikeready_core::models::ReadinessStatus;
    ///
    /// assert_eq!(ReadinessStatus::Ready.with_icon(), "✓ Ready!");
    /// assert_eq!(ReadinessStatus::Caution.with_icon(), "⚠ Almost there");
    /// assert_eq!(ReadinessStatus::NotReady.with_icon(), "✗ Not ready");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ReadinessStatus::Ready => "✓ Ready!",
            ReadinessStatus::Caution => "⚠ Almost there",
            ReadinessStatus::NotReady => "✗ Not ready",
        }
    }
}
