//! Hike plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Elevation, ExperienceLevel, GroupSize, HikeType, Terrain, Weather};

/// Describes one planned hike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HikePlan {
    /// Unique identifier for the plan
    pub id: u64,

    /// Display name of the hike
    pub name: String,

    /// Length class of the hike
    pub hike_type: HikeType,

    /// Dominant terrain
    pub terrain: Terrain,

    /// Elevation band
    pub elevation: Elevation,

    /// Planned duration in hours
    pub duration: u32,

    /// Solo or group hike
    pub group_size: GroupSize,

    /// Experience of the hiker
    pub experience_level: ExperienceLevel,

    /// Expected weather (plans saved before weather existed load as clear)
    #[serde(default)]
    pub weather: Weather,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Set once the hiker confirms departure
    #[serde(default)]
    pub is_ready: bool,
}

impl HikePlan {
    /// Name used when the hiker does not supply one, e.g. "Mountain overnight hike".
    pub fn default_name(terrain: Terrain, hike_type: HikeType) -> String {
        format!("{} {} hike", terrain.label(), hike_type.as_str())
    }
}
