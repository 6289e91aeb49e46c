//! Plan summary types used for listings.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{HikeChecklist, HikePlan, HikeType, ReadinessScore, Terrain, Weather};
use crate::scoring::score;

/// Summary information about a plan with its current readiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Plan ID
    pub id: u64,
    /// Display name of the plan
    pub name: String,
    /// Length class of the hike
    pub hike_type: HikeType,
    /// Dominant terrain
    pub terrain: Terrain,
    /// Duration in hours
    pub duration: u32,
    /// Expected weather
    pub weather: Weather,
    /// Whether the hiker confirmed departure
    pub is_ready: bool,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Readiness of the plan's checklist, if it has one
    pub readiness: Option<ReadinessScore>,
    /// Whether this is the active hike
    pub is_active: bool,
}

impl PlanSummary {
    /// Create a PlanSummary from a plan, its checklist and the active plan ID.
    pub fn from_plan(
        plan: HikePlan,
        checklist: Option<&HikeChecklist>,
        active_plan_id: Option<u64>,
    ) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            hike_type: plan.hike_type,
            terrain: plan.terrain,
            duration: plan.duration,
            weather: plan.weather,
            is_ready: plan.is_ready,
            created_at: plan.created_at,
            readiness: checklist.map(|c| score(&c.items)),
            is_active: active_plan_id == Some(plan.id),
        }
    }
}
