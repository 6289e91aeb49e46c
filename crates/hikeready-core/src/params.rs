//! Parameter structures for HikeReady operations
//!
//! These structures carry raw, interface-neutral input into the [`Planner`]
//! and have no command-line framework derives. The CLI defines its own clap
//! argument structs and converts them into these types with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Validated      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│  NewHikePlan    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Enumerated fields of [`CreateHikePlan`] are plain strings; they are parsed
//! and range-checked once, by [`CreateHikePlan::validate`], before anything
//! reaches the checklist generator.
//!
//! [`Planner`]: crate::planner::Planner

use serde::{Deserialize, Serialize};

use crate::{error::Result, models::NewHikePlan};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like get_plan, get_checklist, reset_checklist,
/// mark_ready and set_active_plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the hike plan to operate on
    pub id: u64,
}

/// Parameters for creating a new hike plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateHikePlan {
    /// Display name; empty or missing falls back to "<Terrain> <type> hike"
    pub name: Option<String>,
    /// `short`, `day` or `overnight`
    pub hike_type: String,
    /// `forest`, `mountain`, `coastal` or `volcanic`
    pub terrain: String,
    /// `low`, `medium` or `high`
    pub elevation: String,
    /// Planned duration in hours (1-24)
    pub duration: u32,
    /// `solo` or `group`
    pub group_size: String,
    /// `beginner`, `intermediate` or `advanced`
    pub experience_level: String,
    /// `clear`, `rain`, `cold`, `heat` or `mixed`; missing means clear
    pub weather: Option<String>,
}

impl CreateHikePlan {
    /// Parse and validate these parameters into a [`NewHikePlan`].
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` naming the offending field.
    pub fn validate(&self) -> Result<NewHikePlan> {
        NewHikePlan::try_from(self)
    }
}

/// Parameters for deleting a hike plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// The ID of the hike plan to delete
    pub id: u64,
    /// Must be true; deletion is permanent and removes the checklist too
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for checking or unchecking a checklist item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleItem {
    /// The ID of the hike plan owning the checklist
    pub plan_id: u64,
    /// Positional item ID, e.g. `item-3`
    pub item_id: String,
    /// New checked state
    pub checked: bool,
}
