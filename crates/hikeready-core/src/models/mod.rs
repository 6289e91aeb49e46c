//! Data models for hike plans, checklists and readiness scores.
//!
//! This module contains the domain models of the HikeReady system. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! All models derive serde traits. Enumerations serialize as lowercase
//! kebab-case strings (`"water-nutrition"`, `"not-ready"`), matching the
//! values stored in the database and accepted on the command line.
//!
//! # Examples
//!
//! ```rust
//! use hikeready_core::models::{
//!     Elevation, ExperienceLevel, GroupSize, HikePlan, HikeType, Terrain, Weather,
//! };
//! use jiff::Timestamp;
//!
//! let plan = HikePlan {
//!     id: 1,
//!     name: "Ridge loop".to_string(),
//!     hike_type: HikeType::Day,
//!     terrain: Terrain::Mountain,
//!     elevation: Elevation::Medium,
//!     duration: 6,
//!     group_size: GroupSize::Group,
//!     experience_level: ExperienceLevel::Intermediate,
//!     weather: Weather::Rain,
//!     created_at: Timestamp::now(),
//!     is_ready: false,
//! };
//! println!("{}", plan); // Markdown header plus metadata bullets
//! ```

pub mod checklist;
pub mod enums;
pub mod plan;
pub mod readiness;
pub mod requests;
pub mod summary;

#[cfg(test)]
mod tests;

pub use checklist::{ChecklistItem, HikeChecklist};
pub use enums::{
    ChecklistCategory, Elevation, ExperienceLevel, GroupSize, HikeType, ItemStatus,
    ReadinessStatus, Terrain, Weather,
};
pub use plan::HikePlan;
pub use readiness::ReadinessScore;
pub use requests::NewHikePlan;
pub use summary::PlanSummary;
