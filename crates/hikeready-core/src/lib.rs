//! Core library for the HikeReady hike preparation tool.
//!
//! HikeReady turns a structured hike description into a personalized
//! packing and safety checklist, then scores how ready the hiker is to
//! leave as items get checked off.
//!
//! # Architecture
//!
//! - **Checklist engine**: [`catalog`] holds the static item templates and
//!   the two upgrade-rule tables; [`generator::generate`] evaluates them for
//!   a plan and [`scoring::score`] turns checked state into a verdict. Both
//!   are pure, synchronous and infallible.
//! - **Persistence** ([`db`]): SQLite storage for plans, one checklist per
//!   plan, and the active hike.
//! - **Workflow** ([`planner`]): the async [`Planner`] validates input,
//!   generates, stores and rescores.
//! - **Display** ([`display`]): markdown `Display` implementations and
//!   wrapper types rendered by the CLI.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hikeready_core::{
//!     params::{CreateHikePlan, Id},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("hikeready.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreateHikePlan {
//!         name: Some("Summit push".to_string()),
//!         hike_type: "overnight".to_string(),
//!         terrain: "mountain".to_string(),
//!         elevation: "high".to_string(),
//!         duration: 10,
//!         group_size: "solo".to_string(),
//!         experience_level: "beginner".to_string(),
//!         weather: Some("cold".to_string()),
//!     })
//!     .await?;
//!
//! let view = planner.checklist_view(&Id { id: plan.id }).await?;
//! println!("{view}");
//! # Ok(())
//! # }
//! ```
//!
//! The engine can also be used without a database:
//!
//! ```rust
//! use hikeready_core::{generator::generate, models::*, scoring::score};
//! use jiff::Timestamp;
//!
//! let plan = HikePlan {
//!     id: 1,
//!     name: "Forest day hike".to_string(),
//!     hike_type: HikeType::Day,
//!     terrain: Terrain::Forest,
//!     elevation: Elevation::Low,
//!     duration: 5,
//!     group_size: GroupSize::Group,
//!     experience_level: ExperienceLevel::Advanced,
//!     weather: Weather::Clear,
//!     created_at: Timestamp::now(),
//!     is_ready: false,
//! };
//!
//! let mut items = generate(&plan);
//! for item in items.iter_mut().filter(|item| item.is_required() || item.is_critical) {
//!     item.checked = true;
//! }
//! assert_eq!(score(&items).status, ReadinessStatus::Ready);
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod scoring;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    ChecklistView, CreateResult, DeleteResult, LocalDateTime, OperationStatus, PlanSummaries,
    ReadySummary, ToggleResult,
};
pub use error::{PlannerError, Result};
pub use generator::generate;
pub use models::{
    ChecklistCategory, ChecklistItem, HikeChecklist, HikePlan, ItemStatus, PlanSummary,
    ReadinessScore, ReadinessStatus,
};
pub use params::{CreateHikePlan, DeletePlan, Id, ToggleItem};
pub use planner::{Planner, PlannerBuilder};
pub use scoring::score;
