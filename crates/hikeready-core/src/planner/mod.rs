//! High-level planner API for hike plans and their checklists.
//!
//! The [`Planner`] runs the workflow around the pure checklist engine: it
//! validates new plans, hands them to the generator, persists the result,
//! and rescores checklists whenever they are read or changed.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (plan_handlers, │───▶│ (plan_ops,      │───▶│   (via db/)     │
//! │  checklist_     │    │  checklist_ops) │    │                 │
//! │  handlers)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display wrappers       Single operations      Data persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`plan_ops`]: Plan creation, lookup, deletion and the active hike
//! - [`checklist_ops`]: Checklist reads and item toggling
//! - [`plan_handlers`]: Summaries, confirmed deletion and the departure gate
//! - [`checklist_handlers`]: Readiness scores and checklist views
//!
//! Every operation opens the SQLite database on a blocking thread, so a
//! `Planner` is cheap to clone and holds no connection between calls.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use hikeready_core::{
//!     params::{CreateHikePlan, Id, ToggleItem},
//!     PlannerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/hikeready-example.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .create_plan(&CreateHikePlan {
//!         name: None,
//!         hike_type: "day".to_string(),
//!         terrain: "forest".to_string(),
//!         elevation: "low".to_string(),
//!         duration: 5,
//!         group_size: "group".to_string(),
//!         experience_level: "intermediate".to_string(),
//!         weather: Some("rain".to_string()),
//!     })
//!     .await?;
//!
//! planner
//!     .set_item_checked(&ToggleItem {
//!         plan_id: plan.id,
//!         item_id: "item-1".to_string(),
//!         checked: true,
//!     })
//!     .await?;
//!
//! let score = planner.readiness(&Id { id: plan.id }).await?;
//! println!("{score}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result},
};

// Module declarations
pub mod builder;
pub mod checklist_handlers;
pub mod checklist_ops;
pub mod plan_handlers;
pub mod plan_ops;


// Re-export the main types
pub use builder::PlannerBuilder;

/// Main planner interface for hike plans and checklists.
#[derive(Debug, Clone)]
pub struct Planner {
    pub(crate) db_path: PathBuf,
}

impl Planner {
    /// Creates a new planner with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a freshly opened database on a blocking
    /// thread.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(PlannerError::join_error)?
    }
}
