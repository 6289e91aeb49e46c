//! Display formatting and result types.
//!
//! Domain models implement `Display` directly (see [`models`]); collections,
//! operation results and composite screens get small wrapper types so each
//! output context formats consistently. Everything renders as markdown,
//! which the CLI feeds through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (HikePlan, ...) │───▶│ (views, results)│───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (PlanSummaries)
//! - [`results`]: Operation result types (CreateResult, DeleteResult, ToggleResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`views`]: Composite screens (ChecklistView, ReadySummary)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use hikeready_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Active hike set to plan 3".to_string());
//! assert_eq!(status.to_string(), "Success: Active hike set to plan 3\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;
pub mod views;

// Re-export commonly used types for convenience
pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, ToggleResult};
pub use status::OperationStatus;
pub use views::{ChecklistView, ReadySummary};
