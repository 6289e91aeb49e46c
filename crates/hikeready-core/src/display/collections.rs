//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use serde::Serialize;

use crate::models::PlanSummary;

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use hikeready_core::display::PlanSummaries;
///
/// let summaries = PlanSummaries(vec![]);
/// assert_eq!(summaries.to_string(), "No hike plans found.\n");
/// ```
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No hike plans found.");
        }
        for summary in self.iter() {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}
