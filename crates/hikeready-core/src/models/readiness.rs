//! Readiness score model.

use serde::{Deserialize, Serialize};

use super::{ChecklistItem, ReadinessStatus};

/// Aggregate readiness derived from a checklist. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadinessScore {
    /// Share of required items checked, rounded half-up (0-100)
    pub percentage: u8,
    /// Verdict derived from the percentage and missing critical items
    pub status: ReadinessStatus,
    /// Number of required items checked
    pub required_completed: usize,
    /// Number of required items
    pub required_total: usize,
    /// Critical items still unchecked, in checklist order
    pub missing_critical: Vec<ChecklistItem>,
}
