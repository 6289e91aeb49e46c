//! Readiness scoring.

use crate::models::{ChecklistItem, ReadinessScore, ReadinessStatus};

/// Share of required items (in percent) at or above which an otherwise
/// critical-free checklist earns [`ReadinessStatus::Caution`].
pub const CAUTION_THRESHOLD: u8 = 70;

/// Computes the readiness score of a checklist.
///
/// The percentage covers required items only and is rounded half-up; it is 0
/// when there are no required items. Any unchecked critical item, required or
/// not, rules out both `Ready` and `Caution`.
///
/// # Examples
///
/// ```rust
/// use hikeready_core::{models::ReadinessStatus, scoring::score};
///
/// let empty = score(&[]);
/// assert_eq!(empty.percentage, 0);
/// assert_eq!(empty.status, ReadinessStatus::NotReady);
/// assert!(empty.missing_critical.is_empty());
/// ```
pub fn score(items: &[ChecklistItem]) -> ReadinessScore {
    let required_total = items.iter().filter(|item| item.is_required()).count();
    let required_completed = items
        .iter()
        .filter(|item| item.is_required() && item.checked)
        .count();
    let missing_critical: Vec<ChecklistItem> = items
        .iter()
        .filter(|item| item.is_critical && !item.checked)
        .cloned()
        .collect();

    let percentage = percentage(required_completed, required_total);
    let status = verdict(percentage, missing_critical.is_empty());

    ReadinessScore {
        percentage,
        status,
        required_completed,
        required_total,
        missing_critical,
    }
}

/// `round(100 * completed / total)` with halves rounded up, in integers.
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

fn verdict(percentage: u8, nothing_critical_missing: bool) -> ReadinessStatus {
    if percentage == 100 && nothing_critical_missing {
        ReadinessStatus::Ready
    } else if percentage >= CAUTION_THRESHOLD && nothing_critical_missing {
        ReadinessStatus::Caution
    } else {
        ReadinessStatus::NotReady
    }
}
