//! Checklist item and checklist models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ChecklistCategory, ItemStatus};

/// One instantiated, user-facing checklist entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Positional identifier (`item-1`, `item-2`, ...) unique within a checklist
    pub id: String,

    /// Item name, copied from the catalog template
    pub name: String,

    /// Short guidance text
    pub description: String,

    /// Category the item is grouped under
    pub category: ChecklistCategory,

    /// Required items count towards the readiness percentage
    pub status: ItemStatus,

    /// Critical items block readiness while unchecked
    pub is_critical: bool,

    /// Whether the hiker has packed/done this item
    #[serde(default)]
    pub checked: bool,
}

impl ChecklistItem {
    /// True when the item counts towards the readiness percentage.
    pub fn is_required(&self) -> bool {
        self.status == ItemStatus::Required
    }
}

/// The checklist generated for a single plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HikeChecklist {
    /// ID of the plan this checklist belongs to
    pub plan_id: u64,

    /// Items in catalog order
    pub items: Vec<ChecklistItem>,

    /// Refreshed whenever an item changes (UTC)
    pub last_updated: Timestamp,
}

impl HikeChecklist {
    /// Look up an item by its positional ID.
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Items that have been checked off.
    pub fn checked_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.items.iter().filter(|item| item.checked)
    }
}
