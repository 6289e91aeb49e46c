//! Checklist operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::HikeChecklist,
    params::{Id, ToggleItem},
};

impl Planner {
    /// Retrieves the checklist of a plan, if it has one.
    pub async fn get_checklist(&self, params: &Id) -> Result<Option<HikeChecklist>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_checklist(plan_id)).await
    }

    /// Checks or unchecks a single checklist item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ChecklistNotFound` if the plan has no checklist
    /// Returns `PlannerError::ItemNotFound` if no item has the given ID
    pub async fn set_item_checked(&self, params: &ToggleItem) -> Result<HikeChecklist> {
        let ToggleItem {
            plan_id,
            item_id,
            checked,
        } = params.clone();

        debug!("Setting {item_id} of plan {plan_id} to checked={checked}");

        self.with_database(move |db| {
            db.modify_checklist(plan_id, |checklist| {
                let item = checklist
                    .items
                    .iter_mut()
                    .find(|item| item.id == item_id)
                    .ok_or_else(|| PlannerError::ItemNotFound {
                        plan_id,
                        item_id: item_id.clone(),
                    })?;
                item.checked = checked;
                Ok(())
            })
        })
        .await
    }

    /// Unchecks every item of a plan's checklist.
    ///
    /// The plan's ready flag is left as it is.
    pub async fn reset_checklist(&self, params: &Id) -> Result<HikeChecklist> {
        let plan_id = params.id;

        self.with_database(move |db| {
            db.modify_checklist(plan_id, |checklist| {
                for item in &mut checklist.items {
                    item.checked = false;
                }
                Ok(())
            })
        })
        .await
    }
}
