//! Checklist handler operations: scoring and display views.

use super::Planner;
use crate::{
    db::Database,
    display::{ChecklistView, ReadySummary},
    error::{PlannerError, Result},
    models::{HikeChecklist, HikePlan, ReadinessScore},
    params::Id,
    scoring::score,
};

/// Loads a plan and its checklist, failing if either is missing.
fn load_plan_with_checklist(db: &Database, plan_id: u64) -> Result<(HikePlan, HikeChecklist)> {
    let plan = db
        .get_plan(plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: plan_id })?;
    let checklist = db
        .get_checklist(plan_id)?
        .ok_or(PlannerError::ChecklistNotFound { plan_id })?;
    Ok((plan, checklist))
}

impl Planner {
    /// Scores the current state of a plan's checklist.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan doesn't exist
    /// Returns `PlannerError::ChecklistNotFound` if the plan has no checklist
    pub async fn readiness(&self, params: &Id) -> Result<ReadinessScore> {
        let plan_id = params.id;
        self.with_database(move |db| {
            let (_, checklist) = load_plan_with_checklist(db, plan_id)?;
            Ok(score(&checklist.items))
        })
        .await
    }

    /// Loads a plan with its checklist and current score for display.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use hikeready_core::{params::Id, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let view = planner.checklist_view(&Id { id: 1 }).await?;
    /// println!("{view}");
    /// # Result::<(), hikeready_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn checklist_view(&self, params: &Id) -> Result<ChecklistView> {
        let plan_id = params.id;
        self.with_database(move |db| {
            let (plan, checklist) = load_plan_with_checklist(db, plan_id)?;
            let readiness = score(&checklist.items);
            Ok(ChecklistView {
                plan,
                checklist,
                readiness,
            })
        })
        .await
    }

    /// Loads the "ready to go" summary of a plan: its checked items grouped
    /// by category.
    pub async fn ready_summary(&self, params: &Id) -> Result<ReadySummary> {
        let plan_id = params.id;
        self.with_database(move |db| {
            let (plan, checklist) = load_plan_with_checklist(db, plan_id)?;
            Ok(ReadySummary { plan, checklist })
        })
        .await
    }
}
