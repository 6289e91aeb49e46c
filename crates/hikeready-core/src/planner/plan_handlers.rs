//! Plan handler operations that return display-ready types for the Planner.

use log::info;

use super::Planner;
use crate::{
    display::PlanSummaries,
    error::{PlannerError, Result},
    models::{HikePlan, PlanSummary, ReadinessStatus},
    params::{DeletePlan, Id},
    scoring::score,
};

impl Planner {
    /// Handle listing plans together with their current readiness.
    ///
    /// Each summary carries the score of the plan's checklist (when it has
    /// one) and whether the plan is the active hike.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use hikeready_core::PlannerBuilder;
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let summaries = planner.list_plan_summaries().await?;
    /// println!("{summaries}");
    /// # Result::<(), hikeready_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_plan_summaries(&self) -> Result<PlanSummaries> {
        self.with_database(|db| {
            let active_plan_id = db.active_plan_id()?;
            let summaries = db
                .list_plans()?
                .into_iter()
                .map(|plan| {
                    let checklist = db.get_checklist(plan.id)?;
                    Ok(PlanSummary::from_plan(
                        plan,
                        checklist.as_ref(),
                        active_plan_id,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(PlanSummaries(summaries))
        })
        .await
    }

    /// Handle permanently deleting a plan with confirmation.
    ///
    /// Removes the plan and its checklist, clearing the active hike if it
    /// pointed at this plan. Uses get-before-delete so the deleted plan can
    /// be shown back to the user.
    ///
    /// # Returns
    ///
    /// The deleted plan, or None if the plan doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if `confirmed` is false
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use hikeready_core::{params::DeletePlan, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let deleted = planner.delete_plan(&DeletePlan { id: 1, confirmed: true }).await?;
    /// # Result::<(), hikeready_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<Option<HikePlan>> {
        if !params.confirmed {
            return Err(PlannerError::invalid_input("confirmed").with_reason(
                "Deleting a hike plan also deletes its checklist and cannot be undone; set 'confirmed' to true to proceed",
            ));
        }

        let id_params = Id { id: params.id };
        let plan = self.get_plan(&id_params).await?;

        if plan.is_some() {
            self.delete_plan_by_id(&id_params).await?;
        }

        Ok(plan)
    }

    /// Handle confirming departure for a plan.
    ///
    /// The checklist is rescored first: a `not-ready` verdict refuses the
    /// confirmation, while `caution` and `ready` both set the plan's ready
    /// flag. Confirming an already-ready plan is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` if the plan doesn't exist
    /// Returns `PlannerError::ChecklistNotFound` if the plan has no checklist
    /// Returns `PlannerError::NotReady` if the checklist scores as not ready
    pub async fn mark_ready(&self, params: &Id) -> Result<HikePlan> {
        let plan_id = params.id;

        let plan = self
            .with_database(move |db| {
                if db.get_plan(plan_id)?.is_none() {
                    return Err(PlannerError::PlanNotFound { id: plan_id });
                }

                let checklist = db
                    .get_checklist(plan_id)?
                    .ok_or(PlannerError::ChecklistNotFound { plan_id })?;

                let readiness = score(&checklist.items);
                if readiness.status == ReadinessStatus::NotReady {
                    return Err(PlannerError::NotReady {
                        plan_id,
                        percentage: readiness.percentage,
                        status: readiness.status,
                    });
                }

                db.mark_plan_ready(plan_id)
            })
            .await?;

        info!("Hike plan {plan_id} marked ready");
        Ok(plan)
    }
}
