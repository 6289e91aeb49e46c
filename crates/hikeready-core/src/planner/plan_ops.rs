//! Plan operations for the Planner.

use log::{debug, info};

use super::Planner;
use crate::{
    error::Result,
    generator::generate,
    models::HikePlan,
    params::{CreateHikePlan, Id},
};

impl Planner {
    /// Creates a new hike plan and its checklist, and makes it the active
    /// hike.
    ///
    /// The parameters are validated first; nothing is stored when validation
    /// fails. The plan, its generated checklist and the active-hike pointer
    /// are written in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for unknown enum values or an
    /// out-of-range duration.
    pub async fn create_plan(&self, params: &CreateHikePlan) -> Result<HikePlan> {
        let new_plan = params.validate()?;

        let (plan, checklist) = self
            .with_database(move |db| db.create_plan(&new_plan, generate))
            .await?;

        info!(
            "Created hike plan {} '{}' with {} checklist items",
            plan.id,
            plan.name,
            checklist.items.len()
        );
        Ok(plan)
    }

    /// Retrieves a plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<HikePlan>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_plan(plan_id)).await
    }

    /// Lists all plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<HikePlan>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Permanently deletes a plan and its checklist without confirmation.
    ///
    /// Clears the active hike if it pointed at this plan.
    pub async fn delete_plan_by_id(&self, params: &Id) -> Result<()> {
        let plan_id = params.id;
        self.with_database(move |db| db.delete_plan(plan_id)).await?;
        info!("Deleted hike plan {plan_id}");
        Ok(())
    }

    /// Makes the given plan the active hike.
    pub async fn set_active_plan(&self, params: &Id) -> Result<()> {
        let plan_id = params.id;
        self.with_database(move |db| db.set_active_plan_id(plan_id)).await?;
        debug!("Active hike plan set to {plan_id}");
        Ok(())
    }

    /// Returns the ID of the active hike, if any.
    pub async fn active_plan_id(&self) -> Result<Option<u64>> {
        self.with_database(|db| db.active_plan_id()).await
    }

    /// Returns the active hike plan, if one is set and still exists.
    pub async fn active_plan(&self) -> Result<Option<HikePlan>> {
        self.with_database(|db| match db.active_plan_id()? {
            Some(plan_id) => db.get_plan(plan_id),
            None => Ok(None),
        })
        .await
    }

    /// Clears the active hike. Returns whether one was set.
    pub async fn clear_active_plan(&self) -> Result<bool> {
        self.with_database(|db| db.clear_active_plan_id()).await
    }
}
