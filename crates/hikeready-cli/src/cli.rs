//! Command handlers connecting parsed arguments to the planner.
//!
//! Each handler converts its clap arguments into core parameters, calls the
//! [`Planner`], and prints the result either as rendered markdown or, with
//! `--json`, as a JSON document on stdout.

use std::fmt::Display;

use anyhow::{anyhow, Context, Result};
use hikeready_core::{
    display::{CreateResult, DeleteResult, OperationStatus, ToggleResult},
    params::{CreateHikePlan, DeletePlan, Id, ToggleItem},
    Planner,
};
use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::{
    args::{ChecklistCommands, ItemArgs, PlanCommands, PlanSelector},
    renderer::TerminalRenderer,
};

/// Runs CLI commands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            planner,
            renderer,
            json,
        }
    }

    /// Prints `markdown` through the renderer, or `data` as JSON.
    fn emit<D, S>(&self, markdown: D, data: &S) -> Result<()>
    where
        D: Display,
        S: Serialize + ?Sized,
    {
        if self.json {
            let text = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
            println!("{text}");
        } else {
            self.renderer.render(&markdown.to_string());
        }
        Ok(())
    }

    /// Resolves an explicit plan ID or falls back to the active hike.
    async fn resolve_plan(&self, selector: &PlanSelector) -> Result<Id> {
        if let Some(id) = selector.plan {
            return Ok(Id { id });
        }

        let id = self
            .planner
            .active_plan_id()
            .await
            .context("Failed to look up the active hike")?
            .ok_or_else(|| {
                anyhow!("No active hike. Create one with `hikeready plan create` or pick one with `hikeready plan use <id>`")
            })?;
        debug!("Using active hike plan {id}");
        Ok(Id { id })
    }

    /// List all plans with their readiness.
    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_plan_summaries()
            .await
            .context("Failed to list hike plans")?;
        debug!("Listing {} hike plans", summaries.len());
        self.emit(&summaries, &summaries)
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let params = CreateHikePlan::from(args);
                let plan = self
                    .planner
                    .create_plan(&params)
                    .await
                    .context("Failed to create hike plan")?;
                let readiness = self.planner.readiness(&Id { id: plan.id }).await?;

                let markdown = format!(
                    "{}\n{readiness}\nRun `hikeready checklist show` to see your checklist.\n",
                    CreateResult::new(plan.clone())
                );
                self.emit(markdown, &plan)
            }
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => {
                let id = Id::from(args);
                let plan = self
                    .planner
                    .get_plan(&id)
                    .await?
                    .ok_or_else(|| anyhow!("Hike plan with ID {} not found", id.id))?;
                self.emit(&plan, &plan)
            }
            PlanCommands::Delete(args) => {
                let params = DeletePlan::from(args);
                let plan = self
                    .planner
                    .delete_plan(&params)
                    .await?
                    .ok_or_else(|| anyhow!("Hike plan with ID {} not found", params.id))?;
                self.emit(DeleteResult::new(plan.clone()), &plan)
            }
            PlanCommands::Ready(args) => {
                let id = Id::from(args);
                self.planner.mark_ready(&id).await?;
                let summary = self.planner.ready_summary(&id).await?;
                self.emit(&summary, &summary)
            }
            PlanCommands::Use(args) => {
                let id = Id::from(args);
                self.planner.set_active_plan(&id).await?;
                let status = OperationStatus::success(format!("Active hike set to plan {}", id.id));
                self.emit(status, &json!({ "active_plan_id": id.id }))
            }
        }
    }

    pub async fn handle_checklist_command(&self, command: ChecklistCommands) -> Result<()> {
        match command {
            ChecklistCommands::Show(selector) => {
                let id = self.resolve_plan(&selector).await?;
                let view = self.planner.checklist_view(&id).await?;
                self.emit(&view, &view)
            }
            ChecklistCommands::Check(args) => self.toggle_item(&args, true).await,
            ChecklistCommands::Uncheck(args) => self.toggle_item(&args, false).await,
            ChecklistCommands::Reset(selector) => {
                let id = self.resolve_plan(&selector).await?;
                let checklist = self.planner.reset_checklist(&id).await?;
                let status = OperationStatus::success(format!(
                    "Unchecked all {} items of plan {}",
                    checklist.items.len(),
                    id.id
                ));
                self.emit(status, &checklist)
            }
            ChecklistCommands::Score(selector) => {
                let id = self.resolve_plan(&selector).await?;
                let readiness = self.planner.readiness(&id).await?;
                self.emit(&readiness, &readiness)
            }
        }
    }

    async fn toggle_item(&self, args: &ItemArgs, checked: bool) -> Result<()> {
        let id = self.resolve_plan(&args.selector).await?;
        let params = ToggleItem {
            plan_id: id.id,
            item_id: args.item_id(),
            checked,
        };

        let checklist = self.planner.set_item_checked(&params).await?;
        let readiness = self.planner.readiness(&id).await?;
        let item = checklist
            .item(&params.item_id)
            .ok_or_else(|| anyhow!("Item '{}' disappeared from the checklist", params.item_id))?;

        let markdown = format!("{}\n{readiness}", ToggleResult { item });
        self.emit(markdown, &json!({ "item": item, "readiness": readiness }))
    }
}
