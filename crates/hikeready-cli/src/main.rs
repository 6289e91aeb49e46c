//! HikeReady CLI Application
//!
//! Command-line interface for generating hike checklists and tracking
//! readiness to depart.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use hikeready_core::PlannerBuilder;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    info!("HikeReady started with database {}", planner.database_path().display());

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color), json);

    match command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Checklist { command }) => cli.handle_checklist_command(command).await,
        None => cli.list_plans().await,
    }
}
