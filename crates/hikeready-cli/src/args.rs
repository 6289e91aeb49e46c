//! Command-line argument definitions using clap.
//!
//! Argument structs carry clap attributes only and convert into the core
//! parameter types with `From`, so validation of hike attributes stays in
//! `hikeready-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Enumerated options take their accepted values from the core enums, so
//! `--help` and shell completion always match what the planner accepts.

use std::path::PathBuf;

use clap::{builder::PossibleValuesParser, Args as ClapArgs, Parser, Subcommand};
use hikeready_core::{
    models::{Elevation, ExperienceLevel, GroupSize, HikeType, Terrain, Weather},
    params::{CreateHikePlan, DeletePlan, Id},
};

/// Command-line interface for HikeReady
///
/// Describe a planned hike and HikeReady builds a packing and safety checklist
/// for it, then tracks how ready you are to leave as you check items off.
#[derive(Parser)]
#[command(version, about, name = "hikeready")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/hikeready/hikeready.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the HikeReady CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage hike plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Work through the checklist of a hike
    #[command(alias = "c")]
    Checklist {
        #[command(subcommand)]
        command: ChecklistCommands,
    },
}

/// Value parser accepting the canonical names of a core enum.
fn one_of<T: 'static>(all: &'static [T], as_str: fn(&T) -> &'static str) -> PossibleValuesParser {
    PossibleValuesParser::new(all.iter().map(as_str))
}

/// Create a new hike plan and generate its checklist
///
/// The new plan becomes the active hike.
#[derive(ClapArgs)]
pub struct CreatePlanArgs {
    /// Name of the hike; defaults to "<Terrain> <type> hike"
    #[arg(short, long)]
    pub name: Option<String>,
    /// Length class of the hike
    #[arg(long = "type", ignore_case = true, value_parser = one_of(HikeType::ALL, HikeType::as_str))]
    pub hike_type: String,
    /// Dominant terrain along the route
    #[arg(long, ignore_case = true, value_parser = one_of(Terrain::ALL, Terrain::as_str))]
    pub terrain: String,
    /// Elevation band of the route
    #[arg(long, ignore_case = true, value_parser = one_of(Elevation::ALL, Elevation::as_str))]
    pub elevation: String,
    /// Planned duration in hours (1-24)
    #[arg(long)]
    pub duration: u32,
    /// Whether you hike alone or with others
    #[arg(long = "group", ignore_case = true, value_parser = one_of(GroupSize::ALL, GroupSize::as_str))]
    pub group_size: String,
    /// Your hiking experience
    #[arg(long = "experience", ignore_case = true, value_parser = one_of(ExperienceLevel::ALL, ExperienceLevel::as_str))]
    pub experience_level: String,
    /// Expected weather; defaults to clear
    #[arg(long, ignore_case = true, value_parser = one_of(Weather::ALL, Weather::as_str))]
    pub weather: Option<String>,
}

impl From<CreatePlanArgs> for CreateHikePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreateHikePlan {
            name: val.name,
            hike_type: val.hike_type,
            terrain: val.terrain,
            elevation: val.elevation,
            duration: val.duration,
            group_size: val.group_size,
            experience_level: val.experience_level,
            weather: val.weather,
        }
    }
}

/// Identify a hike plan by ID
#[derive(ClapArgs)]
pub struct PlanIdArgs {
    /// ID of the hike plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a hike plan and its checklist permanently
#[derive(ClapArgs)]
pub struct DeletePlanArgs {
    /// ID of the hike plan to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new hike plan
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// List all hike plans with their readiness
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a hike plan
    #[command(alias = "s")]
    Show(PlanIdArgs),
    /// Delete a hike plan permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
    /// Confirm you are ready to depart
    #[command(alias = "r")]
    Ready(PlanIdArgs),
    /// Make a plan the active hike
    #[command(alias = "u")]
    Use(PlanIdArgs),
}

/// Select the hike a checklist command applies to
#[derive(ClapArgs)]
pub struct PlanSelector {
    /// ID of the hike plan; defaults to the active hike
    #[arg(short, long)]
    pub plan: Option<u64>,
}

/// Check or uncheck a single item
#[derive(ClapArgs)]
pub struct ItemArgs {
    /// Item ID as shown in the checklist, e.g. "item-3" or just "3"
    pub item: String,

    #[command(flatten)]
    pub selector: PlanSelector,
}

impl ItemArgs {
    /// The full item ID, accepting a bare position number.
    pub fn item_id(&self) -> String {
        let item = self.item.trim();
        if item.parse::<u32>().is_ok() {
            format!("item-{item}")
        } else {
            item.to_string()
        }
    }
}

#[derive(Subcommand)]
pub enum ChecklistCommands {
    /// Show the checklist with its readiness score
    #[command(alias = "s")]
    Show(PlanSelector),
    /// Mark an item as packed/done
    #[command(alias = "c")]
    Check(ItemArgs),
    /// Mark an item as not packed/done
    #[command(alias = "u")]
    Uncheck(ItemArgs),
    /// Uncheck every item
    Reset(PlanSelector),
    /// Show only the readiness score
    Score(PlanSelector),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_item_id_accepts_bare_number() {
        let args = ItemArgs {
            item: " 7 ".to_string(),
            selector: PlanSelector { plan: None },
        };
        assert_eq!(args.item_id(), "item-7");

        let args = ItemArgs {
            item: "item-12".to_string(),
            selector: PlanSelector { plan: Some(2) },
        };
        assert_eq!(args.item_id(), "item-12");
    }

    #[test]
    fn test_create_args_parse() {
        let args = Args::try_parse_from([
            "hikeready",
            "plan",
            "create",
            "--type",
            "Overnight",
            "--terrain",
            "mountain",
            "--elevation",
            "high",
            "--duration",
            "10",
            "--group",
            "solo",
            "--experience",
            "beginner",
        ])
        .unwrap();

        let Some(Commands::Plan {
            command: PlanCommands::Create(create),
        }) = args.command
        else {
            panic!("expected plan create");
        };
        let params = CreateHikePlan::from(create);
        assert_eq!(params.duration, 10);
        assert!(params.weather.is_none());
        assert!(params.hike_type.eq_ignore_ascii_case("overnight"));
    }

    #[test]
    fn test_unknown_terrain_is_rejected() {
        let result = Args::try_parse_from([
            "hikeready",
            "plan",
            "create",
            "--type",
            "day",
            "--terrain",
            "swamp",
            "--elevation",
            "low",
            "--duration",
            "3",
            "--group",
            "solo",
            "--experience",
            "advanced",
        ]);
        assert!(result.is_err());
    }
}
