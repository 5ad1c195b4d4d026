mod config;
mod generate_cmd;
mod intake_cmd;
mod plan_cmds;
mod profile_cmd;
mod tips_cmd;
mod tui;

use clap::{Parser, Subcommand};

use studi_store::Store;

use config::StudiConfig;
use intake_cmd::StyleArg;

#[derive(Parser)]
#[command(name = "studi", about = "Personal study plan generator")]
struct Cli {
    /// Data directory (overrides STUDI_DATA_DIR env var)
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a studi config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Save your profile: name, goal, study style, weekly hours
    Intake {
        /// Your name
        #[arg(long)]
        name: String,
        /// Learning goal (dsa, python, database, frontend, backend, sql)
        #[arg(long, default_value = "dsa")]
        goal: String,
        /// Preferred study style
        #[arg(long, value_enum, default_value_t = StyleArg::Mixed)]
        style: StyleArg,
        /// Weekly study hours
        #[arg(long, default_value_t = 10)]
        hours: u32,
    },
    /// Show the stored profile
    Profile,
    /// Print study strategy tips for the stored profile
    Tips,
    /// Generate a day-by-day plan from the stored profile
    Generate {
        /// Number of days to plan
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Saved-plan management
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Launch interactive TUI dashboard
    Dashboard,
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Show the current plan (or a saved plan by id)
    Show {
        /// Saved plan ID to show (omit for the current plan)
        plan_id: Option<String>,
    },
    /// Save the current plan into the saved collection
    Save,
    /// List saved plans, newest first
    List,
    /// Delete a saved plan
    Delete {
        /// Saved plan ID to delete
        plan_id: String,
    },
    /// Export a saved plan as a markdown document
    Export {
        /// Saved plan ID to export
        plan_id: String,
        /// Output file path (defaults to "<title>.md")
        #[arg(long)]
        output: Option<String>,
    },
}

/// Execute the `studi init` command: write config file.
fn cmd_init(cli_data_dir: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let data_dir = match cli_data_dir {
        Some(dir) => std::path::PathBuf::from(dir),
        None => match std::env::var("STUDI_DATA_DIR") {
            Ok(dir) => std::path::PathBuf::from(dir),
            Err(_) => config::default_data_dir(),
        },
    };

    let cfg = config::ConfigFile {
        storage: config::StorageSection {
            data_dir: data_dir.display().to_string(),
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  storage.data_dir = {}", data_dir.display());
    println!();
    println!("Next: run `studi intake --name <you>` to save a profile.");

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(cli.data_dir.as_deref(), force)?;
        }
        Commands::Intake {
            name,
            goal,
            style,
            hours,
        } => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            intake_cmd::run_intake(&store, &name, &goal, style, hours)?;
        }
        Commands::Profile => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            profile_cmd::run_profile(&store)?;
        }
        Commands::Tips => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            tips_cmd::run_tips(&store)?;
        }
        Commands::Generate { days } => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            generate_cmd::run_generate(&store, days)?;
        }
        Commands::Plan { command } => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            plan_cmds::run_plan_command(command, &store)?;
        }
        Commands::Dashboard => {
            let resolved = StudiConfig::resolve(cli.data_dir.as_deref())?;
            let store = Store::open(resolved.data_dir)?;
            tui::run_dashboard(store)?;
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Test support
// -----------------------------------------------------------------------
