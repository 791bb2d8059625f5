use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cost-predictor", version, about = "Construction Cost Predictor")]
pub struct Cli {
    /// Configuration file path (optional)
    #[arg(short, long, default_value = "cost-predictor.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interactive estimation wizard (default)
    Wizard {
        /// Floor plan to use, skipping the upload step
        #[arg(short, long)]
        floor_plan: Option<PathBuf>,
    },

    /// Estimate a project without the wizard
    Estimate {
        /// Project area in square feet
        #[arg(short, long, allow_negative_numbers = true)]
        area: f64,

        /// Project location (unknown locations use multiplier 1.0)
        #[arg(short, long)]
        location: String,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known locations and their cost multipliers
    Locations,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Wizard if none provided
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Wizard { floor_plan: None })
    }
}
