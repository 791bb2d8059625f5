use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cost_predictor::config;
use cost_predictor::logging::{init_tracing, LogTarget};

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let command = args.get_command();

    // Config commands report load errors themselves
    if let cli::Commands::Config { action } = &command {
        init_tracing("warn", LogTarget::Stderr)?;
        return match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config),
            cli::ConfigCommands::Validate => commands::config::validate(&args.config),
        };
    }

    if let cli::Commands::Version = command {
        println!("Construction Cost Predictor v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = config::load_config(&args.config)?;

    // The wizard owns the terminal, so it never logs to stderr
    let target = match &command {
        cli::Commands::Wizard { .. } => match &cfg.logging.file {
            Some(path) => LogTarget::File(path.clone()),
            None => LogTarget::Discard,
        },
        _ => LogTarget::Stderr,
    };
    init_tracing(&cfg.logging.level, target)?;

    // Dispatch to appropriate command handler
    match command {
        cli::Commands::Wizard { floor_plan } => {
            commands::wizard::execute(&cfg, floor_plan)?;
        }
        cli::Commands::Estimate {
            area,
            location,
            json,
        } => {
            commands::estimate::execute(&cfg, area, &location, json)?;
        }
        cli::Commands::Locations => {
            commands::locations::execute(&cfg)?;
        }
        cli::Commands::Config { .. } | cli::Commands::Version => {}
    }

    Ok(())
}
