use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

use cost_predictor::config::{self, Config};

/// Execute the config show command
///
/// Displays the effective configuration (file, environment and defaults merged)
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!(path = %path.display(), "Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!(path = %path.display(), "Validating configuration file");

    let cfg = config::load_config(path)?;

    if !path.exists() {
        println!("{}", format!("Note: {} not found, using defaults", path.display()).dimmed());
    }
    println!("{}", "✓ Configuration is valid".green());
    println!();
    print_summary(&cfg);

    info!("Configuration validation successful");
    Ok(())
}

fn print_summary(cfg: &Config) {
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Currency".cyan(), cfg.display.currency_symbol);
    println!("  {}: {}", "Log Level".cyan(), cfg.logging.level);
    println!(
        "  {}: material {}, labour {}, transportation {}, overhead {}",
        "Rates".cyan(),
        cfg.rates.material,
        cfg.rates.labour,
        cfg.rates.transportation,
        cfg.rates.overhead
    );
    println!("  {}: {}", "Locations".cyan(), cfg.locations.len());
}
