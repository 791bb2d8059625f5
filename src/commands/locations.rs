use anyhow::Result;
use colored::Colorize;

use cost_predictor::{config::Config, rates::FALLBACK_MULTIPLIER};

/// Execute the locations command
pub fn execute(cfg: &Config) -> Result<()> {
    let estimator = cfg.estimator()?;

    println!("{}", "Location Cost Multipliers:".bold());
    for entry in estimator.locations().entries() {
        println!("  {} {:.2}", format!("{:<12}", entry.name).cyan(), entry.multiplier);
    }
    println!();
    println!("  {} {:.2}", format!("{:<12}", "(unlisted)").dimmed(), FALLBACK_MULTIPLIER);

    Ok(())
}
