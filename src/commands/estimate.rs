use anyhow::Result;
use colored::Colorize;

use cost_predictor::{
    config::Config,
    estimator::{EstimateResult, Severity},
    format::{format_currency, format_months, format_workers},
};

/// Execute the estimate command
///
/// Prints the estimate for `area` square feet at `location`, either as a
/// colored report or as pretty-printed JSON.
pub fn execute(cfg: &Config, area: f64, location: &str, json: bool) -> Result<()> {
    let estimator = cfg.estimator()?;

    let estimate = estimator.estimate(area, location)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print_report(&cfg.display.currency_symbol, area, location, &estimate);
    }

    Ok(())
}

fn print_report(symbol: &str, area: f64, location: &str, estimate: &EstimateResult) {
    let breakdown = &estimate.cost_breakdown;

    println!("{}", "Construction Cost Estimate".green().bold());
    println!("  {}: {} sq ft", "Area".cyan(), area);
    println!("  {}: {}", "Location".cyan(), location);
    println!();

    println!(
        "{} {}",
        "Total Project Cost:".bold(),
        format_currency(symbol, estimate.total_cost).green().bold()
    );
    println!("  Material Cost:   {}", format_currency(symbol, breakdown.material_cost));
    println!("  Labour Cost:     {}", format_currency(symbol, breakdown.labour_cost));
    println!("  Transportation:  {}", format_currency(symbol, breakdown.transportation_cost));
    println!("  Overhead:        {}", format_currency(symbol, breakdown.overhead_cost));
    println!();

    println!("{}", "Project Insights:".bold());
    println!("  Construction Time: {}", format_months(estimate.construction_time));
    println!("  Labour Required:   {}", format_workers(estimate.labour_required));
    println!();

    println!("{}", "Risk Analysis:".bold());
    for risk in &estimate.risk_analysis {
        let severity = match risk.severity {
            Severity::High => risk.severity.as_str().red(),
            Severity::Medium => risk.severity.as_str().yellow(),
            Severity::Low => risk.severity.as_str().green(),
        };
        println!("  {} [{}]", risk.title, severity);
        println!("    {}", risk.description.dimmed());
    }
}
