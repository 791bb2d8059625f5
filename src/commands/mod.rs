//! Command implementations for the CLI
//!
//! - wizard: Interactive estimation wizard
//! - estimate: One-shot estimate for scripting
//! - locations: List the location multiplier table
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod locations;
pub mod wizard;
