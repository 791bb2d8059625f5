use thiserror::Error;

use crate::wizard::Stage;

/// Errors produced by the estimator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// Area is NaN, infinite, zero or negative
    #[error("Invalid area: {area} (must be a positive number of square feet)")]
    InvalidArea { area: f64 },

    /// A category cost is too large to be represented exactly
    #[error("Area too large to estimate: {area} sq ft")]
    CostOverflow { area: f64 },
}

/// Errors produced by the wizard controller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// Area missing, non-numeric or not positive
    #[error("Invalid area: '{input}'. Enter a positive number of square feet")]
    InvalidArea { input: String },

    /// The placeholder entry was submitted instead of a location
    #[error("No location selected")]
    NoLocationSelected,

    /// File picker only accepts images and PDFs
    #[error("Unsupported floor plan '{path}'. Expected .jpg, .jpeg, .png or .pdf")]
    UnsupportedFloorPlan { path: String },

    /// Action is not valid in the current stage
    #[error("Cannot {action} during the {stage} stage")]
    InvalidTransition { stage: Stage, action: &'static str },

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid rate '{name}': {value} (must be a finite, non-negative number)")]
    InvalidRate { name: &'static str, value: f64 },

    #[error("Invalid multiplier for '{location}': {value} (must be a finite, positive number)")]
    InvalidMultiplier { location: String, value: f64 },

    #[error("Location name cannot be empty")]
    EmptyLocationName,

    #[error("Duplicate location: {0}")]
    DuplicateLocation(String),

    #[error("Currency symbol cannot be empty")]
    EmptyCurrencySymbol,

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
