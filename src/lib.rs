pub mod config;
pub mod error;
pub mod estimator;
pub mod format;
pub mod logging;
pub mod rates;
pub mod ui;
pub mod wizard;

pub use error::{ConfigError, EstimateError, WizardError};
pub use estimator::{estimate, CostBreakdown, EstimateResult, Estimator, Risk, Severity};
pub use rates::{LocationMultipliers, RateTable};
pub use wizard::{FloorPlan, ProjectDetails, Stage, Wizard};
