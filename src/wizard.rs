//! Wizard controller
//!
//! A forward-only flow `Upload -> Area -> Location -> Results` that owns the
//! project details for one session. Every action checks the current stage
//! and is rejected without touching state when it does not apply.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::WizardError;
use crate::estimator::{EstimateResult, Estimator};
use crate::rates::LocationMultipliers;

/// File extensions the floor plan picker accepts
pub const FLOOR_PLAN_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Upload,
    Area,
    Location,
    Results,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upload => "upload",
            Self::Area => "area",
            Self::Location => "location",
            Self::Results => "results",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorPlanKind {
    Image,
    Pdf,
}

/// Reference to the selected floor plan file
///
/// Only the path is kept; the file is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    path: PathBuf,
    kind: FloorPlanKind,
}

impl FloorPlan {
    /// Accept a path if its extension is one the picker allows
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, WizardError> {
        let path = path.into();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let kind = match extension.as_deref() {
            Some("jpg") | Some("jpeg") | Some("png") => FloorPlanKind::Image,
            Some("pdf") => FloorPlanKind::Pdf,
            _ => {
                return Err(WizardError::UnsupportedFloorPlan {
                    path: path.display().to_string(),
                })
            }
        };

        Ok(Self { path, kind })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> FloorPlanKind {
        self.kind
    }

    /// File name for display, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Inputs and results accumulated over one wizard session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDetails {
    pub floor_plan: Option<FloorPlan>,
    /// Square feet
    pub area: Option<f64>,
    pub location: Option<String>,
    pub estimate: Option<EstimateResult>,
}

pub struct Wizard {
    stage: Stage,
    details: ProjectDetails,
    estimator: Estimator,
}

impl Wizard {
    pub fn new(estimator: Estimator) -> Self {
        Self {
            stage: Stage::Upload,
            details: ProjectDetails::default(),
            estimator,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// The computed estimate, available once the wizard reaches `Results`
    pub fn estimate(&self) -> Option<&EstimateResult> {
        match self.stage {
            Stage::Results => self.details.estimate.as_ref(),
            Stage::Upload | Stage::Area | Stage::Location => None,
        }
    }

    /// Locations offered by the picker, in display order
    pub fn locations(&self) -> &LocationMultipliers {
        self.estimator.locations()
    }

    /// Store the floor plan and move on to the area step
    pub fn select_floor_plan(&mut self, floor_plan: FloorPlan) -> Result<(), WizardError> {
        self.expect_stage(Stage::Upload, "select a floor plan")?;

        tracing::info!(floor_plan = %floor_plan.path().display(), "Floor plan selected");
        self.details.floor_plan = Some(floor_plan);
        self.transition(Stage::Area);
        Ok(())
    }

    /// Parse and store the project area
    ///
    /// Text that does not parse as a finite number clears any previously
    /// stored area. Positivity is checked when advancing.
    pub fn enter_area(&mut self, input: &str) -> Result<f64, WizardError> {
        self.expect_stage(Stage::Area, "enter an area")?;

        match input.trim().parse::<f64>() {
            Ok(area) if area.is_finite() => {
                self.details.area = Some(area);
                Ok(area)
            }
            _ => {
                tracing::warn!(input = %input, "Rejected non-numeric area");
                self.details.area = None;
                Err(WizardError::InvalidArea {
                    input: input.to_string(),
                })
            }
        }
    }

    /// Move from the area step to the location step
    ///
    /// Rejects any area the estimator could not price at every location,
    /// since the location step has no way back.
    pub fn advance(&mut self) -> Result<(), WizardError> {
        self.expect_stage(Stage::Area, "advance")?;
        let area = self.require_area()?;
        self.estimator.check_area(area)?;
        self.transition(Stage::Location);
        Ok(())
    }

    /// Choose a location, compute the estimate and show results
    ///
    /// On any error the wizard stays in `Location` with details unchanged.
    pub fn select_location(&mut self, location: &str) -> Result<&EstimateResult, WizardError> {
        self.expect_stage(Stage::Location, "select a location")?;

        if location.trim().is_empty() {
            return Err(WizardError::NoLocationSelected);
        }

        let area = self.require_area()?;
        let estimate = self.estimator.estimate(area, location)?;

        self.details.location = Some(location.to_string());
        self.transition(Stage::Results);
        Ok(&*self.details.estimate.insert(estimate))
    }

    fn require_area(&self) -> Result<f64, WizardError> {
        match self.details.area {
            Some(area) if area.is_finite() && area > 0.0 => Ok(area),
            Some(area) => {
                tracing::warn!(area = area, "Rejected non-positive area");
                Err(WizardError::InvalidArea {
                    input: area.to_string(),
                })
            }
            None => Err(WizardError::InvalidArea {
                input: String::new(),
            }),
        }
    }

    fn expect_stage(&self, expected: Stage, action: &'static str) -> Result<(), WizardError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                stage: self.stage,
                action,
            })
        }
    }

    fn transition(&mut self, next: Stage) {
        tracing::info!(from = %self.stage, to = %next, "Wizard stage changed");
        self.stage = next;
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(Estimator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;

    fn wizard_at_area() -> Wizard {
        let mut wizard = Wizard::default();
        wizard
            .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
            .unwrap();
        wizard
    }

    #[test]
    fn test_floor_plan_extensions() {
        assert_eq!(FloorPlan::from_path("a.JPG").unwrap().kind(), FloorPlanKind::Image);
        assert_eq!(FloorPlan::from_path("a.jpeg").unwrap().kind(), FloorPlanKind::Image);
        assert_eq!(FloorPlan::from_path("dir/a.pdf").unwrap().kind(), FloorPlanKind::Pdf);
        assert!(matches!(
            FloorPlan::from_path("a.docx"),
            Err(WizardError::UnsupportedFloorPlan { .. })
        ));
        assert!(FloorPlan::from_path("noext").is_err());
    }

    #[test]
    fn test_display_name() {
        let plan = FloorPlan::from_path("/tmp/plans/house.pdf").unwrap();
        assert_eq!(plan.display_name(), "house.pdf");
    }

    #[test]
    fn test_enter_area_parses_and_stores() {
        let mut wizard = wizard_at_area();
        assert_eq!(wizard.enter_area(" 1200.5 ").unwrap(), 1200.5);
        assert_eq!(wizard.details().area, Some(1200.5));
        // Typing alone does not advance
        assert_eq!(wizard.stage(), Stage::Area);
    }

    #[test]
    fn test_non_numeric_area_clears_previous_value() {
        let mut wizard = wizard_at_area();
        wizard.enter_area("900").unwrap();
        let err = wizard.enter_area("nine hundred").unwrap_err();
        assert!(matches!(err, WizardError::InvalidArea { .. }));
        assert_eq!(wizard.details().area, None);
        assert!(wizard.enter_area("NaN").is_err());
    }

    #[test]
    fn test_advance_rejects_non_positive_area() {
        let mut wizard = wizard_at_area();
        wizard.enter_area("-5").unwrap();
        assert!(matches!(wizard.advance(), Err(WizardError::InvalidArea { .. })));
        assert_eq!(wizard.stage(), Stage::Area);

        wizard.enter_area("0").unwrap();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.stage(), Stage::Area);
    }

    #[test]
    fn test_advance_rejects_area_too_large_to_estimate() {
        let mut wizard = wizard_at_area();
        wizard.enter_area("1e13").unwrap();

        let err = wizard.advance().unwrap_err();
        assert!(matches!(
            err,
            WizardError::Estimate(EstimateError::CostOverflow { .. })
        ));
        assert_eq!(wizard.stage(), Stage::Area);

        // Still editable, so the user can correct it
        wizard.enter_area("1000").unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.stage(), Stage::Location);
    }

    #[test]
    fn test_placeholder_location_is_rejected() {
        let mut wizard = wizard_at_area();
        wizard.enter_area("1000").unwrap();
        wizard.advance().unwrap();

        assert_eq!(wizard.select_location(""), Err(WizardError::NoLocationSelected));
        assert_eq!(wizard.stage(), Stage::Location);
        assert_eq!(wizard.details().location, None);
    }

    #[test]
    fn test_actions_in_wrong_stage_are_rejected() {
        let mut wizard = Wizard::default();
        assert!(matches!(
            wizard.enter_area("100"),
            Err(WizardError::InvalidTransition { stage: Stage::Upload, .. })
        ));
        assert!(wizard.select_location("Mumbai").is_err());
        assert_eq!(wizard.stage(), Stage::Upload);
        assert_eq!(wizard.details(), &ProjectDetails::default());
    }

    #[test]
    fn test_results_is_terminal() {
        let mut wizard = wizard_at_area();
        wizard.enter_area("1000").unwrap();
        wizard.advance().unwrap();
        wizard.select_location("Mumbai").unwrap();

        let err = wizard.select_location("Delhi").unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidTransition {
                stage: Stage::Results,
                action: "select a location",
            }
        );
        assert_eq!(wizard.details().location.as_deref(), Some("Mumbai"));
        assert_eq!(wizard.estimate().map(|e| e.total_cost), Some(6_500_000));
    }

    #[test]
    fn test_estimate_hidden_before_results() {
        let wizard = wizard_at_area();
        assert!(wizard.estimate().is_none());
    }
}
