/// Integration tests for the estimation wizard flow
use cost_predictor::{
    config::Config,
    rates::{LocationEntry, RateTable},
    FloorPlan, Stage, Wizard, WizardError,
};

#[test]
fn test_happy_path() {
    let mut wizard = Wizard::default();
    assert_eq!(wizard.stage(), Stage::Upload);

    wizard
        .select_floor_plan(FloorPlan::from_path("floor-plan.pdf").unwrap())
        .unwrap();
    assert_eq!(wizard.stage(), Stage::Area);

    wizard.enter_area("1000").unwrap();
    assert_eq!(wizard.stage(), Stage::Area);
    wizard.advance().unwrap();
    assert_eq!(wizard.stage(), Stage::Location);

    let total = wizard.select_location("Mumbai").unwrap().total_cost;
    assert_eq!(total, 6_500_000);
    assert_eq!(wizard.stage(), Stage::Results);

    let details = wizard.details();
    assert_eq!(details.area, Some(1000.0));
    assert_eq!(details.location.as_deref(), Some("Mumbai"));
    assert!(details.floor_plan.is_some());
    assert_eq!(details.estimate.as_ref(), wizard.estimate());
}

#[test]
fn test_missing_area_raises_invalid_area() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.jpg").unwrap())
        .unwrap();

    let err = wizard.advance().unwrap_err();
    assert!(matches!(err, WizardError::InvalidArea { .. }));
    assert_eq!(wizard.stage(), Stage::Area);
    assert!(wizard.estimate().is_none());
}

#[test]
fn test_unparseable_area_raises_invalid_area() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.jpg").unwrap())
        .unwrap();

    assert!(matches!(
        wizard.enter_area("twelve"),
        Err(WizardError::InvalidArea { input }) if input == "twelve"
    ));
    assert!(matches!(wizard.advance(), Err(WizardError::InvalidArea { .. })));
    assert_eq!(wizard.stage(), Stage::Area);
}

#[test]
fn test_recovers_after_invalid_area() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
        .unwrap();

    wizard.enter_area("-100").unwrap();
    assert!(wizard.advance().is_err());

    wizard.enter_area("800").unwrap();
    wizard.advance().unwrap();
    let result = wizard.select_location("Other").unwrap();
    assert_eq!(result.total_cost, 4_000_000);
}

#[test]
fn test_unknown_location_is_accepted() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
        .unwrap();
    wizard.enter_area("800").unwrap();
    wizard.advance().unwrap();

    let result = wizard.select_location("Springfield").unwrap();
    assert_eq!(result.total_cost, 4_000_000);
    assert_eq!(wizard.details().location.as_deref(), Some("Springfield"));
}

#[test]
fn test_no_backward_transitions() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
        .unwrap();

    let err = wizard
        .select_floor_plan(FloorPlan::from_path("other.png").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        WizardError::InvalidTransition {
            stage: Stage::Area,
            ..
        }
    ));
    assert_eq!(
        wizard.details().floor_plan.as_ref().map(|p| p.display_name()),
        Some("plan.png".to_string())
    );
}

#[test]
fn test_wizard_uses_configured_tables() {
    let cfg = Config {
        rates: RateTable {
            material: 100.0,
            labour: 50.0,
            transportation: 10.0,
            overhead: 5.0,
        },
        locations: vec![LocationEntry {
            name: "Austin".to_string(),
            multiplier: 2.0,
        }],
        ..Config::default()
    };

    let mut wizard = Wizard::new(cfg.estimator().unwrap());
    let names: Vec<&str> = wizard.locations().names().collect();
    assert_eq!(names, vec!["Austin"]);

    wizard
        .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
        .unwrap();
    wizard.enter_area("10").unwrap();
    wizard.advance().unwrap();

    let result = wizard.select_location("Austin").unwrap();
    assert_eq!(result.total_cost, 3300);
}

#[test]
fn test_area_too_large_is_rejected_before_location_step() {
    let mut wizard = Wizard::default();
    wizard
        .select_floor_plan(FloorPlan::from_path("plan.png").unwrap())
        .unwrap();

    wizard.enter_area("1e13").unwrap();
    assert!(wizard.advance().is_err());
    assert_eq!(wizard.stage(), Stage::Area);

    // An area that passes can be priced at the most expensive location
    wizard.enter_area("1e12").unwrap();
    wizard.advance().unwrap();
    assert!(wizard.select_location("Mumbai").is_ok());
    assert_eq!(wizard.stage(), Stage::Results);
}
