#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for catalog assembly.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use trailrank_core::{
    Catalog, CatalogError, Criterion, CriterionId, CriterionKind, CriterionValue, Difficulty,
    Factor, FactorWeights, Mountain, Route, RouteId,
};

/// Catalog inputs and the outcome of building them.
pub struct TestContext {
    criteria: RefCell<Vec<Criterion>>,
    routes: RefCell<Vec<Route>>,
    values: RefCell<Vec<CriterionValue>>,
    weights: RefCell<FactorWeights>,
    outcome: RefCell<Option<Result<Catalog, CatalogError>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        criteria: RefCell::new(Vec::new()),
        routes: RefCell::new(Vec::new()),
        values: RefCell::new(Vec::new()),
        weights: RefCell::new(FactorWeights::new(0.35, 0.30, 0.35)),
        outcome: RefCell::new(None),
    }
}

fn criterion(
    id: u32,
    factor: Factor,
    name: &str,
    is_benefit: bool,
    kind: CriterionKind,
) -> Criterion {
    Criterion {
        id: CriterionId(id),
        factor,
        name: name.into(),
        unit: "1-5".into(),
        is_benefit,
        weight_in_factor: 1.0,
        kind,
    }
}

fn route(id: u32, name: &str, difficulty: Difficulty, location: &str) -> Route {
    Route {
        id: RouteId(id),
        name: name.into(),
        difficulty,
        distance_km: 9.0,
        duration_hours: 8.0,
        mountain: Mountain {
            name: "Merbabu".into(),
            location: location.into(),
            region: "central_java".into(),
        },
        description: String::new(),
    }
}

fn value(route_id: u32, criterion_id: u32, value: f64) -> CriterionValue {
    CriterionValue {
        route_id: RouteId(route_id),
        criterion_id: CriterionId(criterion_id),
        value,
    }
}

#[given("two criteria and two routes")]
fn two_criteria_two_routes(context: &TestContext) {
    context.criteria.replace(vec![
        criterion(
            1,
            Factor::PhysicalDemand,
            "Technical Difficulty",
            false,
            CriterionKind::General,
        ),
        criterion(
            2,
            Factor::ExperienceQuality,
            "Scenic Value",
            true,
            CriterionKind::Scenery,
        ),
    ]);
    context.routes.replace(vec![
        route(20, "Selo", Difficulty::Moderate, "selo"),
        route(10, "Wekas", Difficulty::Easy, "wekas"),
    ]);
}

#[given("every route has a value for every criterion")]
fn complete_values(context: &TestContext) {
    context.values.replace(vec![
        value(20, 1, 3.0),
        value(20, 2, 4.0),
        value(10, 1, 2.0),
        value(10, 2, 4.0),
    ]);
}

#[given("the second route lacks its scenery value")]
fn incomplete_values(context: &TestContext) {
    context
        .values
        .replace(vec![value(20, 1, 3.0), value(20, 2, 4.0), value(10, 1, 2.0)]);
}

#[given("the factor weights are 0.5, 0.5 and 0.5")]
fn unbalanced_weights(context: &TestContext) {
    context.weights.replace(FactorWeights::new(0.5, 0.5, 0.5));
}

#[when("I build the catalog")]
fn build_catalog(context: &TestContext) {
    let outcome = Catalog::new(
        context.criteria.borrow().clone(),
        *context.weights.borrow(),
        context.routes.borrow().clone(),
        context.values.borrow().clone(),
    );
    context.outcome.replace(Some(outcome));
}

#[then("the catalog holds 2 routes")]
fn holds_two_routes(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let catalog = outcome
        .as_ref()
        .expect("catalog was built")
        .as_ref()
        .expect("catalog is valid");
    assert_eq!(catalog.len(), 2);
}

#[then("routes keep their declared order")]
fn keeps_order(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let catalog = outcome
        .as_ref()
        .expect("catalog was built")
        .as_ref()
        .expect("catalog is valid");
    let ids: Vec<RouteId> = catalog.routes().map(|route| route.id).collect();
    assert_eq!(ids, vec![RouteId(20), RouteId(10)]);
}

#[then("building fails with a missing value error")]
fn fails_missing(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("catalog was built")
        .as_ref()
        .expect_err("catalog is incomplete");
    assert_eq!(
        *err,
        CatalogError::MissingValue {
            route_id: RouteId(10),
            criterion_id: CriterionId(2),
        }
    );
}

#[then("building fails with a factor weight error")]
fn fails_weights(context: &TestContext) {
    let outcome = context.outcome.borrow();
    let err = outcome
        .as_ref()
        .expect("catalog was built")
        .as_ref()
        .expect_err("weights are unbalanced");
    assert!(matches!(err, CatalogError::FactorWeights(_)));
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn complete_catalog(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn missing_value(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn unbalanced_factor_weights(context: TestContext) {
    let _ = context;
}
