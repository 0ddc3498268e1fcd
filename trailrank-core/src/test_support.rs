//! Test-only helpers: catalog builders, deterministic distance and cost
//! collaborators, and a trivial ranker used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{
    Catalog, CatalogError, CostBreakdown, CostEstimate, CostModel, Criterion, CriterionId,
    CriterionKind, CriterionValue, Diagnostics, Difficulty, DistanceEstimate, DistanceProvider,
    Factor, FactorWeights, Methodology, Mountain, RankError, RankedRoute, Ranker, Ranking,
    RankingSummary, Route, RouteId, TripCostInput, UserPreferences,
};

/// Build a catalog criterion with the given polarity and share.
#[must_use]
pub fn criterion(
    id: u32,
    factor: Factor,
    name: &str,
    is_benefit: bool,
    weight_in_factor: f64,
    kind: CriterionKind,
) -> Criterion {
    Criterion {
        id: CriterionId(id),
        factor,
        name: name.to_owned(),
        unit: "1-5".to_owned(),
        is_benefit,
        weight_in_factor,
        kind,
    }
}

/// Build a route whose trailhead is `location`.
#[must_use]
pub fn route(
    id: u32,
    name: &str,
    difficulty: Difficulty,
    duration_hours: f64,
    location: &str,
) -> Route {
    Route {
        id: RouteId(id),
        name: name.to_owned(),
        difficulty,
        distance_km: 10.0,
        duration_hours,
        mountain: Mountain {
            name: name.to_owned(),
            location: location.to_owned(),
            region: "test".to_owned(),
        },
        description: String::new(),
    }
}

/// Incrementally assemble a catalog with row-wise values.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    weights: FactorWeights,
    criteria: Vec<Criterion>,
    routes: Vec<Route>,
    values: Vec<CriterionValue>,
}

impl CatalogBuilder {
    /// Start from baseline factor weights.
    #[must_use]
    pub const fn new(weights: FactorWeights) -> Self {
        Self {
            weights,
            criteria: Vec::new(),
            routes: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Add a catalog criterion.
    #[must_use]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Add a route with values listed in criterion order.
    #[must_use]
    pub fn route(mut self, route: Route, values: &[f64]) -> Self {
        self.values.extend(
            self.criteria
                .iter()
                .zip(values)
                .map(|(criterion, value)| CriterionValue {
                    route_id: route.id,
                    criterion_id: criterion.id,
                    value: *value,
                }),
        );
        self.routes.push(route);
        self
    }

    /// Validate and build the catalog.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] from [`Catalog::new`].
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.criteria, self.weights, self.routes, self.values)
    }
}

/// Three criteria (difficulty, scenery, crowding) over three routes.
///
/// # Panics
/// Panics if the fixture itself is inconsistent.
#[expect(clippy::expect_used, reason = "fixture data is static and known valid")]
#[must_use]
pub fn fixture_catalog() -> Catalog {
    CatalogBuilder::new(FactorWeights::new(0.35, 0.30, 0.35))
        .criterion(criterion(
            1,
            Factor::PhysicalDemand,
            "Technical Difficulty",
            false,
            1.0,
            CriterionKind::General,
        ))
        .criterion(criterion(
            2,
            Factor::ExperienceQuality,
            "Scenic Value",
            true,
            0.6,
            CriterionKind::Scenery,
        ))
        .criterion(criterion(
            3,
            Factor::ExperienceQuality,
            "Crowding Level",
            false,
            0.4,
            CriterionKind::Crowding,
        ))
        .route(route(1, "Ridge Walk", Difficulty::Easy, 6.0, "alpha"), &[1.0, 3.0, 4.0])
        .route(
            route(2, "Crater Loop", Difficulty::Moderate, 30.0, "beta"),
            &[2.0, 5.0, 2.0],
        )
        .route(
            route(3, "Summit Push", Difficulty::Expert, 60.0, "gamma"),
            &[5.0, 4.0, 1.0],
        )
        .build()
        .expect("fixture catalog is complete")
}

/// Distance provider returning one distance for every pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDistance(pub DistanceEstimate);

impl FixedDistance {
    /// A measured distance of `km`.
    #[must_use]
    pub const fn measured(km: f64) -> Self {
        Self(DistanceEstimate::measured(km))
    }
}

impl DistanceProvider for FixedDistance {
    fn distance_km(&self, from: &str, to: &str) -> DistanceEstimate {
        if from == to {
            return DistanceEstimate::measured(0.0);
        }
        self.0
    }
}

/// Distance provider keyed by destination, falling back for unknown names.
#[derive(Debug, Clone, Default)]
pub struct DestinationDistance {
    distances: HashMap<String, f64>,
    fallback_km: f64,
}

impl DestinationDistance {
    /// Create a provider with the given fallback distance.
    #[must_use]
    pub fn new(fallback_km: f64) -> Self {
        Self {
            distances: HashMap::new(),
            fallback_km,
        }
    }

    /// Register a destination distance.
    #[must_use]
    pub fn with(mut self, destination: &str, km: f64) -> Self {
        self.distances.insert(destination.to_owned(), km);
        self
    }
}

impl DistanceProvider for DestinationDistance {
    fn distance_km(&self, _from: &str, to: &str) -> DistanceEstimate {
        self.distances.get(to).map_or_else(
            || DistanceEstimate::fallback(self.fallback_km),
            |km| DistanceEstimate::measured(*km),
        )
    }
}

/// Cost model charging a flat amount per hiker per day, booked as meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatCostModel {
    /// Rupiah per hiker per day.
    pub per_day: u64,
}

impl CostModel for FlatCostModel {
    fn estimate(&self, input: &TripCostInput<'_>) -> CostEstimate {
        let meals = self
            .per_day
            .saturating_mul(u64::from(input.days))
            .saturating_mul(u64::from(input.group_size));
        CostEstimate {
            breakdown: CostBreakdown {
                meals,
                total: meals,
                ..CostBreakdown::default()
            },
            distance: DistanceEstimate::measured(0.0),
        }
    }
}

/// Ranker that keeps catalog order and assigns neutral scores.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubRanker;

impl Ranker for StubRanker {
    fn rank(
        &self,
        catalog: &Catalog,
        preferences: &UserPreferences,
    ) -> Result<Ranking, RankError> {
        preferences.validate()?;
        if catalog.is_empty() {
            return Err(RankError::EmptyCatalog);
        }
        let routes: Vec<RankedRoute> = catalog
            .routes()
            .enumerate()
            .map(|(index, route)| RankedRoute {
                route: route.clone(),
                rank: index + 1,
                score: 0.5,
                distance_to_ideal: 0.0,
                distance_to_anti_ideal: 0.0,
                criteria: Vec::new(),
                cost: CostBreakdown::default(),
                accessibility: 1.0,
                trip_days: route.trip_days(),
                distance_estimated: false,
                explanations: Vec::new(),
            })
            .collect();
        let summary = RankingSummary {
            total_routes: routes.len(),
            average_score: 0.5,
            top_route_name: routes.first().map(|ranked| ranked.route.name.clone()),
        };
        Ok(Ranking {
            routes,
            methodology: Methodology {
                algorithm: "stub".to_owned(),
                factors: Vec::new(),
                explanation: String::new(),
                summary,
            },
            diagnostics: Diagnostics::default(),
        })
    }
}
