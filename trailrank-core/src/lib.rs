//! Core domain types for the trailrank engine.
//!
//! The crate holds the catalog model (factors, criteria, routes and their
//! raw values), per-request hiker preferences, and the seams the ranking
//! engine is built against: [`DistanceProvider`], [`CostModel`] and
//! [`Ranker`]. Constructors and `validate` methods surface invalid input
//! before any scoring happens.
#![forbid(unsafe_code)]

mod catalog;
mod cost;
mod criterion;
mod distance;
mod factor;
mod preferences;
mod ranking;
mod route;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(feature = "serde")]
pub use catalog::CatalogDocument;
pub use catalog::{Catalog, CatalogEntry, CatalogError, CriterionValue};
pub use cost::{BudgetLevel, CostBreakdown, CostEstimate, CostModel, TripCostInput};
pub use criterion::{
    ComputedCriterion, Criterion, CriterionError, CriterionId, CriterionKey, CriterionKind,
};
pub use distance::{DistanceEstimate, DistanceProvider, DistanceSource};
pub use factor::{Factor, FactorWeights, FactorWeightsError, WEIGHT_SUM_TOLERANCE};
pub use preferences::{
    BudgetRange, Concern, ExperienceLevel, Interest, MAX_FITNESS, MIN_FITNESS, PreferencesError,
    TimeCommitment, UserPreferences,
};
pub use ranking::{
    CriterionScore, Diagnostics, FactorSummary, Methodology, RankError, RankWarning, RankedRoute,
    Ranker, Ranking, RankingSummary,
};
pub use route::{Difficulty, Mountain, Route, RouteError, RouteId};
