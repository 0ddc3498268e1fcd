//! Facade crate for the trailrank route ranking engine.
//!
//! This crate re-exports the domain model, the stock reference data and the
//! TOPSIS engine. The gear advisor sits behind the `gear` feature.
//!
//! ```
//! use trailrank::{
//!     CostEstimator, CriteriaAugmenter, ExperienceLevel, LocationTable, Ranker, TopsisEngine,
//!     UserPreferences, seed_catalog,
//! };
//!
//! let catalog = seed_catalog()?;
//! let locations = LocationTable::default();
//! let engine = TopsisEngine::new(CriteriaAugmenter::new(
//!     locations.clone(),
//!     CostEstimator::new(locations),
//! ));
//! let ranking = engine.rank(
//!     &catalog,
//!     &UserPreferences::new(ExperienceLevel::Beginner, "Surabaya"),
//! )?;
//! assert_eq!(ranking.methodology.algorithm, "TOPSIS");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub use trailrank_core::{
    BudgetRange, Catalog, CatalogError, Concern, CostBreakdown, CostModel, Criterion,
    CriterionKey, CriterionScore, Diagnostics, Difficulty, DistanceEstimate, DistanceProvider,
    ExperienceLevel, Factor, FactorWeights, Interest, Methodology, Mountain, PreferencesError,
    RankError, RankWarning, RankedRoute, Ranker, Ranking, Route, RouteId, TimeCommitment,
    UserPreferences,
};

#[cfg(feature = "serde")]
pub use trailrank_core::CatalogDocument;

pub use trailrank_data::{CostEstimator, CostTables, LocationTable, seed_catalog};

pub use trailrank_topsis::{
    CriteriaAugmenter, EngineConfig, ExplainConfig, PreferenceWeighter, TopsisEngine,
    WeightingRules,
};

#[cfg(feature = "gear")]
pub use trailrank_gear::{GearAdvisor, GearList, GearRequest, GearRequestError, Season, Weather};
