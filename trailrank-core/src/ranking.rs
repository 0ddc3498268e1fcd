//! Rank catalog routes for a hiker.
//!
//! The `Ranker` trait is the engine boundary: callers hand over a validated
//! [`Catalog`] and one [`UserPreferences`] record and receive an ordered
//! [`Ranking`]. Persisting or displaying the result is the caller's concern.

use thiserror::Error;

use crate::{
    Catalog, CatalogError, CostBreakdown, CriterionKey, Factor, PreferencesError, Route, RouteId,
    UserPreferences,
};

/// One cell of the weighted decision matrix for a ranked route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionScore {
    /// Column identity.
    pub key: CriterionKey,
    /// Display name.
    pub name: String,
    /// Owning factor.
    pub factor: Factor,
    /// Raw value before normalisation.
    pub raw: f64,
    /// Vector-normalised value.
    pub normalized: f64,
    /// Combined factor, preference and in-factor weight.
    pub weight: f64,
    /// `normalized × weight`.
    pub weighted: f64,
}

/// A route with its score, rank and justification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedRoute {
    /// The catalog route.
    pub route: Route,
    /// 1-based position in the ranking.
    pub rank: usize,
    /// Relative closeness to the ideal, in `0.0..=1.0`.
    pub score: f64,
    /// Euclidean distance to the ideal solution.
    pub distance_to_ideal: f64,
    /// Euclidean distance to the anti-ideal solution.
    pub distance_to_anti_ideal: f64,
    /// Weighted decision-matrix row, catalog criteria first.
    pub criteria: Vec<CriterionScore>,
    /// Estimated trip cost.
    pub cost: CostBreakdown,
    /// Accessibility score derived from the travel distance.
    pub accessibility: f64,
    /// Days on the trail.
    pub trip_days: u32,
    /// `true` when the travel distance was a fallback guess.
    pub distance_estimated: bool,
    /// Human-readable reasons, most important first.
    pub explanations: Vec<String>,
}

/// How one factor contributed to the ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorSummary {
    /// The factor.
    pub factor: Factor,
    /// Display name.
    pub name: String,
    /// Baseline weight combined with the hiker's weight, renormalised.
    pub effective_weight: f64,
    /// What the factor measures.
    pub description: String,
}

/// Aggregate figures over the ranked routes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingSummary {
    /// Routes ranked.
    pub total_routes: usize,
    /// Mean score.
    pub average_score: f64,
    /// Name of the first-ranked route.
    pub top_route_name: Option<String>,
}

/// Description of how the ranking was produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Methodology {
    /// Algorithm name.
    pub algorithm: String,
    /// Factor contributions in display order.
    pub factors: Vec<FactorSummary>,
    /// Plain-language summary of the method.
    pub explanation: String,
    /// Aggregate figures.
    pub summary: RankingSummary,
}

/// Non-fatal conditions absorbed while ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RankWarning {
    /// Every route had the same value, so the column cannot separate them.
    ConstantCriterion {
        /// Column identity.
        key: CriterionKey,
        /// Display name.
        name: String,
    },
    /// A location was unknown and the fallback distance was used.
    UnknownLocation {
        /// Route whose cost and accessibility rely on the guess.
        route_id: RouteId,
        /// Trailhead location.
        destination: String,
    },
    /// The route sat on both the ideal and anti-ideal solution.
    NeutralScore {
        /// Affected route.
        route_id: RouteId,
        /// Score assigned in place of the undefined ratio.
        score: f64,
    },
}

/// Bookkeeping about a ranking run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Absorbed degradations.
    pub warnings: Vec<RankWarning>,
    /// Routes scored.
    pub routes_evaluated: usize,
    /// Decision-matrix columns, catalog and computed.
    pub criteria_evaluated: usize,
}

/// Result of ranking a catalog for one hiker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ranking {
    /// Routes ordered by descending score.
    pub routes: Vec<RankedRoute>,
    /// How the ranking was produced.
    pub methodology: Methodology,
    /// Absorbed degradations and counts.
    pub diagnostics: Diagnostics,
}

impl Ranking {
    /// The first-ranked route, if any.
    #[must_use]
    pub fn top(&self) -> Option<&RankedRoute> {
        self.routes.first()
    }

    /// Look up a ranked route by catalog identifier.
    #[must_use]
    pub fn find(&self, id: RouteId) -> Option<&RankedRoute> {
        self.routes.iter().find(|ranked| ranked.route.id == id)
    }
}

/// Errors returned by [`Ranker::rank`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
    /// There was nothing to rank.
    #[error("catalog contains no routes")]
    EmptyCatalog,
    /// The preference record failed validation.
    #[error("invalid preferences: {0}")]
    InvalidPreferences(#[from] PreferencesError),
    /// Reference data failed validation.
    #[error("catalog integrity: {0}")]
    Catalog(#[from] CatalogError),
}

/// Order catalog routes by how well they suit a hiker.
///
/// Implementations must be `Send + Sync` so independent requests can run in
/// parallel against one shared catalog, and must be deterministic: equal
/// inputs give equal rankings.
pub trait Ranker: Send + Sync {
    /// Rank every catalog route for `preferences`.
    ///
    /// # Errors
    /// Returns [`RankError`] when the catalog is empty or the preferences
    /// are invalid. No partial ranking is produced.
    fn rank(&self, catalog: &Catalog, preferences: &UserPreferences)
    -> Result<Ranking, RankError>;
}
