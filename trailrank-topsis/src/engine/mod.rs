//! TOPSIS ranking engine.
//!
//! Responsibilities:
//! - augment every catalog route with the per-request computed criteria;
//! - normalise, weight and score the decision matrix;
//! - order routes by score and attach explanations and a methodology block.
//!
//! Boundaries:
//! - the engine never fetches data: catalog and preferences arrive complete;
//! - degenerate arithmetic is absorbed and reported as [`RankWarning`]s.
//!
//! Invariants:
//! - scores lie in `0.0..=1.0` and are never NaN;
//! - equal scores keep catalog order and ranks run `1..=n`.

mod matrix;

use trailrank_core::{
    Catalog, ComputedCriterion, CostModel, CriterionKind, CriterionScore, Diagnostics,
    DistanceProvider, FactorWeights, RankError, RankWarning, RankedRoute, Ranker, Ranking,
    UserPreferences,
};

use crate::augment::{Augmentation, CriteriaAugmenter};
use crate::explain::{ExplainConfig, RouteFacts, explain};
use crate::methodology;
use crate::weights::{PreferenceWeighter, WeightingRules};

use matrix::{Column, Extremes, apply_weights, closeness, column_norms, euclidean, normalize};

/// Score given to a route that sits on both the ideal and the anti-ideal.
pub const DEFAULT_NEUTRAL_SCORE: f64 = 0.5;

/// Tunables of [`TopsisEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Score used when closeness is undefined.
    pub neutral_score: f64,
    /// Explanation thresholds.
    pub explain: ExplainConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neutral_score: DEFAULT_NEUTRAL_SCORE,
            explain: ExplainConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Neutral score the engine actually assigns.
    ///
    /// A configured value that is NaN, infinite or outside `0.0..=1.0`
    /// cannot be a closeness score and is replaced by
    /// [`DEFAULT_NEUTRAL_SCORE`].
    #[must_use]
    pub fn effective_neutral_score(&self) -> f64 {
        if (0.0..=1.0).contains(&self.neutral_score) {
            self.neutral_score
        } else {
            DEFAULT_NEUTRAL_SCORE
        }
    }
}

/// Rank routes with TOPSIS.
///
/// The engine holds no per-request state, so one instance can serve
/// concurrent requests against a shared catalog.
///
/// # Examples
/// ```
/// use trailrank_core::{ExperienceLevel, Ranker, UserPreferences};
/// use trailrank_data::{seed_catalog, CostEstimator, LocationTable};
/// use trailrank_topsis::{CriteriaAugmenter, TopsisEngine};
///
/// let catalog = seed_catalog()?;
/// let engine = TopsisEngine::new(CriteriaAugmenter::new(
///     LocationTable::default(),
///     CostEstimator::new(LocationTable::default()),
/// ));
/// let preferences = UserPreferences::new(ExperienceLevel::Intermediate, "Yogyakarta");
/// let ranking = engine.rank(&catalog, &preferences)?;
/// assert_eq!(ranking.routes.len(), catalog.len());
/// assert_eq!(ranking.top().map(|top| top.rank), Some(1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct TopsisEngine<D, C> {
    augmenter: CriteriaAugmenter<D, C>,
    weighter: PreferenceWeighter,
    config: EngineConfig,
}

impl<D: DistanceProvider, C: CostModel> TopsisEngine<D, C> {
    /// Build an engine with the stock weighting rules and configuration.
    #[must_use]
    pub fn new(augmenter: CriteriaAugmenter<D, C>) -> Self {
        Self {
            augmenter,
            weighter: PreferenceWeighter::default(),
            config: EngineConfig::default(),
        }
    }

    /// Replace the weighting rules.
    #[must_use]
    pub fn with_weighting(mut self, rules: WeightingRules) -> Self {
        self.weighter = PreferenceWeighter::new(rules);
        self
    }

    /// Replace the engine configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        if config.effective_neutral_score().to_bits() != config.neutral_score.to_bits() {
            log::warn!(
                "neutral score {} is outside 0..=1; using {DEFAULT_NEUTRAL_SCORE}",
                config.neutral_score
            );
        }
        self.config = config;
        self
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Preference weighter in use.
    #[must_use]
    pub const fn weighter(&self) -> &PreferenceWeighter {
        &self.weighter
    }
}

struct Scored {
    index: usize,
    score: f64,
    to_ideal: f64,
    to_anti_ideal: f64,
}

#[expect(
    clippy::float_arithmetic,
    reason = "column weight is a product of three weights"
)]
fn column_weight(column: &Column, baseline: FactorWeights, user: FactorWeights) -> f64 {
    baseline.get(column.factor) * user.get(column.factor) * column.weight_in_factor
}

#[expect(clippy::float_arithmetic, reason = "weighted value is a product")]
fn criterion_scores(
    columns: &[Column],
    raw: &[f64],
    normalized: &[f64],
    weights: &[f64],
) -> Vec<CriterionScore> {
    columns
        .iter()
        .zip(raw)
        .zip(normalized)
        .zip(weights)
        .map(|(((column, raw), normalized), weight)| CriterionScore {
            key: column.key,
            name: column.name.clone(),
            factor: column.factor,
            raw: *raw,
            normalized: *normalized,
            weight: *weight,
            weighted: normalized * weight,
        })
        .collect()
}

fn raw_value_of_kind(columns: &[Column], row: &[f64], kind: CriterionKind) -> Option<f64> {
    columns
        .iter()
        .zip(row)
        .find(|(column, _)| column.kind == kind)
        .map(|(_, value)| *value)
}

impl<D: DistanceProvider, C: CostModel> TopsisEngine<D, C> {
    fn unknown_locations(catalog: &Catalog, augmentations: &[Augmentation]) -> Vec<RankWarning> {
        catalog
            .routes()
            .zip(augmentations)
            .filter(|(_, augmentation)| augmentation.distance_estimated)
            .map(|(route, _)| {
                log::warn!(
                    "no coordinates for trip to {}; route {} uses the fallback distance",
                    route.mountain.location,
                    route.id
                );
                RankWarning::UnknownLocation {
                    route_id: route.id,
                    destination: route.mountain.location.clone(),
                }
            })
            .collect()
    }

    fn score(
        &self,
        catalog: &Catalog,
        weighted: &[Vec<f64>],
        ideal: &[f64],
        anti_ideal: &[f64],
        warnings: &mut Vec<RankWarning>,
    ) -> Vec<Scored> {
        let neutral = self.config.effective_neutral_score();
        let mut scored = Vec::with_capacity(weighted.len());
        for (index, (row, route)) in weighted.iter().zip(catalog.routes()).enumerate() {
            let to_ideal = euclidean(row, ideal);
            let to_anti_ideal = euclidean(row, anti_ideal);
            let score = closeness(to_ideal, to_anti_ideal).unwrap_or_else(|| {
                log::debug!("route {} sits on both ideals; using neutral score", route.id);
                warnings.push(RankWarning::NeutralScore {
                    route_id: route.id,
                    score: neutral,
                });
                neutral
            });
            scored.push(Scored {
                index,
                score,
                to_ideal,
                to_anti_ideal,
            });
        }
        scored
    }
}

impl<D: DistanceProvider, C: CostModel> Ranker for TopsisEngine<D, C> {
    fn rank(
        &self,
        catalog: &Catalog,
        preferences: &UserPreferences,
    ) -> Result<Ranking, RankError> {
        preferences.validate()?;
        if catalog.is_empty() {
            return Err(RankError::EmptyCatalog);
        }
        let baseline = catalog.factor_weights();
        let user_weights = self.weighter.weights(preferences);
        log::debug!(
            "ranking {} routes for a {} hiker with weights {user_weights:?}",
            catalog.len(),
            preferences.experience_level
        );

        let columns: Vec<Column> = catalog
            .criteria()
            .iter()
            .map(Column::from_static)
            .chain(ComputedCriterion::ALL.into_iter().map(Column::from_computed))
            .collect();
        let width = columns.len();

        let augmentations: Vec<Augmentation> = catalog
            .routes()
            .map(|route| self.augmenter.augment(route, preferences))
            .collect();
        let raw: Vec<Vec<f64>> = catalog
            .entries()
            .iter()
            .zip(&augmentations)
            .map(|(entry, augmentation)| {
                entry
                    .values()
                    .iter()
                    .copied()
                    .chain(
                        ComputedCriterion::ALL
                            .into_iter()
                            .map(|computed| augmentation.value(computed)),
                    )
                    .collect()
            })
            .collect();

        let mut warnings = Self::unknown_locations(catalog, &augmentations);
        if raw.len() > 1 {
            let extremes = Extremes::of(&raw, width);
            warnings.extend(extremes.constant_columns().filter_map(|index| {
                columns.get(index).map(|column| RankWarning::ConstantCriterion {
                    key: column.key,
                    name: column.name.clone(),
                })
            }));
        }

        let norms = column_norms(&raw, width);
        let normalized: Vec<Vec<f64>> = raw.iter().map(|row| normalize(row, &norms)).collect();
        let weights: Vec<f64> = columns
            .iter()
            .map(|column| column_weight(column, baseline, user_weights))
            .collect();
        let weighted: Vec<Vec<f64>> = normalized
            .iter()
            .map(|row| apply_weights(row, &weights))
            .collect();
        let (ideal, anti_ideal) = Extremes::of(&weighted, width).ideals(&columns);
        log::debug!("ideal {ideal:?}, anti-ideal {anti_ideal:?}");

        let mut scored = self.score(catalog, &weighted, &ideal, &anti_ideal, &mut warnings);
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut routes = Vec::with_capacity(scored.len());
        for (position, entry) in scored.into_iter().enumerate() {
            let (Some(catalog_entry), Some(augmentation), Some(raw_row), Some(normalized_row)) = (
                catalog.entries().get(entry.index),
                augmentations.get(entry.index),
                raw.get(entry.index),
                normalized.get(entry.index),
            ) else {
                continue;
            };
            let route = catalog_entry.route();
            let facts = RouteFacts {
                difficulty: route.difficulty,
                scenery: raw_value_of_kind(&columns, raw_row, CriterionKind::Scenery),
                crowding: raw_value_of_kind(&columns, raw_row, CriterionKind::Crowding),
                trip_days: augmentation.trip_days,
                total_cost: augmentation.cost.total,
            };
            routes.push(RankedRoute {
                route: route.clone(),
                rank: position + 1,
                score: entry.score,
                distance_to_ideal: entry.to_ideal,
                distance_to_anti_ideal: entry.to_anti_ideal,
                criteria: criterion_scores(&columns, raw_row, normalized_row, &weights),
                cost: augmentation.cost,
                accessibility: augmentation.accessibility,
                trip_days: augmentation.trip_days,
                distance_estimated: augmentation.distance_estimated,
                explanations: explain(&facts, preferences, &self.config.explain),
            });
        }

        let methodology = methodology::describe(baseline, user_weights, &routes);
        log::debug!(
            "ranked {} routes; top is {:?}",
            routes.len(),
            methodology.summary.top_route_name
        );
        Ok(Ranking {
            diagnostics: Diagnostics {
                warnings,
                routes_evaluated: routes.len(),
                criteria_evaluated: width,
            },
            routes,
            methodology,
        })
    }
}
