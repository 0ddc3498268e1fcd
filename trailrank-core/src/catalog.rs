//! Validated reference data: criteria, baseline factor weights and routes.
//!
//! A [`Catalog`] is built once and read by every ranking request. Building
//! it checks integrity up front so the engine never meets a missing value:
//! each route carries exactly one value for every catalog criterion, stored
//! in criterion order.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::{
    Criterion, CriterionError, CriterionId, Factor, FactorWeights, FactorWeightsError, Route,
    RouteError, RouteId,
};

/// Raw measurement of one criterion for one route.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriterionValue {
    /// Route measured.
    pub route_id: RouteId,
    /// Criterion measured.
    pub criterion_id: CriterionId,
    /// Raw value.
    pub value: f64,
}

/// Errors raised while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// A criterion definition was invalid.
    #[error(transparent)]
    Criterion(#[from] CriterionError),
    /// A route definition was invalid.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// Baseline factor weights were invalid.
    #[error("invalid factor weights: {0}")]
    FactorWeights(#[from] FactorWeightsError),
    /// Two criteria shared an identifier.
    #[error("criterion {id} is defined more than once")]
    DuplicateCriterion {
        /// Repeated identifier.
        id: CriterionId,
    },
    /// Two routes shared an identifier.
    #[error("route {id} is defined more than once")]
    DuplicateRoute {
        /// Repeated identifier.
        id: RouteId,
    },
    /// A value referenced a route that is not in the catalog.
    #[error("value references unknown route {route_id}")]
    UnknownRoute {
        /// Dangling route reference.
        route_id: RouteId,
    },
    /// A value referenced a criterion that is not in the catalog.
    #[error("value references unknown criterion {criterion_id}")]
    UnknownCriterion {
        /// Dangling criterion reference.
        criterion_id: CriterionId,
    },
    /// A (route, criterion) pair had more than one value.
    #[error("route {route_id} has more than one value for criterion {criterion_id}")]
    DuplicateValue {
        /// Route measured twice.
        route_id: RouteId,
        /// Criterion measured twice.
        criterion_id: CriterionId,
    },
    /// A (route, criterion) pair had no value.
    #[error("route {route_id} is missing a value for criterion {criterion_id}")]
    MissingValue {
        /// Route lacking the value.
        route_id: RouteId,
        /// Criterion lacking the value.
        criterion_id: CriterionId,
    },
    /// A value was NaN or infinite.
    #[error("route {route_id} has a non-finite value for criterion {criterion_id}")]
    NonFiniteValue {
        /// Route measured.
        route_id: RouteId,
        /// Criterion measured.
        criterion_id: CriterionId,
    },
}

/// A route together with its raw values, aligned with
/// [`Catalog::criteria`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    route: Route,
    values: Vec<f64>,
}

impl CatalogEntry {
    /// The catalog route.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Raw values in criterion order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Immutable, validated reference data.
///
/// # Examples
/// ```
/// use trailrank_core::{
///     Catalog, CatalogError, Criterion, CriterionId, CriterionKind, CriterionValue, Difficulty,
///     Factor, FactorWeights, Mountain, Route, RouteId,
/// };
///
/// let scenic = Criterion {
///     id: CriterionId(1),
///     factor: Factor::ExperienceQuality,
///     name: "Scenic Value".into(),
///     unit: "1-5".into(),
///     is_benefit: true,
///     weight_in_factor: 1.0,
///     kind: CriterionKind::Scenery,
/// };
/// let route = Route {
///     id: RouteId(1),
///     name: "Crater rim".into(),
///     difficulty: Difficulty::Moderate,
///     distance_km: 18.0,
///     duration_hours: 30.0,
///     mountain: Mountain {
///         name: "Rinjani".into(),
///         location: "senaru".into(),
///         region: "lombok".into(),
///     },
///     description: String::new(),
/// };
/// let value = CriterionValue { route_id: RouteId(1), criterion_id: CriterionId(1), value: 5.0 };
///
/// let catalog = Catalog::new(
///     vec![scenic],
///     FactorWeights::new(0.35, 0.30, 0.35),
///     vec![route],
///     vec![value],
/// )?;
/// assert_eq!(catalog.value(RouteId(1), CriterionId(1)), Some(5.0));
///
/// let err = Catalog::new(
///     catalog.criteria().to_vec(),
///     catalog.factor_weights(),
///     catalog.routes().cloned().collect(),
///     Vec::new(),
/// )
/// .unwrap_err();
/// assert!(matches!(err, CatalogError::MissingValue { .. }));
/// # Ok::<(), CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    criteria: Vec<Criterion>,
    factor_weights: FactorWeights,
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and assemble a catalog.
    ///
    /// Route order is preserved; it is the tie-break order for ranking.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for invalid definitions, dangling or
    /// duplicate references, non-finite values, and any route lacking a
    /// value for a catalog criterion.
    pub fn new(
        criteria: Vec<Criterion>,
        factor_weights: FactorWeights,
        routes: Vec<Route>,
        values: Vec<CriterionValue>,
    ) -> Result<Self, CatalogError> {
        factor_weights.validate()?;
        let column_of = index_criteria(&criteria)?;
        let row_of = index_routes(&routes)?;
        warn_on_uneven_factor_shares(&criteria);

        let mut cells: Vec<Vec<Option<f64>>> = vec![vec![None; criteria.len()]; routes.len()];
        for value in values {
            let row = *row_of.get(&value.route_id).ok_or(CatalogError::UnknownRoute {
                route_id: value.route_id,
            })?;
            let column =
                *column_of
                    .get(&value.criterion_id)
                    .ok_or(CatalogError::UnknownCriterion {
                        criterion_id: value.criterion_id,
                    })?;
            if !value.value.is_finite() {
                return Err(CatalogError::NonFiniteValue {
                    route_id: value.route_id,
                    criterion_id: value.criterion_id,
                });
            }
            let cell = cells
                .get_mut(row)
                .and_then(|cells_in_row| cells_in_row.get_mut(column))
                .ok_or(CatalogError::UnknownCriterion {
                    criterion_id: value.criterion_id,
                })?;
            if cell.replace(value.value).is_some() {
                return Err(CatalogError::DuplicateValue {
                    route_id: value.route_id,
                    criterion_id: value.criterion_id,
                });
            }
        }

        let entries = routes
            .into_iter()
            .zip(cells)
            .map(|(route, row)| complete_row(route, row, &criteria))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            criteria,
            factor_weights,
            entries,
        })
    }

    /// Catalog criteria in column order.
    #[must_use]
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Look up a criterion by identifier.
    #[must_use]
    pub fn criterion(&self, id: CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|criterion| criterion.id == id)
    }

    /// Baseline factor weights.
    #[must_use]
    pub const fn factor_weights(&self) -> FactorWeights {
        self.factor_weights
    }

    /// Routes with their values, in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Routes in catalog order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.entries.iter().map(CatalogEntry::route)
    }

    /// Number of routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the catalog holds no routes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw value of `criterion` for `route`.
    #[must_use]
    pub fn value(&self, route: RouteId, criterion: CriterionId) -> Option<f64> {
        let column = self.criteria.iter().position(|c| c.id == criterion)?;
        self.entries
            .iter()
            .find(|entry| entry.route.id == route)
            .and_then(|entry| entry.values.get(column).copied())
    }

    /// Keep only the routes accepted by `keep`, preserving order.
    #[must_use]
    pub fn filtered<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Route) -> bool,
    {
        Self {
            criteria: self.criteria.clone(),
            factor_weights: self.factor_weights,
            entries: self
                .entries
                .iter()
                .filter(|entry| keep(&entry.route))
                .cloned()
                .collect(),
        }
    }
}

/// Serialisable catalog layout with values listed separately.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogDocument {
    /// Catalog criteria.
    pub criteria: Vec<Criterion>,
    /// Baseline factor weights.
    pub factor_weights: FactorWeights,
    /// Routes in tie-break order.
    pub routes: Vec<Route>,
    /// One value per (route, criterion) pair.
    pub values: Vec<CriterionValue>,
}

#[cfg(feature = "serde")]
impl TryFrom<CatalogDocument> for Catalog {
    type Error = CatalogError;

    fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
        Self::new(
            document.criteria,
            document.factor_weights,
            document.routes,
            document.values,
        )
    }
}

#[cfg(feature = "serde")]
impl From<&Catalog> for CatalogDocument {
    fn from(catalog: &Catalog) -> Self {
        let values = catalog
            .entries
            .iter()
            .flat_map(|entry| {
                catalog
                    .criteria
                    .iter()
                    .zip(entry.values.iter())
                    .map(|(criterion, value)| CriterionValue {
                        route_id: entry.route.id,
                        criterion_id: criterion.id,
                        value: *value,
                    })
            })
            .collect();
        Self {
            criteria: catalog.criteria.clone(),
            factor_weights: catalog.factor_weights,
            routes: catalog.routes().cloned().collect(),
            values,
        }
    }
}

fn index_criteria(criteria: &[Criterion]) -> Result<HashMap<CriterionId, usize>, CatalogError> {
    let mut column_of = HashMap::with_capacity(criteria.len());
    for (column, criterion) in criteria.iter().enumerate() {
        criterion.validate()?;
        if column_of.insert(criterion.id, column).is_some() {
            return Err(CatalogError::DuplicateCriterion { id: criterion.id });
        }
    }
    Ok(column_of)
}

fn index_routes(routes: &[Route]) -> Result<HashMap<RouteId, usize>, CatalogError> {
    let mut row_of = HashMap::with_capacity(routes.len());
    for (row, route) in routes.iter().enumerate() {
        route.validate()?;
        if row_of.insert(route.id, row).is_some() {
            return Err(CatalogError::DuplicateRoute { id: route.id });
        }
    }
    Ok(row_of)
}

fn complete_row(
    route: Route,
    row: Vec<Option<f64>>,
    criteria: &[Criterion],
) -> Result<CatalogEntry, CatalogError> {
    let values = row
        .into_iter()
        .zip(criteria)
        .map(|(cell, criterion)| {
            cell.ok_or(CatalogError::MissingValue {
                route_id: route.id,
                criterion_id: criterion.id,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CatalogEntry { route, values })
}

#[expect(
    clippy::float_arithmetic,
    reason = "in-factor shares are summed to detect uneven splits"
)]
fn warn_on_uneven_factor_shares(criteria: &[Criterion]) {
    let mut seen = HashSet::new();
    for factor in criteria.iter().map(|criterion| criterion.factor) {
        if !seen.insert(factor) || factor == Factor::LogisticsCost {
            continue;
        }
        let share: f64 = criteria
            .iter()
            .filter(|criterion| criterion.factor == factor)
            .map(|criterion| criterion.weight_in_factor)
            .sum();
        if (share - 1.0).abs() > 1e-6 {
            log::warn!("criteria under {factor} have in-factor weights summing to {share}");
        }
    }
}
