//! Decision-matrix arithmetic.
//!
//! Rows are routes in catalog order and every row has one value per column.
//! All helpers walk rows with iterators and zips, so a short row can only
//! shorten a computation, never read out of bounds.

use trailrank_core::{ComputedCriterion, Criterion, CriterionKey, CriterionKind, Factor};

/// Metadata of one decision-matrix column.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Column {
    pub(crate) key: CriterionKey,
    pub(crate) name: String,
    pub(crate) factor: Factor,
    pub(crate) is_benefit: bool,
    pub(crate) weight_in_factor: f64,
    pub(crate) kind: CriterionKind,
}

impl Column {
    pub(crate) fn from_static(criterion: &Criterion) -> Self {
        Self {
            key: CriterionKey::Static(criterion.id),
            name: criterion.name.clone(),
            factor: criterion.factor,
            is_benefit: criterion.is_benefit,
            weight_in_factor: criterion.weight_in_factor,
            kind: criterion.kind,
        }
    }

    pub(crate) fn from_computed(computed: ComputedCriterion) -> Self {
        Self {
            key: CriterionKey::Computed(computed),
            name: computed.name().to_owned(),
            factor: computed.factor(),
            is_benefit: computed.is_benefit(),
            weight_in_factor: computed.weight_in_factor(),
            kind: CriterionKind::General,
        }
    }
}

/// Per-column extremes of a set of rows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Extremes {
    pub(crate) min: Vec<f64>,
    pub(crate) max: Vec<f64>,
}

impl Extremes {
    pub(crate) fn of(rows: &[Vec<f64>], width: usize) -> Self {
        let start = Self {
            min: vec![f64::INFINITY; width],
            max: vec![f64::NEG_INFINITY; width],
        };
        rows.iter().fold(start, |acc, row| Self {
            min: acc.min.iter().zip(row).map(|(m, v)| m.min(*v)).collect(),
            max: acc.max.iter().zip(row).map(|(m, v)| m.max(*v)).collect(),
        })
    }

    /// Columns whose every value is identical.
    pub(crate) fn constant_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.min
            .iter()
            .zip(&self.max)
            .enumerate()
            .filter(|(_, (lo, hi))| lo.total_cmp(hi).is_eq())
            .map(|(column, _)| column)
    }

    /// Best and worst value per column given each column's polarity.
    pub(crate) fn ideals(&self, columns: &[Column]) -> (Vec<f64>, Vec<f64>) {
        columns
            .iter()
            .zip(self.min.iter().zip(&self.max))
            .map(|(column, (lo, hi))| {
                if column.is_benefit {
                    (*hi, *lo)
                } else {
                    (*lo, *hi)
                }
            })
            .unzip()
    }
}

/// Euclidean norm of every column.
#[expect(
    clippy::float_arithmetic,
    reason = "vector normalisation sums squares"
)]
pub(crate) fn column_norms(rows: &[Vec<f64>], width: usize) -> Vec<f64> {
    rows.iter()
        .fold(vec![0.0; width], |acc, row| {
            acc.iter()
                .zip(row)
                .map(|(sum, value)| value.mul_add(*value, *sum))
                .collect()
        })
        .into_iter()
        .map(f64::sqrt)
        .collect()
}

/// Divide each value by its column norm; a zero norm gives zero.
#[expect(clippy::float_arithmetic, reason = "vector normalisation divides")]
pub(crate) fn normalize(row: &[f64], norms: &[f64]) -> Vec<f64> {
    row.iter()
        .zip(norms)
        .map(|(value, norm)| if *norm > 0.0 { value / norm } else { 0.0 })
        .collect()
}

/// Multiply each value by its column weight.
#[expect(clippy::float_arithmetic, reason = "weighting multiplies")]
pub(crate) fn apply_weights(row: &[f64], weights: &[f64]) -> Vec<f64> {
    row.iter()
        .zip(weights)
        .map(|(value, weight)| value * weight)
        .collect()
}

/// Euclidean distance between a row and a reference vector.
#[expect(
    clippy::float_arithmetic,
    reason = "Euclidean distance sums squared differences"
)]
pub(crate) fn euclidean(row: &[f64], target: &[f64]) -> f64 {
    row.iter()
        .zip(target)
        .map(|(value, reference)| (value - reference).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Relative closeness to the ideal, or `None` when both distances are zero
/// and the ratio is undefined.
#[expect(clippy::float_arithmetic, reason = "closeness is a ratio of distances")]
pub(crate) fn closeness(to_ideal: f64, to_anti_ideal: f64) -> Option<f64> {
    let total = to_ideal + to_anti_ideal;
    (total > 0.0 && total.is_finite()).then(|| (to_anti_ideal / total).clamp(0.0, 1.0))
}
