//! Measurable route attributes grouped under a [`Factor`].
//!
//! Catalog criteria are loaded once as reference data. Two further criteria
//! are computed per ranking request; [`CriterionKey`] keeps the two sources
//! apart so downstream code branches on a type rather than an id string.

use thiserror::Error;

use crate::Factor;

/// Identifier of a catalog criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CriterionId(pub u32);

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a criterion plays in explanation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CriterionKind {
    /// No explanation rule reads this criterion.
    #[default]
    General,
    /// Scenic value on a 1–5 scale.
    Scenery,
    /// Crowding on a 1–5 scale, lower is quieter.
    Crowding,
}

/// A measurable attribute belonging to exactly one factor.
///
/// # Examples
/// ```
/// use trailrank_core::{Criterion, CriterionId, CriterionKind, Factor};
///
/// let scenic = Criterion {
///     id: CriterionId(4),
///     factor: Factor::ExperienceQuality,
///     name: "Scenic Value".into(),
///     unit: "1-5".into(),
///     is_benefit: true,
///     weight_in_factor: 0.5,
///     kind: CriterionKind::Scenery,
/// };
/// assert!(scenic.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Criterion {
    /// Unique identifier within the catalog.
    pub id: CriterionId,
    /// Owning factor.
    pub factor: Factor,
    /// Display name.
    pub name: String,
    /// Unit of the raw measurement.
    pub unit: String,
    /// `true` when higher raw values are preferable.
    pub is_benefit: bool,
    /// Share of the owning factor's weight, in `0.0..=1.0`.
    pub weight_in_factor: f64,
    /// Explanation role.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: CriterionKind,
}

/// Errors returned by [`Criterion::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriterionError {
    /// The criterion name was blank.
    #[error("criterion {id} must have a name")]
    MissingName {
        /// Offending criterion.
        id: CriterionId,
    },
    /// The in-factor weight was not finite or fell outside `0.0..=1.0`.
    #[error("criterion {id} weight {weight} must be within 0.0..=1.0")]
    WeightOutOfRange {
        /// Offending criterion.
        id: CriterionId,
        /// Supplied weight.
        weight: f64,
    },
}

impl Criterion {
    /// Check the name and in-factor weight.
    ///
    /// # Errors
    /// Returns [`CriterionError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), CriterionError> {
        if self.name.trim().is_empty() {
            return Err(CriterionError::MissingName { id: self.id });
        }
        if !self.weight_in_factor.is_finite() || !(0.0..=1.0).contains(&self.weight_in_factor) {
            return Err(CriterionError::WeightOutOfRange {
                id: self.id,
                weight: self.weight_in_factor,
            });
        }
        Ok(())
    }
}

/// Criteria derived per request from the user's situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ComputedCriterion {
    /// Estimated total trip cost.
    TripCost,
    /// How easily the trailhead can be reached from the user's location.
    Accessibility,
}

impl ComputedCriterion {
    /// Every computed criterion in column order.
    pub const ALL: [Self; 2] = [Self::TripCost, Self::Accessibility];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TripCost => "Total Trip Cost",
            Self::Accessibility => "Accessibility Score",
        }
    }

    /// Unit of the computed value.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::TripCost => "IDR",
            Self::Accessibility => "score",
        }
    }

    /// Both computed criteria belong to logistics.
    #[must_use]
    pub const fn factor(self) -> Factor {
        Factor::LogisticsCost
    }

    /// Cost is minimised, accessibility maximised.
    #[must_use]
    pub const fn is_benefit(self) -> bool {
        matches!(self, Self::Accessibility)
    }

    /// Share of the logistics weight.
    #[must_use]
    pub const fn weight_in_factor(self) -> f64 {
        match self {
            Self::TripCost => 0.6,
            Self::Accessibility => 0.4,
        }
    }
}

/// Identifies a decision-matrix column regardless of where its values come
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "source", content = "id", rename_all = "snake_case")
)]
pub enum CriterionKey {
    /// Loaded from the catalog.
    Static(CriterionId),
    /// Computed for the current request.
    Computed(ComputedCriterion),
}

impl std::fmt::Display for CriterionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(id) => write!(f, "criterion {id}"),
            Self::Computed(computed) => f.write_str(computed.name()),
        }
    }
}
