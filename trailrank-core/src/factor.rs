//! Top-level decision factors and their baseline weights.
//!
//! Exactly three factors group every criterion. The enum offers
//! compile-time safety for factor lookups, mirroring how criteria and
//! preference weights refer to them.
//!
//! # Examples
//! ```
//! use trailrank_core::Factor;
//!
//! assert_eq!(Factor::LogisticsCost.as_str(), "logistics_cost");
//! assert_eq!(Factor::LogisticsCost.name(), "Logistics & Cost");
//! ```

use thiserror::Error;

/// A top-level decision dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Factor {
    /// Effort, elevation and technical difficulty of the trail.
    PhysicalDemand,
    /// Trip cost and how easy the trailhead is to reach.
    LogisticsCost,
    /// Scenery, crowding and cultural value of the hike.
    ExperienceQuality,
}

impl Factor {
    /// Every factor in display order.
    pub const ALL: [Self; 3] = [
        Self::PhysicalDemand,
        Self::LogisticsCost,
        Self::ExperienceQuality,
    ];

    /// Stable numeric identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::PhysicalDemand => 1,
            Self::LogisticsCost => 2,
            Self::ExperienceQuality => 3,
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhysicalDemand => "Physical Demand",
            Self::LogisticsCost => "Logistics & Cost",
            Self::ExperienceQuality => "Experience Quality",
        }
    }

    /// One-line description used in methodology summaries.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::PhysicalDemand => {
                "Technical difficulty, elevation gain and time on the trail"
            }
            Self::LogisticsCost => {
                "Estimated trip cost and how easily the trailhead can be reached"
            }
            Self::ExperienceQuality => "Scenic value, crowding and cultural significance",
        }
    }

    /// Position when listing factors, starting at 1.
    #[must_use]
    pub const fn display_order(self) -> u8 {
        self.id()
    }

    /// Return the factor as a `snake_case` `&str`.
    ///
    /// # Examples
    /// ```
    /// use trailrank_core::Factor;
    ///
    /// assert_eq!(Factor::PhysicalDemand.as_str(), "physical_demand");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PhysicalDemand => "physical_demand",
            Self::LogisticsCost => "logistics_cost",
            Self::ExperienceQuality => "experience_quality",
        }
    }
}

impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "physical_demand" => Ok(Self::PhysicalDemand),
            "logistics_cost" => Ok(Self::LogisticsCost),
            "experience_quality" => Ok(Self::ExperienceQuality),
            _ => Err(format!("unknown factor '{s}'")),
        }
    }
}

/// Tolerance applied when checking that factor weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// One weight per factor.
///
/// Used both for the static baseline weights of a catalog and for the
/// user-specific weights produced by preference weighting.
///
/// # Examples
/// ```
/// use trailrank_core::{Factor, FactorWeights};
///
/// let weights = FactorWeights::new(0.35, 0.30, 0.35);
/// assert_eq!(weights.get(Factor::LogisticsCost), 0.30);
/// assert!(weights.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactorWeights {
    /// Weight of [`Factor::PhysicalDemand`].
    pub physical_demand: f64,
    /// Weight of [`Factor::LogisticsCost`].
    pub logistics_cost: f64,
    /// Weight of [`Factor::ExperienceQuality`].
    pub experience_quality: f64,
}

/// Errors returned by [`FactorWeights::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorWeightsError {
    /// A weight was not finite or fell outside `0.0..=1.0`.
    #[error("weight {weight} for {factor} must be within 0.0..=1.0")]
    OutOfRange {
        /// Offending factor.
        factor: Factor,
        /// Supplied weight.
        weight: f64,
    },
    /// The weights did not add up to one.
    #[error("factor weights must sum to 1.0, found {sum}")]
    BadSum {
        /// Observed sum.
        sum: f64,
    },
}

impl FactorWeights {
    /// Build weights from the three factor values.
    #[must_use]
    pub const fn new(physical_demand: f64, logistics_cost: f64, experience_quality: f64) -> Self {
        Self {
            physical_demand,
            logistics_cost,
            experience_quality,
        }
    }

    /// Return the weight for `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::PhysicalDemand => self.physical_demand,
            Factor::LogisticsCost => self.logistics_cost,
            Factor::ExperienceQuality => self.experience_quality,
        }
    }

    /// Overwrite the weight for `factor`.
    pub const fn set(&mut self, factor: Factor, weight: f64) {
        match factor {
            Factor::PhysicalDemand => self.physical_demand = weight,
            Factor::LogisticsCost => self.logistics_cost = weight,
            Factor::ExperienceQuality => self.experience_quality = weight,
        }
    }

    /// Iterate `(factor, weight)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }

    /// Sum of all three weights.
    #[expect(clippy::float_arithmetic, reason = "weight totals are float sums")]
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.physical_demand + self.logistics_cost + self.experience_quality
    }

    /// Divide every weight by the running sum.
    ///
    /// Returns `None` when the sum is zero or not finite, since no
    /// distribution can be recovered from it.
    #[expect(clippy::float_arithmetic, reason = "renormalisation divides by the sum")]
    #[must_use]
    pub fn normalised(&self) -> Option<Self> {
        let total = self.sum();
        if total == 0.0 || !total.is_finite() {
            return None;
        }
        Some(Self::new(
            self.physical_demand / total,
            self.logistics_cost / total,
            self.experience_quality / total,
        ))
    }

    /// Check the weights form a distribution over the three factors.
    ///
    /// # Errors
    /// Returns [`FactorWeightsError`] when a weight is out of range or the
    /// sum deviates from one by more than [`WEIGHT_SUM_TOLERANCE`].
    #[expect(clippy::float_arithmetic, reason = "tolerance check subtracts floats")]
    pub fn validate(&self) -> Result<(), FactorWeightsError> {
        for (factor, weight) in self.iter() {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(FactorWeightsError::OutOfRange { factor, weight });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(FactorWeightsError::BadSum { sum });
        }
        Ok(())
    }
}
