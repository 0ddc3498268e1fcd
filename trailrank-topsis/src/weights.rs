//! Map qualitative preferences onto factor weights.
//!
//! Weighting is declarative: an experience preset picks the starting point,
//! then an ordered list of [`WeightRule`]s contributes additive deltas to an
//! accumulator. The sum is floored (unless disabled) and renormalised so the
//! result is always a distribution over the three factors.

use trailrank_core::{ExperienceLevel, Factor, FactorWeights, Interest, UserPreferences};

/// Default lower bound applied to each factor before renormalising.
pub const DEFAULT_MIN_WEIGHT: f64 = 0.05;

/// When a [`WeightRule`] applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Condition {
    /// The hiker reported this experience level.
    Experience(ExperienceLevel),
    /// The budget is one of the two lowest buckets.
    LowBudget,
    /// The hiker selected this interest.
    Interest(Interest),
}

impl Condition {
    /// Report whether the condition holds for `preferences`.
    #[must_use]
    pub fn holds(self, preferences: &UserPreferences) -> bool {
        match self {
            Self::Experience(level) => preferences.experience_level == level,
            Self::LowBudget => preferences.budget_range.is_low(),
            Self::Interest(interest) => preferences.has_interest(interest),
        }
    }
}

/// An additive per-factor adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightRule {
    /// When to apply the delta.
    pub when: Condition,
    /// Amount added to each factor; negative values subtract.
    pub delta: FactorWeights,
}

/// Starting weights for one experience level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preset {
    /// Level the preset replaces the baseline for.
    pub level: ExperienceLevel,
    /// Starting weights.
    pub weights: FactorWeights,
}

/// Immutable weighting configuration.
///
/// `Default` gives the stock rules: a near-even baseline, beginner and
/// expert presets, then low-budget, physical-challenge and scenic-views
/// adjustments, floored at [`DEFAULT_MIN_WEIGHT`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightingRules {
    /// Starting weights when no preset matches.
    pub baseline: FactorWeights,
    /// Experience presets; the first match wins.
    pub presets: Vec<Preset>,
    /// Adjustments applied in order.
    pub rules: Vec<WeightRule>,
    /// Lower bound per factor before renormalising; `None` lets weights go
    /// negative.
    pub min_weight: Option<f64>,
}

impl Default for WeightingRules {
    fn default() -> Self {
        Self {
            baseline: FactorWeights::new(0.33, 0.33, 0.34),
            presets: vec![
                Preset {
                    level: ExperienceLevel::Beginner,
                    weights: FactorWeights::new(0.2, 0.5, 0.3),
                },
                Preset {
                    level: ExperienceLevel::Expert,
                    weights: FactorWeights::new(0.5, 0.2, 0.3),
                },
            ],
            rules: vec![
                WeightRule {
                    when: Condition::LowBudget,
                    delta: FactorWeights::new(-0.05, 0.1, -0.05),
                },
                WeightRule {
                    when: Condition::Interest(Interest::PhysicalChallenge),
                    delta: FactorWeights::new(0.1, 0.0, -0.1),
                },
                WeightRule {
                    when: Condition::Interest(Interest::ScenicViews),
                    delta: FactorWeights::new(-0.1, 0.0, 0.1),
                },
            ],
            min_weight: Some(DEFAULT_MIN_WEIGHT),
        }
    }
}

impl WeightingRules {
    /// Stock rules without the floor, so subtractions can invert a weight's
    /// sign before renormalising.
    #[must_use]
    pub fn unclamped() -> Self {
        Self {
            min_weight: None,
            ..Self::default()
        }
    }

    /// Replace the floor.
    #[must_use]
    pub const fn with_min_weight(mut self, min_weight: Option<f64>) -> Self {
        self.min_weight = min_weight;
        self
    }

    /// Append a rule after the existing ones.
    #[must_use]
    pub fn with_rule(mut self, rule: WeightRule) -> Self {
        self.rules.push(rule);
        self
    }

    fn starting_point(&self, level: ExperienceLevel) -> FactorWeights {
        self.presets
            .iter()
            .find(|preset| preset.level == level)
            .map_or(self.baseline, |preset| preset.weights)
    }
}

/// Derive per-request factor weights from preferences.
///
/// # Examples
/// ```
/// use trailrank_core::{ExperienceLevel, Factor, UserPreferences};
/// use trailrank_topsis::PreferenceWeighter;
///
/// let weighter = PreferenceWeighter::default();
/// let beginner = weighter.weights(&UserPreferences::new(ExperienceLevel::Beginner, "Bogor"));
/// assert!(beginner.get(Factor::LogisticsCost) > beginner.get(Factor::PhysicalDemand));
/// assert!((beginner.sum() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceWeighter {
    rules: WeightingRules,
}

impl PreferenceWeighter {
    /// Use custom rules.
    #[must_use]
    pub const fn new(rules: WeightingRules) -> Self {
        Self { rules }
    }

    /// Rules in use.
    #[must_use]
    pub const fn rules(&self) -> &WeightingRules {
        &self.rules
    }

    /// Compute the factor weights for `preferences`; they always sum to one.
    #[expect(
        clippy::float_arithmetic,
        reason = "deltas are accumulated into float weights"
    )]
    #[must_use]
    pub fn weights(&self, preferences: &UserPreferences) -> FactorWeights {
        let start = self.rules.starting_point(preferences.experience_level);
        let accumulated = self
            .rules
            .rules
            .iter()
            .filter(|rule| rule.when.holds(preferences))
            .fold(start, |mut acc, rule| {
                for factor in Factor::ALL {
                    acc.set(factor, acc.get(factor) + rule.delta.get(factor));
                }
                acc
            });
        let floored = self.rules.min_weight.map_or(accumulated, |floor| {
            let mut clamped = accumulated;
            for factor in Factor::ALL {
                clamped.set(factor, accumulated.get(factor).max(floor));
            }
            clamped
        });
        floored.normalised().unwrap_or_else(|| {
            log::warn!("weighting rules produced no usable distribution; using equal weights");
            even_weights()
        })
    }
}

const fn even_weights() -> FactorWeights {
    const THIRD: f64 = 1.0 / 3.0;
    FactorWeights::new(THIRD, THIRD, THIRD)
}
