//! Per-request criteria derived from the hiker's situation.
//!
//! The catalog only knows static route attributes. How much a trip costs and
//! how far away the trailhead is depend on who is asking, so both are
//! computed here for every route and appended to the decision matrix as
//! [`ComputedCriterion`] columns.

use trailrank_core::{
    ComputedCriterion, CostBreakdown, CostModel, DistanceEstimate, DistanceProvider, Route,
    TripCostInput, UserPreferences,
};

/// Accessibility never drops below this score.
pub const MIN_ACCESSIBILITY: f64 = 1.0;

/// Accessibility of a trailhead `km` away: `max(1, 6 - km / 100)`.
///
/// There is no upper clamp, so a trailhead on the doorstep scores 6.
///
/// # Examples
/// ```
/// use trailrank_topsis::accessibility_score;
///
/// assert_eq!(accessibility_score(0.0), 6.0);
/// assert_eq!(accessibility_score(250.0), 3.5);
/// assert_eq!(accessibility_score(900.0), 1.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "accessibility decays linearly with distance"
)]
#[must_use]
pub fn accessibility_score(km: f64) -> f64 {
    (6.0 - km / 100.0).max(MIN_ACCESSIBILITY)
}

/// Values computed for one route and one hiker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Augmentation {
    /// Priced trip.
    pub cost: CostBreakdown,
    /// Accessibility score.
    pub accessibility: f64,
    /// Days on the trail.
    pub trip_days: u32,
    /// One-way distance from the hiker to the trailhead.
    pub distance: DistanceEstimate,
    /// `true` when either the cost or the accessibility relied on a
    /// fallback distance.
    pub distance_estimated: bool,
}

impl Augmentation {
    /// Raw decision-matrix value for `criterion`.
    #[expect(
        clippy::cast_precision_loss,
        reason = "rupiah totals stay far below 2^52"
    )]
    #[must_use]
    pub const fn value(&self, criterion: ComputedCriterion) -> f64 {
        match criterion {
            ComputedCriterion::TripCost => self.cost.total as f64,
            ComputedCriterion::Accessibility => self.accessibility,
        }
    }
}

/// Compute trip cost and accessibility for routes.
#[derive(Debug, Clone)]
pub struct CriteriaAugmenter<D, C> {
    distances: D,
    costs: C,
}

impl<D: DistanceProvider, C: CostModel> CriteriaAugmenter<D, C> {
    /// Combine a distance provider with a cost model.
    #[must_use]
    pub const fn new(distances: D, costs: C) -> Self {
        Self { distances, costs }
    }

    /// Compute the per-request values for `route`.
    ///
    /// Unknown locations never fail: the providers fall back to a default
    /// distance and [`Augmentation::distance_estimated`] records it.
    #[must_use]
    pub fn augment(&self, route: &Route, preferences: &UserPreferences) -> Augmentation {
        let trip_days = route.trip_days();
        let input = TripCostInput {
            origin: &preferences.location,
            destination: &route.mountain.location,
            region: &route.mountain.region,
            difficulty: route.difficulty,
            days: trip_days,
            group_size: preferences.group_size,
            needs_guide: preferences.needs_guide(),
            needs_equipment: preferences.needs_equipment(),
            budget_level: preferences.budget_range.budget_level(),
        };
        let estimate = self.costs.estimate(&input);
        let distance = self
            .distances
            .distance_km(&preferences.location, &route.mountain.location);
        Augmentation {
            cost: estimate.breakdown,
            accessibility: accessibility_score(distance.km),
            trip_days,
            distance,
            distance_estimated: distance.is_estimated() || estimate.distance.is_estimated(),
        }
    }
}
