//! Trip cost estimation boundary.
//!
//! The engine only needs the total of a [`CostBreakdown`]; the full
//! breakdown is carried through to callers so they can show where the money
//! goes.

use crate::{DistanceEstimate, Difficulty};

/// Spending tier for lodging and meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BudgetLevel {
    /// Homestays and warung meals.
    Budget,
    /// Guesthouses and restaurant meals.
    Standard,
    /// Hotels and catered meals.
    Premium,
}

/// Everything the cost model needs to price one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripCostInput<'a> {
    /// Named home location.
    pub origin: &'a str,
    /// Named trailhead location.
    pub destination: &'a str,
    /// Permit region of the mountain.
    pub region: &'a str,
    /// Route difficulty.
    pub difficulty: Difficulty,
    /// Days on the trail.
    pub days: u32,
    /// Hikers in the party.
    pub group_size: u32,
    /// Whether a guide is hired.
    pub needs_guide: bool,
    /// Whether gear is rented.
    pub needs_equipment: bool,
    /// Lodging and meal tier.
    pub budget_level: BudgetLevel,
}

/// Estimated trip cost in whole rupiah, per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    /// Getting to the trailhead and back.
    pub transportation: u64,
    /// Park entry permits.
    pub permits: u64,
    /// Guide fees.
    pub guide: u64,
    /// Lodging before and between trail days.
    pub accommodation: u64,
    /// Food.
    pub meals: u64,
    /// Gear rental.
    pub equipment: u64,
    /// Contingency on top of the other categories.
    pub miscellaneous: u64,
    /// Sum of every category.
    pub total: u64,
}

/// A priced trip plus the distance used to price it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostEstimate {
    /// Per-category costs.
    pub breakdown: CostBreakdown,
    /// One-way distance from origin to trailhead.
    pub distance: DistanceEstimate,
}

/// Price a trip.
///
/// Implementations must be deterministic and thread-safe.
pub trait CostModel: Send + Sync {
    /// Return the cost breakdown for `input`.
    fn estimate(&self, input: &TripCostInput<'_>) -> CostEstimate;
}

impl<T: CostModel + ?Sized> CostModel for &T {
    fn estimate(&self, input: &TripCostInput<'_>) -> CostEstimate {
        (**self).estimate(input)
    }
}
