//! Rate tables and the trip cost estimator.
//!
//! All amounts are whole rupiah. Each category is computed from the rate
//! tables, rounded on its own, and then summed; miscellaneous is a share of
//! the six other categories.

use std::collections::BTreeMap;

use trailrank_core::{
    BudgetLevel, CostBreakdown, CostEstimate, CostModel, Difficulty, DistanceProvider,
    TripCostInput,
};

/// One value per route difficulty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByDifficulty<T> {
    /// Value for [`Difficulty::Easy`].
    pub easy: T,
    /// Value for [`Difficulty::Moderate`].
    pub moderate: T,
    /// Value for [`Difficulty::Hard`].
    pub hard: T,
    /// Value for [`Difficulty::Expert`].
    pub expert: T,
}

impl<T: Copy> ByDifficulty<T> {
    /// Value for `difficulty`.
    #[must_use]
    pub const fn get(&self, difficulty: Difficulty) -> T {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Moderate => self.moderate,
            Difficulty::Hard => self.hard,
            Difficulty::Expert => self.expert,
        }
    }
}

/// One value per spending tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByLevel<T> {
    /// Value for [`BudgetLevel::Budget`].
    pub budget: T,
    /// Value for [`BudgetLevel::Standard`].
    pub standard: T,
    /// Value for [`BudgetLevel::Premium`].
    pub premium: T,
}

impl<T: Copy> ByLevel<T> {
    /// Value for `level`.
    #[must_use]
    pub const fn get(&self, level: BudgetLevel) -> T {
        match level {
            BudgetLevel::Budget => self.budget,
            BudgetLevel::Standard => self.standard,
            BudgetLevel::Premium => self.premium,
        }
    }
}

/// Rates used by [`CostEstimator`].
///
/// `Default` gives the stock Indonesian tariff.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CostTables {
    /// Fuel price per litre.
    pub fuel_per_litre: u64,
    /// Motorcycle fuel economy, km per litre.
    pub motorcycle_km_per_litre: f64,
    /// Flat public transport fare per person.
    pub public_transport_base: u64,
    /// Public transport fare per km per person.
    pub public_transport_per_km: u64,
    /// Car rental per day.
    pub car_rental_per_day: u64,
    /// Rental car fuel economy, km per litre.
    pub car_km_per_litre: f64,
    /// Smallest party that may share a rental car.
    pub car_min_group: u32,
    /// Permit base rate per person, keyed by trimmed lowercase region.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "region_rates"))]
    pub permit_rates: BTreeMap<String, u64>,
    /// Permit rate for regions missing from `permit_rates`.
    pub default_permit_rate: u64,
    /// Permit surcharge by difficulty.
    pub permit_multiplier: ByDifficulty<f64>,
    /// Guide fee per guide per day.
    pub guide_per_day: ByDifficulty<u64>,
    /// Hikers one guide can lead.
    pub hikers_per_guide: u32,
    /// Lodging per person per night.
    pub accommodation_per_night: ByLevel<u64>,
    /// Food per person per day.
    pub meals_per_day: ByLevel<u64>,
    /// Gear rental per person per day.
    pub equipment_per_day: ByDifficulty<u64>,
    /// Contingency share of the other categories.
    pub miscellaneous_share: f64,
}

impl Default for CostTables {
    fn default() -> Self {
        let permit_rates = [
            ("lombok", 150_000),
            ("east_java", 30_000),
            ("central_java", 25_000),
            ("west_java", 35_000),
        ]
        .into_iter()
        .map(|(region, rate)| (region.to_owned(), rate))
        .collect();
        Self {
            fuel_per_litre: 10_000,
            motorcycle_km_per_litre: 40.0,
            public_transport_base: 25_000,
            public_transport_per_km: 350,
            car_rental_per_day: 450_000,
            car_km_per_litre: 12.0,
            car_min_group: 5,
            permit_rates,
            default_permit_rate: 50_000,
            permit_multiplier: ByDifficulty {
                easy: 1.0,
                moderate: 1.2,
                hard: 1.5,
                expert: 2.0,
            },
            guide_per_day: ByDifficulty {
                easy: 200_000,
                moderate: 300_000,
                hard: 400_000,
                expert: 500_000,
            },
            hikers_per_guide: 4,
            accommodation_per_night: ByLevel {
                budget: 100_000,
                standard: 250_000,
                premium: 500_000,
            },
            meals_per_day: ByLevel {
                budget: 75_000,
                standard: 150_000,
                premium: 300_000,
            },
            equipment_per_day: ByDifficulty {
                easy: 50_000,
                moderate: 75_000,
                hard: 100_000,
                expert: 150_000,
            },
            miscellaneous_share: 0.10,
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "amounts are rounded and non-negative; float casts saturate"
)]
fn to_rupiah(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "rupiah amounts stay far below 2^52"
)]
const fn as_f64(value: u64) -> f64 {
    value as f64
}

fn region_key(region: &str) -> String {
    region.trim().to_lowercase()
}

#[cfg(feature = "serde")]
fn region_rates<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let rates: BTreeMap<String, u64> = serde::Deserialize::deserialize(deserializer)?;
    Ok(rates
        .into_iter()
        .map(|(region, rate)| (region_key(&region), rate))
        .collect())
}

impl CostTables {
    /// Add or replace the permit rate for `region`.
    #[must_use]
    pub fn with_permit_rate(mut self, region: &str, rate: u64) -> Self {
        self.permit_rates.insert(region_key(region), rate);
        self
    }

    /// Permit base rate for `region`, case-insensitive.
    #[must_use]
    pub fn permit_rate(&self, region: &str) -> u64 {
        self.permit_rates
            .get(region_key(region).as_str())
            .copied()
            .unwrap_or(self.default_permit_rate)
    }

    /// Cheapest way for the party to cover the round trip.
    #[expect(
        clippy::float_arithmetic,
        reason = "fuel and fare estimates scale with fractional distances"
    )]
    #[must_use]
    pub fn transportation(&self, one_way_km: f64, group_size: u32, days: u32) -> u64 {
        let round_trip_km = one_way_km.max(0.0) * 2.0;
        let fuel = as_f64(self.fuel_per_litre);
        let motorcycle = round_trip_km / self.motorcycle_km_per_litre * fuel;
        let public = as_f64(self.public_transport_per_km).mul_add(
            round_trip_km,
            as_f64(self.public_transport_base),
        );
        let per_person = to_rupiah(motorcycle.min(public));
        let individual = per_person.saturating_mul(u64::from(group_size));
        if group_size < self.car_min_group {
            return individual;
        }
        let car = to_rupiah(
            as_f64(self.car_rental_per_day) * f64::from(days.max(1))
                + round_trip_km / self.car_km_per_litre * fuel,
        );
        individual.min(car)
    }

    /// Park and conservation fees for the party.
    #[expect(
        clippy::float_arithmetic,
        reason = "the difficulty surcharge is a fractional multiplier"
    )]
    #[must_use]
    pub fn permits(&self, region: &str, difficulty: Difficulty, group_size: u32) -> u64 {
        to_rupiah(
            as_f64(self.permit_rate(region))
                * f64::from(group_size)
                * self.permit_multiplier.get(difficulty),
        )
    }

    /// Compute the full breakdown for `input` given the travel distance.
    #[expect(
        clippy::float_arithmetic,
        reason = "miscellaneous is a fractional share of the subtotal"
    )]
    #[must_use]
    pub fn breakdown(&self, input: &TripCostInput<'_>, one_way_km: f64) -> CostBreakdown {
        let group = u64::from(input.group_size);
        let days = u64::from(input.days);
        let transportation = self.transportation(one_way_km, input.group_size, input.days);
        let permits = self.permits(input.region, input.difficulty, input.group_size);
        let guide = if input.needs_guide {
            let guides = u64::from(input.group_size.div_ceil(self.hikers_per_guide.max(1)));
            self.guide_per_day
                .get(input.difficulty)
                .saturating_mul(days)
                .saturating_mul(guides)
        } else {
            0
        };
        let accommodation = self
            .accommodation_per_night
            .get(input.budget_level)
            .saturating_mul(group)
            .saturating_mul(days.saturating_sub(1));
        let meals = self
            .meals_per_day
            .get(input.budget_level)
            .saturating_mul(group)
            .saturating_mul(days);
        let equipment = if input.needs_equipment {
            self.equipment_per_day
                .get(input.difficulty)
                .saturating_mul(group)
                .saturating_mul(days)
        } else {
            0
        };
        let subtotal = [transportation, permits, guide, accommodation, meals, equipment]
            .into_iter()
            .fold(0_u64, u64::saturating_add);
        let miscellaneous = to_rupiah(as_f64(subtotal) * self.miscellaneous_share);
        CostBreakdown {
            transportation,
            permits,
            guide,
            accommodation,
            meals,
            equipment,
            miscellaneous,
            total: subtotal.saturating_add(miscellaneous),
        }
    }
}

/// Trip cost estimator backed by a distance provider and rate tables.
///
/// # Examples
/// ```
/// use trailrank_core::{BudgetLevel, CostModel, Difficulty, TripCostInput};
/// use trailrank_data::{CostEstimator, LocationTable};
///
/// let estimator = CostEstimator::new(LocationTable::default());
/// let estimate = estimator.estimate(&TripCostInput {
///     origin: "Yogyakarta",
///     destination: "Selo",
///     region: "central_java",
///     difficulty: Difficulty::Moderate,
///     days: 1,
///     group_size: 2,
///     needs_guide: false,
///     needs_equipment: false,
///     budget_level: BudgetLevel::Standard,
/// });
/// assert_eq!(estimate.breakdown.guide, 0);
/// assert!(!estimate.distance.is_estimated());
/// ```
#[derive(Debug, Clone)]
pub struct CostEstimator<D> {
    distances: D,
    tables: CostTables,
}

impl<D: DistanceProvider> CostEstimator<D> {
    /// An estimator using the stock rate tables.
    #[must_use]
    pub fn new(distances: D) -> Self {
        Self::with_tables(distances, CostTables::default())
    }

    /// An estimator using custom rate tables.
    #[must_use]
    pub const fn with_tables(distances: D, tables: CostTables) -> Self {
        Self { distances, tables }
    }

    /// Rate tables in use.
    #[must_use]
    pub const fn tables(&self) -> &CostTables {
        &self.tables
    }

    /// Distance provider in use.
    #[must_use]
    pub const fn distances(&self) -> &D {
        &self.distances
    }
}

impl<D: DistanceProvider> CostModel for CostEstimator<D> {
    fn estimate(&self, input: &TripCostInput<'_>) -> CostEstimate {
        let distance = self
            .distances
            .distance_km(input.origin, input.destination);
        CostEstimate {
            breakdown: self.tables.breakdown(input, distance.km),
            distance,
        }
    }
}
