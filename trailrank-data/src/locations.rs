//! Named-location lookup with great-circle distances.
//!
//! Names are matched case-insensitively after trimming whitespace. Two names
//! that resolve to the same key are 0 km apart even when the table does not
//! know them; any other pair involving an unknown name degrades to the
//! table's fallback distance.

use std::collections::HashMap;

use geo::{Coord, Distance, HaversineMeasure, Point};
use trailrank_core::{DistanceEstimate, DistanceProvider};

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Distance assumed when a location is not in the table.
pub const DEFAULT_FALLBACK_KM: f64 = 300.0;

const METRES_PER_KM: f64 = 1_000.0;

/// [`EARTH_RADIUS_KM`] in metres, the unit `geo` measures in.
const EARTH: HaversineMeasure = HaversineMeasure::new(6_371_000.0);

/// Great-circle distance between two coordinates, `x` = longitude and
/// `y` = latitude in degrees, on a sphere of [`EARTH_RADIUS_KM`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use trailrank_data::haversine_km;
///
/// let jakarta = Coord { x: 106.8456, y: -6.2088 };
/// let bandung = Coord { x: 107.6191, y: -6.9175 };
/// let km = haversine_km(jakarta, bandung);
/// assert!((115.0..120.0).contains(&km));
/// ```
#[expect(clippy::float_arithmetic, reason = "metres to kilometres")]
#[must_use]
pub fn haversine_km(from: Coord, to: Coord) -> f64 {
    EARTH.distance(Point::from(from), Point::from(to)) / METRES_PER_KM
}

fn location_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Lookup table from location names to coordinates.
///
/// `Default` yields the stock table of Indonesian cities and trailheads
/// with a 300 km fallback.
///
/// # Examples
/// ```
/// use trailrank_core::DistanceProvider;
/// use trailrank_data::LocationTable;
///
/// let table = LocationTable::default();
/// assert_eq!(table.distance_km("Jakarta", " jakarta ").km, 0.0);
/// assert!(table.distance_km("Jakarta", "Atlantis").is_estimated());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTable {
    coords: HashMap<String, Coord>,
    fallback_km: f64,
}

impl LocationTable {
    /// An empty table with the given fallback distance.
    #[must_use]
    pub fn new(fallback_km: f64) -> Self {
        Self {
            coords: HashMap::new(),
            fallback_km,
        }
    }

    /// Add or replace a location.
    pub fn insert(&mut self, name: &str, latitude: f64, longitude: f64) {
        self.coords.insert(
            location_key(name),
            Coord {
                x: longitude,
                y: latitude,
            },
        );
    }

    /// Builder form of [`LocationTable::insert`].
    #[must_use]
    pub fn with_location(mut self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.insert(name, latitude, longitude);
        self
    }

    /// Coordinates of `name`, if known.
    #[must_use]
    pub fn coord(&self, name: &str) -> Option<Coord> {
        self.coords.get(&location_key(name)).copied()
    }

    /// Report whether `name` is in the table.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.coords.contains_key(&location_key(name))
    }

    /// Distance returned for unknown names.
    #[must_use]
    pub const fn fallback_km(&self) -> f64 {
        self.fallback_km
    }

    /// Number of known locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Report whether the table knows no locations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        [
            ("jakarta", -6.2088, 106.8456),
            ("bandung", -6.9175, 107.6191),
            ("bogor", -6.5971, 106.8060),
            ("yogyakarta", -7.7956, 110.3695),
            ("semarang", -6.9667, 110.4167),
            ("solo", -7.5755, 110.8243),
            ("surabaya", -7.2575, 112.7521),
            ("malang", -7.9666, 112.6326),
            ("denpasar", -8.6705, 115.2126),
            ("mataram", -8.5833, 116.1167),
            ("sembalun", -8.3570, 116.5300),
            ("senaru", -8.3047, 116.4066),
            ("ranu pani", -8.0145, 112.9466),
            ("selo", -7.5131, 110.4527),
            ("dieng", -7.2090, 109.9070),
            ("cibodas", -6.7428, 107.0049),
        ]
        .into_iter()
        .fold(Self::new(DEFAULT_FALLBACK_KM), |table, (name, lat, lon)| {
            table.with_location(name, lat, lon)
        })
    }
}

impl DistanceProvider for LocationTable {
    fn distance_km(&self, from: &str, to: &str) -> DistanceEstimate {
        let from_key = location_key(from);
        let to_key = location_key(to);
        if from_key == to_key {
            return DistanceEstimate::measured(0.0);
        }
        match (self.coords.get(&from_key), self.coords.get(&to_key)) {
            (Some(origin), Some(destination)) => {
                DistanceEstimate::measured(haversine_km(*origin, *destination))
            }
            _ => {
                log::debug!("no coordinates for '{from}' -> '{to}'; using fallback distance");
                DistanceEstimate::fallback(self.fallback_km)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailrank_core::DistanceSource;

    #[fixture]
    fn table() -> LocationTable {
        LocationTable::default()
    }

    #[rstest]
    #[case("jakarta", "jakarta")]
    #[case("Jakarta", "  JAKARTA")]
    #[case("Atlantis", "atlantis")]
    fn identical_keys_are_zero_km(table: LocationTable, #[case] from: &str, #[case] to: &str) {
        let estimate = table.distance_km(from, to);
        assert_eq!(estimate, DistanceEstimate::measured(0.0));
    }

    #[rstest]
    fn distance_is_symmetric(table: LocationTable) {
        let there = table.distance_km("jakarta", "senaru").km;
        let back = table.distance_km("senaru", "jakarta").km;
        assert!((there - back).abs() < 1e-9);
    }

    #[rstest]
    fn known_pair_is_measured(table: LocationTable) {
        let estimate = table.distance_km("Yogyakarta", "Selo");
        assert_eq!(estimate.source, DistanceSource::Measured);
        assert!((30.0..45.0).contains(&estimate.km), "got {}", estimate.km);
    }

    #[rstest]
    #[case("jakarta", "atlantis")]
    #[case("atlantis", "jakarta")]
    fn unknown_name_falls_back(table: LocationTable, #[case] from: &str, #[case] to: &str) {
        let estimate = table.distance_km(from, to);
        assert_eq!(estimate, DistanceEstimate::fallback(DEFAULT_FALLBACK_KM));
    }

    #[rstest]
    fn custom_fallback_is_used() {
        let table = LocationTable::new(120.0).with_location("home", 0.0, 0.0);
        assert_eq!(table.distance_km("home", "away").km, 120.0);
        assert_eq!(table.len(), 1);
    }

    #[rstest]
    fn sphere_radius_matches_the_published_constant() {
        assert_eq!(EARTH.radius(), EARTH_RADIUS_KM * METRES_PER_KM);
    }

    #[rstest]
    fn haversine_matches_quarter_meridian() {
        let equator = Coord { x: 0.0, y: 0.0 };
        let pole = Coord { x: 0.0, y: 90.0 };
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((haversine_km(equator, pole) - expected).abs() < 1e-6);
    }
}
