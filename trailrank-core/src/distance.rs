//! Great-circle distances between named locations.
//!
//! The `DistanceProvider` trait abstracts how a location name is turned into
//! a distance. Lookups never fail: an unknown name degrades to a fixed
//! fallback distance, and the returned [`DistanceEstimate`] says so, letting
//! callers decide how far to trust figures derived from it.

/// How a distance was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DistanceSource {
    /// Both locations were known and the distance was measured.
    Measured,
    /// At least one location was unknown; the fallback distance was used.
    Fallback,
}

/// A distance in kilometres together with its provenance.
///
/// # Examples
/// ```
/// use trailrank_core::DistanceEstimate;
///
/// let estimate = DistanceEstimate::fallback(300.0);
/// assert!(estimate.is_estimated());
/// assert_eq!(DistanceEstimate::measured(12.5).km, 12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceEstimate {
    /// Distance in kilometres.
    pub km: f64,
    /// Provenance of the distance.
    pub source: DistanceSource,
}

impl DistanceEstimate {
    /// A measured distance.
    #[must_use]
    pub const fn measured(km: f64) -> Self {
        Self {
            km,
            source: DistanceSource::Measured,
        }
    }

    /// A fallback distance for unknown locations.
    #[must_use]
    pub const fn fallback(km: f64) -> Self {
        Self {
            km,
            source: DistanceSource::Fallback,
        }
    }

    /// Report whether the distance is a guess.
    #[must_use]
    pub const fn is_estimated(&self) -> bool {
        matches!(self.source, DistanceSource::Fallback)
    }
}

/// Look up the distance between two named locations.
///
/// Implementations must be thread-safe so concurrent ranking requests can
/// share one provider, must return `0.0` for identical names, and must never
/// return a negative or non-finite distance.
///
/// # Examples
/// ```
/// use trailrank_core::{DistanceEstimate, DistanceProvider};
///
/// struct Flat;
///
/// impl DistanceProvider for Flat {
///     fn distance_km(&self, from: &str, to: &str) -> DistanceEstimate {
///         if from == to {
///             DistanceEstimate::measured(0.0)
///         } else {
///             DistanceEstimate::measured(100.0)
///         }
///     }
/// }
///
/// assert_eq!(Flat.distance_km("a", "b").km, 100.0);
/// ```
pub trait DistanceProvider: Send + Sync {
    /// Return the distance from `from` to `to`.
    fn distance_km(&self, from: &str, to: &str) -> DistanceEstimate;
}

impl<T: DistanceProvider + ?Sized> DistanceProvider for &T {
    fn distance_km(&self, from: &str, to: &str) -> DistanceEstimate {
        (**self).distance_km(from, to)
    }
}
