//! Hiking routes in the static catalog.

use thiserror::Error;

/// Identifier of a catalog route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct RouteId(pub u32);

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordinal route difficulty, `Easy < Moderate < Hard < Expert`.
///
/// # Examples
/// ```
/// use trailrank_core::Difficulty;
///
/// assert!(Difficulty::Hard > Difficulty::Moderate);
/// assert_eq!(Difficulty::Expert.ordinal(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Difficulty {
    /// Well-marked trail, little elevation.
    Easy,
    /// Sustained climbing on good paths.
    Moderate,
    /// Long, steep or exposed sections.
    Hard,
    /// Scrambling, loose volcanic scree or multi-day summit pushes.
    Expert,
}

impl Difficulty {
    /// Position on the 1–4 scale.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Moderate => 2,
            Self::Hard => 3,
            Self::Expert => 4,
        }
    }

    /// Return the difficulty as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Capitalised label for explanations.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(format!("unknown difficulty '{s}'")),
        }
    }
}

/// Mountain a route climbs.
///
/// `location` names the trailhead in the distance lookup table; `region`
/// selects the permit tariff.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mountain {
    /// Display name.
    pub name: String,
    /// Named trailhead location.
    pub location: String,
    /// Permit region key.
    pub region: String,
}

/// A hiking option in the static catalog.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Unique identifier.
    pub id: RouteId,
    /// Display name.
    pub name: String,
    /// Ordinal difficulty.
    pub difficulty: Difficulty,
    /// Trail length.
    pub distance_km: f64,
    /// Expected time on the trail.
    pub duration_hours: f64,
    /// Mountain climbed.
    pub mountain: Mountain,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// Errors returned by [`Route::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The route name was blank.
    #[error("route {id} must have a name")]
    MissingName {
        /// Offending route.
        id: RouteId,
    },
    /// Distance or duration was negative or not finite.
    #[error("route {id} has invalid {field}: {value}")]
    InvalidMeasurement {
        /// Offending route.
        id: RouteId,
        /// Name of the measurement.
        field: &'static str,
        /// Supplied value.
        value: f64,
    },
    /// The mountain location was blank.
    #[error("route {id} must reference a mountain location")]
    MissingLocation {
        /// Offending route.
        id: RouteId,
    },
}

impl Route {
    /// Check names and measurements.
    ///
    /// # Errors
    /// Returns [`RouteError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.name.trim().is_empty() {
            return Err(RouteError::MissingName { id: self.id });
        }
        for (field, value) in [
            ("distance_km", self.distance_km),
            ("duration_hours", self.duration_hours),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::InvalidMeasurement {
                    id: self.id,
                    field,
                    value,
                });
            }
        }
        if self.mountain.location.trim().is_empty() {
            return Err(RouteError::MissingLocation { id: self.id });
        }
        Ok(())
    }

    /// Whole days needed on the trail, `ceil(duration_hours / 24)`.
    ///
    /// # Examples
    /// ```
    /// use trailrank_core::{Difficulty, Mountain, Route, RouteId};
    ///
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
    /// assert_eq!(route.trip_days(), 2);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "day counts are small, non-negative and rounded up before the cast"
    )]
    #[must_use]
    pub fn trip_days(&self) -> u32 {
        let days = (self.duration_hours / 24.0).ceil();
        if days.is_finite() && days > 0.0 {
            days as u32
        } else {
            0
        }
    }
}
