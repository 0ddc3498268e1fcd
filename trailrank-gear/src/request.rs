//! What the advisor needs to know about a trip.

use thiserror::Error;
use trailrank_core::{Difficulty, ExperienceLevel, RankedRoute, UserPreferences};

macro_rules! condition_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(rename_all = "snake_case")
        )]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Lower-case name.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == wanted)
                    .ok_or_else(|| format!("unknown {} '{s}'", $kind))
            }
        }
    };
}

condition_enum! {
    /// Expected weather on the trail.
    Weather ("weather") {
        /// Dry and sunny.
        Clear => "clear",
        /// Showers or storms.
        Rain => "rain",
        /// Strong wind on exposed ridges.
        Wind => "wind",
        /// Near-freezing summit temperatures.
        Cold => "cold",
    }
}

condition_enum! {
    /// Tropical season.
    Season ("season") {
        /// Roughly April to October.
        Dry => "dry",
        /// Roughly November to March.
        Wet => "wet",
    }
}

/// Trip parameters for a gear recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearRequest {
    /// Days on the trail.
    pub days: u32,
    /// Technical grade of the route.
    pub technicality: Difficulty,
    /// Expected weather.
    pub weather: Weather,
    /// Season of the trip.
    pub season: Season,
    /// Hikers in the party.
    pub group_size: u32,
    /// Whether the party has done similar trips before.
    pub has_experience: bool,
}

/// Errors returned by [`GearRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GearRequestError {
    /// The trip had no days.
    #[error("a trip lasts at least one day")]
    NoDays,
    /// The party had no hikers.
    #[error("group size must be at least 1")]
    EmptyGroup,
}

impl GearRequest {
    /// Derive a request from a ranked route and the hiker who asked for it.
    ///
    /// Days and technicality come from the route; anyone above beginner
    /// counts as experienced.
    #[must_use]
    pub fn for_ranked_route(
        ranked: &RankedRoute,
        preferences: &UserPreferences,
        weather: Weather,
        season: Season,
    ) -> Self {
        Self {
            days: ranked.trip_days.max(1),
            technicality: ranked.route.difficulty,
            weather,
            season,
            group_size: preferences.group_size,
            has_experience: preferences.experience_level != ExperienceLevel::Beginner,
        }
    }

    /// Check the request describes a real trip.
    ///
    /// # Errors
    /// Returns [`GearRequestError`] for a zero-day trip or an empty party.
    pub const fn validate(&self) -> Result<(), GearRequestError> {
        if self.days == 0 {
            return Err(GearRequestError::NoDays);
        }
        if self.group_size == 0 {
            return Err(GearRequestError::EmptyGroup);
        }
        Ok(())
    }
}
