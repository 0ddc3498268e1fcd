//! Fixed gear tables keyed by trip conditions.

use trailrank_core::Difficulty;

use crate::request::{GearRequest, Season, Weather};

/// Items one rule contributes to each tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GearTier {
    /// Must bring.
    pub essential: Vec<String>,
    /// Should bring.
    pub recommended: Vec<String>,
    /// Nice to have.
    pub optional: Vec<String>,
}

impl GearTier {
    /// Build a tier from string literals.
    #[must_use]
    pub fn of(essential: &[&str], recommended: &[&str], optional: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|item| (*item).to_owned()).collect();
        Self {
            essential: owned(essential),
            recommended: owned(recommended),
            optional: owned(optional),
        }
    }
}

/// Rule tables consulted by [`crate::GearAdvisor`].
///
/// Tiers are merged in field order, so earlier tables decide the listing
/// order of shared items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GearRules {
    /// Every trip.
    pub base: GearTier,
    /// Trips with at least one night out.
    pub overnight: GearTier,
    /// Trips of three days or more.
    pub multi_day: GearTier,
    /// Easy routes.
    pub easy: GearTier,
    /// Moderate routes.
    pub moderate: GearTier,
    /// Hard routes.
    pub hard: GearTier,
    /// Expert routes.
    pub expert: GearTier,
    /// Clear weather.
    pub clear: GearTier,
    /// Rain.
    pub rain: GearTier,
    /// Wind.
    pub wind: GearTier,
    /// Cold.
    pub cold: GearTier,
    /// Dry season.
    pub dry_season: GearTier,
    /// Wet season.
    pub wet_season: GearTier,
    /// Parties of two or more.
    pub group: GearTier,
    /// Parties without similar trips behind them.
    pub novice: GearTier,
}

impl Default for GearRules {
    fn default() -> Self {
        Self {
            base: GearTier::of(
                &[
                    "Daypack",
                    "Water (2 litres)",
                    "Headlamp",
                    "First aid kit",
                    "Trail snacks",
                ],
                &["Sun hat", "Sunscreen"],
                &["Camera", "Trekking poles"],
            ),
            overnight: GearTier::of(
                &[
                    "Backpack (40-60 litres)",
                    "Tent",
                    "Sleeping bag",
                    "Sleeping mat",
                    "Warm layer",
                ],
                &["Stove and fuel", "Cooking pot"],
                &["Camp sandals"],
            ),
            multi_day: GearTier::of(
                &["Water filter or purification tablets"],
                &["Power bank", "Spare headlamp batteries"],
                &["Camp pillow"],
            ),
            easy: GearTier::of(&["Trail shoes"], &[], &[]),
            moderate: GearTier::of(&["Hiking boots"], &["Trekking poles"], &[]),
            hard: GearTier::of(
                &["Hiking boots", "Trekking poles", "Gaiters"],
                &["Buff or dust mask"],
                &[],
            ),
            expert: GearTier::of(
                &["Hiking boots", "Trekking poles", "Gaiters", "Helmet"],
                &["Buff or dust mask", "GPS device"],
                &[],
            ),
            clear: GearTier::of(&[], &["Sunglasses"], &[]),
            rain: GearTier::of(&["Rain jacket", "Pack cover"], &["Dry bags"], &[]),
            wind: GearTier::of(&["Windproof jacket"], &["Buff or dust mask"], &[]),
            cold: GearTier::of(
                &["Insulated jacket", "Gloves", "Beanie"],
                &["Thermal base layer"],
                &[],
            ),
            dry_season: GearTier::of(&[], &["Extra water (1 litre)"], &["Sunglasses"]),
            wet_season: GearTier::of(
                &["Rain jacket"],
                &["Quick-dry clothing", "Leech socks"],
                &[],
            ),
            group: GearTier::of(&[], &["Shared cooking set"], &["Two-way radios"]),
            novice: GearTier::of(&["Emergency whistle"], &["Printed trail map"], &[]),
        }
    }
}

impl GearRules {
    /// Table for a technical grade.
    #[must_use]
    pub const fn technical(&self, difficulty: Difficulty) -> &GearTier {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Moderate => &self.moderate,
            Difficulty::Hard => &self.hard,
            Difficulty::Expert => &self.expert,
        }
    }

    /// Table for the expected weather.
    #[must_use]
    pub const fn weather(&self, weather: Weather) -> &GearTier {
        match weather {
            Weather::Clear => &self.clear,
            Weather::Rain => &self.rain,
            Weather::Wind => &self.wind,
            Weather::Cold => &self.cold,
        }
    }

    /// Table for the season.
    #[must_use]
    pub const fn season(&self, season: Season) -> &GearTier {
        match season {
            Season::Dry => &self.dry_season,
            Season::Wet => &self.wet_season,
        }
    }

    /// Tables that apply to `request`, in merge order.
    pub(crate) fn applicable(&self, request: &GearRequest) -> Vec<&GearTier> {
        let mut tiers = vec![&self.base];
        if request.days >= 2 {
            tiers.push(&self.overnight);
        }
        if request.days >= 3 {
            tiers.push(&self.multi_day);
        }
        tiers.push(self.technical(request.technicality));
        tiers.push(self.weather(request.weather));
        tiers.push(self.season(request.season));
        if request.group_size >= 2 {
            tiers.push(&self.group);
        }
        if !request.has_experience {
            tiers.push(&self.novice);
        }
        tiers
    }
}
