//! Merge the applicable gear tables into one list.

use std::collections::HashSet;

use crate::request::{GearRequest, GearRequestError};
use crate::rules::{GearRules, GearTier};

/// Recommended gear split by priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearList {
    /// Must bring.
    pub essential: Vec<String>,
    /// Should bring.
    pub recommended: Vec<String>,
    /// Nice to have.
    pub optional: Vec<String>,
}

impl GearList {
    /// Total number of items across tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.essential.len() + self.recommended.len() + self.optional.len()
    }

    /// Report whether every tier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Report whether `item` appears in any tier.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        [&self.essential, &self.recommended, &self.optional]
            .into_iter()
            .flatten()
            .any(|listed| listed == item)
    }
}

/// Gear recommendations from fixed rule tables.
///
/// # Examples
/// ```
/// use trailrank_core::Difficulty;
/// use trailrank_gear::{GearAdvisor, GearRequest, Season, Weather};
///
/// let list = GearAdvisor::default().recommend(&GearRequest {
///     days: 2,
///     technicality: Difficulty::Hard,
///     weather: Weather::Rain,
///     season: Season::Wet,
///     group_size: 2,
///     has_experience: true,
/// })?;
/// assert!(list.essential.iter().any(|item| item == "Rain jacket"));
/// assert!(!list.optional.iter().any(|item| item == "Trekking poles"));
/// # Ok::<(), trailrank_gear::GearRequestError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GearAdvisor {
    rules: GearRules,
}

impl GearAdvisor {
    /// Use custom tables.
    #[must_use]
    pub const fn new(rules: GearRules) -> Self {
        Self { rules }
    }

    /// Tables in use.
    #[must_use]
    pub const fn rules(&self) -> &GearRules {
        &self.rules
    }

    /// Assemble the gear list for `request`.
    ///
    /// Each tier lists an item once, in the order the tables first mention
    /// it. An item listed at a higher tier is dropped from the lower ones.
    ///
    /// # Errors
    /// Returns [`GearRequestError`] when the request is invalid.
    pub fn recommend(&self, request: &GearRequest) -> Result<GearList, GearRequestError> {
        request.validate()?;
        let tiers = self.rules.applicable(request);
        log::debug!(
            "merging {} gear tables for a {}-day {} trip",
            tiers.len(),
            request.days,
            request.technicality
        );
        let mut seen = HashSet::new();
        let essential = merge(&tiers, |tier| tier.essential.as_slice(), &mut seen);
        let recommended = merge(&tiers, |tier| tier.recommended.as_slice(), &mut seen);
        let optional = merge(&tiers, |tier| tier.optional.as_slice(), &mut seen);
        Ok(GearList {
            essential,
            recommended,
            optional,
        })
    }
}

fn merge<F>(tiers: &[&GearTier], pick: F, seen: &mut HashSet<String>) -> Vec<String>
where
    F: Fn(&GearTier) -> &[String],
{
    let mut merged = Vec::new();
    for tier in tiers {
        for item in pick(tier) {
            if seen.insert(item.clone()) {
                merged.push(item.clone());
            }
        }
    }
    merged
}
