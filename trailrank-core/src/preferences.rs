//! Per-request hiker preferences.
//!
//! Preferences are ephemeral: built for one ranking request and discarded
//! afterwards. Bucketed answers are enums so the weighting and explanation
//! rules can match on them exhaustively.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::BudgetLevel;

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $tag))]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the wire tag.
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

tag_enum! {
    /// Self-reported hiking experience.
    ExperienceLevel ("experience level") {
        /// First multi-hour hikes.
        Beginner => "beginner",
        /// Several day hikes or an overnight trip.
        Intermediate => "intermediate",
        /// Regular multi-day trips.
        Advanced => "advanced",
        /// Technical summits and expeditions.
        Expert => "expert",
    }
}

tag_enum! {
    /// Trip budget bucket in rupiah.
    BudgetRange ("budget range") {
        /// Up to 500 000.
        Under500k => "under_500k",
        /// 500 000 to 1 000 000.
        From500kTo1m => "500k_1m",
        /// 1 000 000 to 2 000 000.
        From1mTo2m => "1m_2m",
        /// 2 000 000 to 5 000 000.
        From2mTo5m => "2m_5m",
        /// Above 5 000 000.
        Over5m => "over_5m",
    }
}

tag_enum! {
    /// How long the hiker can be away.
    TimeCommitment ("time commitment") {
        /// A single day.
        DayTrip => "day_trip",
        /// Two days.
        Weekend => "weekend",
        /// Three or four days.
        FewDays => "few_days",
        /// Five days or more.
        WeekOrMore => "week_or_more",
    }
}

tag_enum! {
    /// What the hiker hopes to get out of the trip.
    Interest ("interest") {
        /// Panoramas, sunrises and crater lakes.
        ScenicViews => "scenic_views",
        /// Testing endurance on demanding terrain.
        PhysicalChallenge => "physical_challenge",
        /// Quiet trails away from crowds.
        Solitude => "solitude",
        /// Temples, local traditions and history.
        Culture => "culture",
        /// Photography opportunities.
        Photography => "photography",
        /// Flora and fauna.
        Wildlife => "wildlife",
    }
}

tag_enum! {
    /// Worries the hiker wants addressed.
    Concern ("concern") {
        /// Does not own suitable gear and needs to rent it.
        Equipment => "equipment",
        /// Worried about safety on exposed terrain.
        Safety => "safety",
        /// Worried about altitude.
        Altitude => "altitude",
        /// Worried about rain and storms.
        Weather => "weather",
        /// Worried about overall cost.
        Cost => "cost",
    }
}

impl ExperienceLevel {
    /// Position on the 1–4 scale, comparable with
    /// [`Difficulty::ordinal`](crate::Difficulty::ordinal).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Expert => 4,
        }
    }
}

impl BudgetRange {
    /// Inclusive upper bound in rupiah, or `None` when unbounded.
    #[must_use]
    pub const fn upper_bound(self) -> Option<u64> {
        match self {
            Self::Under500k => Some(500_000),
            Self::From500kTo1m => Some(1_000_000),
            Self::From1mTo2m => Some(2_000_000),
            Self::From2mTo5m => Some(5_000_000),
            Self::Over5m => None,
        }
    }

    /// The two lowest buckets count as a tight budget.
    #[must_use]
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Under500k | Self::From500kTo1m)
    }

    /// Spending tier used by the cost estimator.
    #[must_use]
    pub const fn budget_level(self) -> BudgetLevel {
        match self {
            Self::Under500k | Self::From500kTo1m => BudgetLevel::Budget,
            Self::From1mTo2m | Self::From2mTo5m => BudgetLevel::Standard,
            Self::Over5m => BudgetLevel::Premium,
        }
    }

    /// Report whether `total` rupiah fits the bucket.
    #[must_use]
    pub fn fits(self, total: u64) -> bool {
        self.upper_bound().is_none_or(|bound| total <= bound)
    }
}

impl TimeCommitment {
    /// Preferred number of trail days.
    #[must_use]
    pub const fn preferred_days(self) -> u32 {
        match self {
            Self::DayTrip => 1,
            Self::Weekend => 2,
            Self::FewDays => 3,
            Self::WeekOrMore => 5,
        }
    }
}

/// Lowest accepted fitness score.
pub const MIN_FITNESS: u8 = 1;
/// Highest accepted fitness score.
pub const MAX_FITNESS: u8 = 10;

/// A hiker's answers for one ranking request.
///
/// # Examples
/// ```
/// use trailrank_core::{BudgetRange, ExperienceLevel, Interest, UserPreferences};
///
/// let preferences = UserPreferences::new(ExperienceLevel::Intermediate, "Jakarta")
///     .with_group_size(2)
///     .with_budget(BudgetRange::From1mTo2m)
///     .with_interest(Interest::ScenicViews);
/// assert!(preferences.validate().is_ok());
/// assert!(preferences.has_interest(Interest::ScenicViews));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPreferences {
    /// Hiking experience.
    pub experience_level: ExperienceLevel,
    /// Self-assessed fitness, `1..=10`.
    pub fitness_level: u8,
    /// Budget bucket.
    pub budget_range: BudgetRange,
    /// Time bucket.
    pub time_commitment: TimeCommitment,
    /// Named home location.
    pub location: String,
    /// Hikers in the party.
    pub group_size: u32,
    /// Interest tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub interests: BTreeSet<Interest>,
    /// Concern tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub concerns: BTreeSet<Concern>,
}

/// Errors returned by [`UserPreferences::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferencesError {
    /// Fitness was outside `1..=10`.
    #[error("fitness level {found} must be within {MIN_FITNESS}..={MAX_FITNESS}")]
    FitnessOutOfRange {
        /// Supplied fitness.
        found: u8,
    },
    /// The party had no hikers.
    #[error("group size must be at least 1")]
    EmptyGroup,
    /// The home location was blank.
    #[error("location must not be blank")]
    MissingLocation,
}

impl UserPreferences {
    /// Preferences with mid-range defaults: fitness 5, a `1m_2m` budget, a
    /// weekend trip, a solo hiker, and no interests or concerns.
    #[must_use]
    pub fn new(experience_level: ExperienceLevel, location: impl Into<String>) -> Self {
        Self {
            experience_level,
            fitness_level: 5,
            budget_range: BudgetRange::From1mTo2m,
            time_commitment: TimeCommitment::Weekend,
            location: location.into(),
            group_size: 1,
            interests: BTreeSet::new(),
            concerns: BTreeSet::new(),
        }
    }

    /// Set the fitness level.
    #[must_use]
    pub const fn with_fitness(mut self, fitness_level: u8) -> Self {
        self.fitness_level = fitness_level;
        self
    }

    /// Set the budget bucket.
    #[must_use]
    pub const fn with_budget(mut self, budget_range: BudgetRange) -> Self {
        self.budget_range = budget_range;
        self
    }

    /// Set the time bucket.
    #[must_use]
    pub const fn with_time(mut self, time_commitment: TimeCommitment) -> Self {
        self.time_commitment = time_commitment;
        self
    }

    /// Set the party size.
    #[must_use]
    pub const fn with_group_size(mut self, group_size: u32) -> Self {
        self.group_size = group_size;
        self
    }

    /// Add an interest tag.
    #[must_use]
    pub fn with_interest(mut self, interest: Interest) -> Self {
        self.interests.insert(interest);
        self
    }

    /// Add a concern tag.
    #[must_use]
    pub fn with_concern(mut self, concern: Concern) -> Self {
        self.concerns.insert(concern);
        self
    }

    /// Report whether `interest` was selected.
    #[must_use]
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Report whether `concern` was raised.
    #[must_use]
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }

    /// Beginners are assumed to hire a guide.
    #[must_use]
    pub fn needs_guide(&self) -> bool {
        self.experience_level == ExperienceLevel::Beginner
    }

    /// An equipment concern means gear must be rented.
    #[must_use]
    pub fn needs_equipment(&self) -> bool {
        self.has_concern(Concern::Equipment)
    }

    /// Check ranges before ranking.
    ///
    /// # Errors
    /// Returns [`PreferencesError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if !(MIN_FITNESS..=MAX_FITNESS).contains(&self.fitness_level) {
            return Err(PreferencesError::FitnessOutOfRange {
                found: self.fitness_level,
            });
        }
        if self.group_size == 0 {
            return Err(PreferencesError::EmptyGroup);
        }
        if self.location.trim().is_empty() {
            return Err(PreferencesError::MissingLocation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(BudgetRange::Under500k, true)]
    #[case(BudgetRange::From500kTo1m, true)]
    #[case(BudgetRange::From1mTo2m, false)]
    #[case(BudgetRange::From2mTo5m, false)]
    #[case(BudgetRange::Over5m, false)]
    fn only_two_lowest_buckets_are_low(#[case] range: BudgetRange, #[case] low: bool) {
        assert_eq!(range.is_low(), low);
    }

    #[rstest]
    fn unbounded_bucket_fits_anything() {
        assert!(BudgetRange::Over5m.fits(u64::MAX));
        assert!(BudgetRange::From1mTo2m.fits(2_000_000));
        assert!(!BudgetRange::From1mTo2m.fits(2_000_001));
    }

    #[rstest]
    #[case("1m_2m", BudgetRange::From1mTo2m)]
    #[case(" OVER_5M ", BudgetRange::Over5m)]
    fn budget_parses_wire_tags(#[case] tag: &str, #[case] expected: BudgetRange) {
        assert_eq!(BudgetRange::from_str(tag), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown_interest() {
        let err = Interest::from_str("karaoke").unwrap_err();
        assert!(err.contains("unknown interest"));
    }

    #[rstest]
    fn tags_round_trip_through_display() {
        for interest in Interest::ALL {
            assert_eq!(Interest::from_str(&interest.to_string()), Ok(*interest));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    fn rejects_fitness_out_of_range(#[case] fitness: u8) {
        let preferences = UserPreferences::new(ExperienceLevel::Advanced, "Bandung")
            .with_fitness(fitness);
        assert_eq!(
            preferences.validate(),
            Err(PreferencesError::FitnessOutOfRange { found: fitness })
        );
    }

    #[rstest]
    fn rejects_empty_group() {
        let preferences =
            UserPreferences::new(ExperienceLevel::Advanced, "Bandung").with_group_size(0);
        assert_eq!(preferences.validate(), Err(PreferencesError::EmptyGroup));
    }

    #[rstest]
    fn rejects_blank_location() {
        let preferences = UserPreferences::new(ExperienceLevel::Advanced, "   ");
        assert_eq!(preferences.validate(), Err(PreferencesError::MissingLocation));
    }

    #[rstest]
    fn beginners_need_a_guide() {
        assert!(UserPreferences::new(ExperienceLevel::Beginner, "Bogor").needs_guide());
        assert!(!UserPreferences::new(ExperienceLevel::Intermediate, "Bogor").needs_guide());
    }

    #[rstest]
    fn equipment_concern_requests_rental() {
        let preferences = UserPreferences::new(ExperienceLevel::Advanced, "Bogor")
            .with_concern(Concern::Equipment);
        assert!(preferences.needs_equipment());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_wire_document() {
        let json = r#"{
            "experience_level": "intermediate",
            "fitness_level": 6,
            "budget_range": "1m_2m",
            "time_commitment": "weekend",
            "location": "Jakarta",
            "group_size": 2,
            "interests": ["scenic_views", "solitude"]
        }"#;
        let preferences: UserPreferences = serde_json::from_str(json).expect("decode");
        assert_eq!(preferences.budget_range, BudgetRange::From1mTo2m);
        assert!(preferences.has_interest(Interest::Solitude));
        assert!(preferences.concerns.is_empty());
    }
}
