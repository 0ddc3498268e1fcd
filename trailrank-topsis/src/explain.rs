//! Human-readable reasons for a route's placement.
//!
//! Explanations are a rule list over route attributes and preferences,
//! independent of the TOPSIS arithmetic. Rules fire in a fixed order and the
//! output is truncated to [`ExplainConfig::max_explanations`].

use trailrank_core::{Difficulty, Interest, UserPreferences};

/// Thresholds and limits for the explanation rules.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ExplainConfig {
    /// Upper bound on explanations per route.
    pub max_explanations: usize,
    /// Fitness points per difficulty step.
    pub fitness_per_difficulty: f64,
    /// Largest fitness gap still called a match.
    pub fitness_tolerance: f64,
    /// Lowest scenic value that earns a callout.
    pub scenic_threshold: f64,
    /// Highest crowding value that earns a solitude callout.
    pub solitude_threshold: f64,
    /// Largest gap between trail days and preferred days still called a fit.
    pub days_tolerance: u32,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            max_explanations: 4,
            fitness_per_difficulty: 2.5,
            fitness_tolerance: 2.0,
            scenic_threshold: 4.0,
            solitude_threshold: 2.0,
            days_tolerance: 1,
        }
    }
}

/// Route attributes the rules read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteFacts {
    /// Route difficulty.
    pub difficulty: Difficulty,
    /// Raw value of the scenery criterion, if the catalog has one.
    pub scenery: Option<f64>,
    /// Raw value of the crowding criterion, if the catalog has one.
    pub crowding: Option<f64>,
    /// Days on the trail.
    pub trip_days: u32,
    /// Estimated total trip cost.
    pub total_cost: u64,
}

/// Apply the explanation rules in order.
///
/// # Examples
/// ```
/// use trailrank_core::{Difficulty, ExperienceLevel, UserPreferences};
/// use trailrank_topsis::{explain, ExplainConfig, RouteFacts};
///
/// let facts = RouteFacts {
///     difficulty: Difficulty::Moderate,
///     scenery: Some(5.0),
///     crowding: Some(3.0),
///     trip_days: 2,
///     total_cost: 1_500_000,
/// };
/// let preferences = UserPreferences::new(ExperienceLevel::Intermediate, "Jakarta");
/// let reasons = explain(&facts, &preferences, &ExplainConfig::default());
/// assert_eq!(reasons[0], "Moderate difficulty matches your intermediate experience");
/// ```
#[must_use]
pub fn explain(
    facts: &RouteFacts,
    preferences: &UserPreferences,
    config: &ExplainConfig,
) -> Vec<String> {
    [
        Some(experience(facts, preferences)),
        fitness(facts, preferences, config),
        scenic(facts, preferences, config),
        challenge(facts, preferences),
        solitude(facts, preferences, config),
        time_fit(facts, preferences, config),
        budget_fit(facts, preferences),
    ]
    .into_iter()
    .flatten()
    .take(config.max_explanations)
    .collect()
}

fn experience(facts: &RouteFacts, preferences: &UserPreferences) -> String {
    let level = preferences.experience_level;
    let gap = i16::from(facts.difficulty.ordinal()) - i16::from(level.ordinal());
    if gap.abs() <= 1 {
        format!(
            "{} difficulty matches your {level} experience",
            facts.difficulty.label()
        )
    } else if gap > 1 {
        format!(
            "A real challenge: {} is well above your {level} experience",
            facts.difficulty.label()
        )
    } else {
        format!(
            "Comfortable: {} is well within your {level} experience",
            facts.difficulty.label()
        )
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "fitness is compared on a scaled difficulty axis"
)]
fn fitness(
    facts: &RouteFacts,
    preferences: &UserPreferences,
    config: &ExplainConfig,
) -> Option<String> {
    let demand = f64::from(facts.difficulty.ordinal()) * config.fitness_per_difficulty;
    ((demand - f64::from(preferences.fitness_level)).abs() <= config.fitness_tolerance).then(|| {
        format!(
            "Suits your fitness level ({}/10)",
            preferences.fitness_level
        )
    })
}

fn scenic(
    facts: &RouteFacts,
    preferences: &UserPreferences,
    config: &ExplainConfig,
) -> Option<String> {
    let value = facts.scenery?;
    (preferences.has_interest(Interest::ScenicViews) && value >= config.scenic_threshold)
        .then(|| format!("Outstanding scenic views ({value}/5)"))
}

fn challenge(facts: &RouteFacts, preferences: &UserPreferences) -> Option<String> {
    (preferences.has_interest(Interest::PhysicalChallenge) && facts.difficulty >= Difficulty::Hard)
        .then(|| "Demanding terrain for the physical challenge you want".to_owned())
}

fn solitude(
    facts: &RouteFacts,
    preferences: &UserPreferences,
    config: &ExplainConfig,
) -> Option<String> {
    let value = facts.crowding?;
    (preferences.has_interest(Interest::Solitude) && value <= config.solitude_threshold)
        .then(|| "Quiet trail with few other hikers".to_owned())
}

fn time_fit(
    facts: &RouteFacts,
    preferences: &UserPreferences,
    config: &ExplainConfig,
) -> Option<String> {
    let preferred = preferences.time_commitment.preferred_days();
    (facts.trip_days.abs_diff(preferred) <= config.days_tolerance).then(|| {
        let unit = if facts.trip_days == 1 { "day" } else { "days" };
        format!(
            "Fits your {} time commitment ({} {unit} on the trail)",
            preferences.time_commitment, facts.trip_days
        )
    })
}

fn budget_fit(facts: &RouteFacts, preferences: &UserPreferences) -> Option<String> {
    preferences
        .budget_range
        .fits(facts.total_cost)
        .then(|| {
            format!(
                "Estimated cost of Rp {} fits your {} budget",
                group_thousands(facts.total_cost),
                preferences.budget_range
            )
        })
}

fn group_thousands(amount: u64) -> String {
    let digits: Vec<char> = amount.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use trailrank_core::{BudgetRange, ExperienceLevel, TimeCommitment};

    #[fixture]
    fn facts() -> RouteFacts {
        RouteFacts {
            difficulty: Difficulty::Hard,
            scenery: Some(5.0),
            crowding: Some(2.0),
            trip_days: 3,
            total_cost: 1_800_000,
        }
    }

    fn everything() -> UserPreferences {
        UserPreferences::new(ExperienceLevel::Advanced, "Malang")
            .with_fitness(8)
            .with_time(TimeCommitment::FewDays)
            .with_budget(BudgetRange::From1mTo2m)
            .with_interest(Interest::ScenicViews)
            .with_interest(Interest::PhysicalChallenge)
            .with_interest(Interest::Solitude)
    }

    #[rstest]
    #[case(ExperienceLevel::Advanced, "Hard difficulty matches your advanced experience")]
    #[case(
        ExperienceLevel::Beginner,
        "A real challenge: Hard is well above your beginner experience"
    )]
    fn experience_framing(
        facts: RouteFacts,
        #[case] level: ExperienceLevel,
        #[case] expected: &str,
    ) {
        let preferences = UserPreferences::new(level, "Malang");
        assert_eq!(experience(&facts, &preferences), expected);
    }

    #[rstest]
    fn easy_route_is_comfortable_for_experts() {
        let facts = RouteFacts {
            difficulty: Difficulty::Easy,
            ..facts()
        };
        let preferences = UserPreferences::new(ExperienceLevel::Expert, "Malang");
        assert!(experience(&facts, &preferences).starts_with("Comfortable"));
    }

    #[rstest]
    fn output_is_truncated_in_rule_order(facts: RouteFacts) {
        let reasons = explain(&facts, &everything(), &ExplainConfig::default());
        assert_eq!(
            reasons,
            vec![
                "Hard difficulty matches your advanced experience".to_owned(),
                "Suits your fitness level (8/10)".to_owned(),
                "Outstanding scenic views (5/5)".to_owned(),
                "Demanding terrain for the physical challenge you want".to_owned(),
            ]
        );
    }

    #[rstest]
    fn later_rules_fire_when_earlier_ones_do_not(facts: RouteFacts) {
        let preferences = UserPreferences::new(ExperienceLevel::Advanced, "Malang")
            .with_fitness(1)
            .with_time(TimeCommitment::FewDays)
            .with_interest(Interest::Solitude);
        let reasons = explain(&facts, &preferences, &ExplainConfig::default());
        assert_eq!(
            reasons,
            vec![
                "Hard difficulty matches your advanced experience".to_owned(),
                "Quiet trail with few other hikers".to_owned(),
                "Fits your few_days time commitment (3 days on the trail)".to_owned(),
                "Estimated cost of Rp 1.800.000 fits your 1m_2m budget".to_owned(),
            ]
        );
    }

    #[rstest]
    fn budget_rule_respects_bucket_bound(facts: RouteFacts) {
        let tight = UserPreferences::new(ExperienceLevel::Advanced, "Malang")
            .with_budget(BudgetRange::From500kTo1m);
        assert_eq!(budget_fit(&facts, &tight), None);
        let open = tight.with_budget(BudgetRange::Over5m);
        assert!(budget_fit(&facts, &open).is_some());
    }

    #[rstest]
    fn missing_scenery_column_skips_the_callout(facts: RouteFacts) {
        let facts = RouteFacts {
            scenery: None,
            ..facts
        };
        assert_eq!(scenic(&facts, &everything(), &ExplainConfig::default()), None);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1.000")]
    #[case(2_783_000, "2.783.000")]
    fn thousands_are_grouped(#[case] amount: u64, #[case] expected: &str) {
        assert_eq!(group_thousands(amount), expected);
    }
}
