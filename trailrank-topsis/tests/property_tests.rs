//! Property-based tests for the TOPSIS engine.
//!
//! # Invariants tested
//!
//! - **Score validity:** scores are finite and within `0.0..=1.0`.
//! - **Determinism:** ranking the same request twice gives equal results.
//! - **Ties:** identical routes score identically and keep catalog order.
//! - **Dominance:** a route best on every criterion scores exactly one.
//! - **Monotonicity:** raising a route's benefit value never lets an
//!   unaffected route that trailed it overtake it.

use proptest::prelude::*;
use trailrank_core::test_support::{
    CatalogBuilder, FixedDistance, FlatCostModel, criterion, route,
};
use trailrank_core::{
    Catalog, CriterionKind, Difficulty, ExperienceLevel, Factor, FactorWeights, Ranker, Ranking,
    RouteId, UserPreferences,
};
use trailrank_topsis::{CriteriaAugmenter, TopsisEngine};

type Row = [f64; 3];

fn engine() -> TopsisEngine<FixedDistance, FlatCostModel> {
    TopsisEngine::new(CriteriaAugmenter::new(
        FixedDistance::measured(150.0),
        FlatCostModel { per_day: 100_000 },
    ))
}

fn preferences() -> UserPreferences {
    UserPreferences::new(ExperienceLevel::Intermediate, "home")
}

/// Three criteria: a cost-type difficulty, a benefit-type scenery and a
/// cost-type crowding column. Every route shares location and duration so
/// the computed columns stay constant.
fn catalog_of(rows: &[Row]) -> Catalog {
    let builder = CatalogBuilder::new(FactorWeights::new(0.35, 0.30, 0.35))
        .criterion(criterion(
            1,
            Factor::PhysicalDemand,
            "Technical Difficulty",
            false,
            1.0,
            CriterionKind::General,
        ))
        .criterion(criterion(
            2,
            Factor::ExperienceQuality,
            "Scenic Value",
            true,
            0.6,
            CriterionKind::Scenery,
        ))
        .criterion(criterion(
            3,
            Factor::ExperienceQuality,
            "Crowding Level",
            false,
            0.4,
            CriterionKind::Crowding,
        ));
    rows.iter()
        .zip(1_u32..)
        .fold(builder, |builder, (values, id)| {
            builder.route(
                route(id, &format!("Route {id}"), Difficulty::Moderate, 8.0, "peak"),
                values,
            )
        })
        .build()
        .expect("generated catalog is complete")
}

const SCORE_TOLERANCE: f64 = 1e-9;

/// Report whether `score` does not exceed `bound` beyond rounding noise.
#[expect(clippy::float_arithmetic, reason = "tolerance is added to a score")]
fn at_most(score: f64, bound: f64) -> bool {
    score <= bound + SCORE_TOLERANCE
}

#[expect(clippy::float_arithmetic, reason = "scenery is raised by a step")]
fn raise_scenery(row: &mut Row, step: u8) {
    let [difficulty, scenery, crowding] = *row;
    *row = [difficulty, scenery + f64::from(step), crowding];
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        (1_u8..=10, 1_u8..=10, 1_u8..=10)
            .prop_map(|(a, b, c)| [f64::from(a), f64::from(b), f64::from(c)]),
        1..12,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every score is a finite closeness in `0.0..=1.0`.
    #[test]
    fn scores_are_bounded(rows in rows_strategy()) {
        let catalog = catalog_of(&rows);
        let ranking = engine().rank(&catalog, &preferences()).expect("valid request");
        prop_assert_eq!(ranking.routes.len(), rows.len());
        for (position, ranked) in ranking.routes.iter().enumerate() {
            prop_assert!(ranked.score.is_finite());
            prop_assert!((0.0..=1.0).contains(&ranked.score), "score {}", ranked.score);
            prop_assert_eq!(ranked.rank, position + 1);
        }
    }

    /// Property: the engine is a pure function of its inputs.
    #[test]
    fn ranking_is_idempotent(rows in rows_strategy()) {
        let catalog = catalog_of(&rows);
        let engine = engine();
        let first = engine.rank(&catalog, &preferences()).expect("valid request");
        let second = engine.rank(&catalog, &preferences()).expect("valid request");
        prop_assert_eq!(first, second);
    }

    /// Property: a duplicated route scores exactly like its original and
    /// is listed after it.
    #[test]
    fn identical_routes_tie_in_catalog_order(
        rows in rows_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let duplicate = *pick.get(&rows);
        let mut extended = rows.clone();
        extended.push(duplicate);
        let original_id = u32::try_from(pick.index(rows.len()) + 1).expect("small catalog");
        let duplicate_id = u32::try_from(extended.len()).expect("small catalog");

        let ranking = engine()
            .rank(&catalog_of(&extended), &preferences())
            .expect("valid request");
        let original = ranking
            .find(RouteId(original_id))
            .expect("original ranked");
        let copy = ranking
            .find(RouteId(duplicate_id))
            .expect("duplicate ranked");
        prop_assert_eq!(original.score.to_bits(), copy.score.to_bits());
        prop_assert!(original.rank < copy.rank);
    }

    /// Property: a route at the ideal on every column scores one and ranks
    /// first.
    #[test]
    fn dominant_route_scores_one(rows in rows_strategy()) {
        let mut extended = rows.clone();
        extended.push([0.0, 11.0, 0.0]);
        let dominant_id = u32::try_from(extended.len()).expect("small catalog");

        let ranking = engine()
            .rank(&catalog_of(&extended), &preferences())
            .expect("valid request");
        let top = ranking.top().expect("non-empty ranking");
        prop_assert_eq!(top.route.id, RouteId(dominant_id));
        prop_assert_eq!(top.score, 1.0);
    }

    /// Property: raising one route's scenic value keeps every unaffected
    /// route that scored no higher than it at or below its new score.
    #[test]
    fn improving_a_benefit_never_loses_ground(
        rows in rows_strategy(),
        pick in any::<prop::sample::Index>(),
        raise in 1_u8..=5,
    ) {
        let improved = pick.index(rows.len());
        let mut raised = rows.clone();
        if let Some(row) = raised.get_mut(improved) {
            raise_scenery(row, raise);
        }
        let improved_id = RouteId(u32::try_from(improved + 1).expect("small catalog"));

        let engine = engine();
        let before = engine.rank(&catalog_of(&rows), &preferences()).expect("valid request");
        let after = engine.rank(&catalog_of(&raised), &preferences()).expect("valid request");
        let score_of = |ranking: &Ranking, id: RouteId| {
            ranking.find(id).map(|ranked| ranked.score).expect("route ranked")
        };
        let improved_before = score_of(&before, improved_id);
        let improved_after = score_of(&after, improved_id);

        for other in before.routes.iter().filter(|ranked| ranked.route.id != improved_id) {
            if at_most(other.score, improved_before) {
                let other_after = score_of(&after, other.route.id);
                prop_assert!(
                    at_most(other_after, improved_after),
                    "route {} overtook route {}: {} > {}",
                    other.route.id,
                    improved_id,
                    other_after,
                    improved_after,
                );
            }
        }
    }
}
