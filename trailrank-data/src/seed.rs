//! Stock catalog of volcano routes on Lombok and Java.

use trailrank_core::{
    Catalog, CatalogError, Criterion, CriterionId, CriterionKind, CriterionValue, Difficulty,
    Factor, FactorWeights, Mountain, Route, RouteId,
};

/// Baseline factor weights of the stock catalog.
pub const SEED_FACTOR_WEIGHTS: FactorWeights = FactorWeights::new(0.35, 0.30, 0.35);

struct CriterionSeed {
    id: u32,
    factor: Factor,
    name: &'static str,
    unit: &'static str,
    is_benefit: bool,
    weight_in_factor: f64,
    kind: CriterionKind,
}

const CRITERIA: [CriterionSeed; 6] = [
    CriterionSeed {
        id: 1,
        factor: Factor::PhysicalDemand,
        name: "Technical Difficulty",
        unit: "1-5",
        is_benefit: false,
        weight_in_factor: 0.4,
        kind: CriterionKind::General,
    },
    CriterionSeed {
        id: 2,
        factor: Factor::PhysicalDemand,
        name: "Elevation Gain",
        unit: "m",
        is_benefit: false,
        weight_in_factor: 0.35,
        kind: CriterionKind::General,
    },
    CriterionSeed {
        id: 3,
        factor: Factor::PhysicalDemand,
        name: "Trail Duration",
        unit: "h",
        is_benefit: false,
        weight_in_factor: 0.25,
        kind: CriterionKind::General,
    },
    CriterionSeed {
        id: 4,
        factor: Factor::ExperienceQuality,
        name: "Scenic Value",
        unit: "1-5",
        is_benefit: true,
        weight_in_factor: 0.5,
        kind: CriterionKind::Scenery,
    },
    CriterionSeed {
        id: 5,
        factor: Factor::ExperienceQuality,
        name: "Crowding Level",
        unit: "1-5",
        is_benefit: false,
        weight_in_factor: 0.2,
        kind: CriterionKind::Crowding,
    },
    CriterionSeed {
        id: 6,
        factor: Factor::ExperienceQuality,
        name: "Cultural Significance",
        unit: "1-5",
        is_benefit: true,
        weight_in_factor: 0.3,
        kind: CriterionKind::General,
    },
];

struct RouteSeed {
    id: u32,
    name: &'static str,
    difficulty: Difficulty,
    distance_km: f64,
    duration_hours: f64,
    mountain: &'static str,
    trailhead: &'static str,
    region: &'static str,
    description: &'static str,
    // Raw values in `CRITERIA` order.
    values: [f64; 6],
}

const ROUTES: [RouteSeed; 6] = [
    RouteSeed {
        id: 1,
        name: "Rinjani Summit via Sembalun",
        difficulty: Difficulty::Hard,
        distance_km: 33.0,
        duration_hours: 50.0,
        mountain: "Mount Rinjani",
        trailhead: "sembalun",
        region: "lombok",
        description: "Savanna approach to the crater rim, then a pre-dawn scree climb to 3 726 m.",
        values: [4.0, 2600.0, 50.0, 5.0, 3.0, 4.0],
    },
    RouteSeed {
        id: 2,
        name: "Rinjani Crater Rim via Senaru",
        difficulty: Difficulty::Moderate,
        distance_km: 18.0,
        duration_hours: 30.0,
        mountain: "Mount Rinjani",
        trailhead: "senaru",
        region: "lombok",
        description: "Rainforest climb to the rim overlooking Segara Anak lake.",
        values: [2.0, 1500.0, 30.0, 5.0, 3.0, 4.0],
    },
    RouteSeed {
        id: 3,
        name: "Semeru Summit via Ranu Pani",
        difficulty: Difficulty::Hard,
        distance_km: 38.0,
        duration_hours: 56.0,
        mountain: "Mount Semeru",
        trailhead: "ranu pani",
        region: "east_java",
        description: "Past Ranu Kumbolo to Java's highest point on loose volcanic sand.",
        values: [4.0, 1700.0, 56.0, 5.0, 4.0, 3.0],
    },
    RouteSeed {
        id: 4,
        name: "Merapi Summit via Selo",
        difficulty: Difficulty::Moderate,
        distance_km: 10.0,
        duration_hours: 10.0,
        mountain: "Mount Merapi",
        trailhead: "selo",
        region: "central_java",
        description: "Short, steep night climb on an active volcano; check the alert level first.",
        values: [3.0, 1300.0, 10.0, 4.0, 4.0, 5.0],
    },
    RouteSeed {
        id: 5,
        name: "Merbabu via Selo",
        difficulty: Difficulty::Moderate,
        distance_km: 17.0,
        duration_hours: 14.0,
        mountain: "Mount Merbabu",
        trailhead: "selo",
        region: "central_java",
        description: "Grassy ridges facing Merapi with wide sunrise views.",
        values: [2.0, 1400.0, 14.0, 5.0, 2.0, 3.0],
    },
    RouteSeed {
        id: 6,
        name: "Prau via Patak Banteng",
        difficulty: Difficulty::Easy,
        distance_km: 6.0,
        duration_hours: 5.0,
        mountain: "Mount Prau",
        trailhead: "dieng",
        region: "central_java",
        description: "Popular short hike above the Dieng plateau temples.",
        values: [1.0, 600.0, 5.0, 4.0, 5.0, 2.0],
    },
];

/// Build the stock catalog: six criteria over six routes.
///
/// # Errors
/// Returns [`CatalogError`] if the stock tables are inconsistent.
///
/// # Examples
/// ```
/// let catalog = trailrank_data::seed_catalog()?;
/// assert_eq!(catalog.len(), 6);
/// assert_eq!(catalog.criteria().len(), 6);
/// # Ok::<(), trailrank_core::CatalogError>(())
/// ```
pub fn seed_catalog() -> Result<Catalog, CatalogError> {
    let criteria = CRITERIA
        .iter()
        .map(|seed| Criterion {
            id: CriterionId(seed.id),
            factor: seed.factor,
            name: seed.name.to_owned(),
            unit: seed.unit.to_owned(),
            is_benefit: seed.is_benefit,
            weight_in_factor: seed.weight_in_factor,
            kind: seed.kind,
        })
        .collect();
    let routes = ROUTES
        .iter()
        .map(|seed| Route {
            id: RouteId(seed.id),
            name: seed.name.to_owned(),
            difficulty: seed.difficulty,
            distance_km: seed.distance_km,
            duration_hours: seed.duration_hours,
            mountain: Mountain {
                name: seed.mountain.to_owned(),
                location: seed.trailhead.to_owned(),
                region: seed.region.to_owned(),
            },
            description: seed.description.to_owned(),
        })
        .collect();
    let values = ROUTES
        .iter()
        .flat_map(|route| {
            CRITERIA
                .iter()
                .zip(route.values)
                .map(|(criterion, value)| CriterionValue {
                    route_id: RouteId(route.id),
                    criterion_id: CriterionId(criterion.id),
                    value,
                })
        })
        .collect();
    Catalog::new(criteria, SEED_FACTOR_WEIGHTS, routes, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use trailrank_core::DistanceProvider;

    use crate::LocationTable;

    #[rstest]
    fn seed_catalog_is_complete() {
        let catalog = seed_catalog().expect("seed data is consistent");
        assert_eq!(catalog.len(), ROUTES.len());
        assert_eq!(
            catalog.value(RouteId(2), CriterionId(2)),
            Some(1500.0),
            "crater rim elevation gain"
        );
    }

    #[rstest]
    fn every_trailhead_is_in_the_location_table() {
        let table = LocationTable::default();
        let catalog = seed_catalog().expect("seed data is consistent");
        for route in catalog.routes() {
            assert!(
                table.contains(&route.mountain.location),
                "{} has no coordinates",
                route.mountain.location
            );
            assert!(!table.distance_km("jakarta", &route.mountain.location).is_estimated());
        }
    }

    #[rstest]
    fn factor_shares_sum_to_one() {
        let catalog = seed_catalog().expect("seed data is consistent");
        for factor in [Factor::PhysicalDemand, Factor::ExperienceQuality] {
            let share: f64 = catalog
                .criteria()
                .iter()
                .filter(|criterion| criterion.factor == factor)
                .map(|criterion| criterion.weight_in_factor)
                .sum();
            assert!((share - 1.0).abs() < 1e-9, "{factor} sums to {share}");
        }
    }
}
