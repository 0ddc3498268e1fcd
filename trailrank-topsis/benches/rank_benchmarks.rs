//! Criterion benchmarks for the TOPSIS engine.
//!
//! Measures `rank()` over synthetic catalogs of 10, 100 and 1000 routes and
//! over the stock catalog with real distance and cost collaborators.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package trailrank-topsis
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use trailrank_core::test_support::{
    CatalogBuilder, DestinationDistance, FlatCostModel, criterion as catalog_criterion, route,
};
use trailrank_core::{
    BudgetRange, Catalog, CriterionKind, Difficulty, ExperienceLevel, Factor, FactorWeights,
    Interest, Ranker, UserPreferences,
};
use trailrank_data::{CostEstimator, LocationTable, seed_catalog};
use trailrank_topsis::{CriteriaAugmenter, TopsisEngine};

/// Catalog sizes to benchmark.
const CATALOG_SIZES: &[u32] = &[10, 100, 1000];

const DIFFICULTIES: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Moderate,
    Difficulty::Hard,
    Difficulty::Expert,
];

/// Deterministic catalog whose values cycle through small primes so no
/// column is constant.
#[expect(
    clippy::integer_division_remainder_used,
    clippy::as_conversions,
    clippy::cast_possible_truncation,
    reason = "cyclic synthetic values for small indices"
)]
fn synthetic_catalog(size: u32) -> Catalog {
    let builder = CatalogBuilder::new(FactorWeights::new(0.35, 0.30, 0.35))
        .criterion(catalog_criterion(
            1,
            Factor::PhysicalDemand,
            "Technical Difficulty",
            false,
            0.6,
            CriterionKind::General,
        ))
        .criterion(catalog_criterion(
            2,
            Factor::PhysicalDemand,
            "Elevation Gain",
            false,
            0.4,
            CriterionKind::General,
        ))
        .criterion(catalog_criterion(
            3,
            Factor::ExperienceQuality,
            "Scenic Value",
            true,
            0.7,
            CriterionKind::Scenery,
        ))
        .criterion(catalog_criterion(
            4,
            Factor::ExperienceQuality,
            "Crowding Level",
            false,
            0.3,
            CriterionKind::Crowding,
        ));
    (1..=size)
        .fold(builder, |builder, id| {
            let difficulty = DIFFICULTIES
                .get((id % 4) as usize)
                .copied()
                .unwrap_or(Difficulty::Moderate);
            let hours = f64::from(4 + id % 60);
            let trailhead = format!("trailhead-{}", id % 17);
            builder.route(
                route(id, &format!("Route {id}"), difficulty, hours, &trailhead),
                &[
                    f64::from(1 + id % 5),
                    f64::from(500 + (id * 37) % 2500),
                    f64::from(1 + (id * 3) % 5),
                    f64::from(1 + (id * 7) % 5),
                ],
            )
        })
        .build()
        .unwrap_or_else(|err| panic!("synthetic catalog is complete: {err}"))
}

fn preferences() -> UserPreferences {
    UserPreferences::new(ExperienceLevel::Intermediate, "jakarta")
        .with_group_size(3)
        .with_budget(BudgetRange::From1mTo2m)
        .with_interest(Interest::ScenicViews)
}

/// Benchmark ranking time for synthetic catalogs of increasing size.
fn bench_rank_synthetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_synthetic");
    let distances = (0..17).fold(DestinationDistance::new(300.0), |provider, index| {
        provider.with(&format!("trailhead-{index}"), f64::from(40 * (index + 1)))
    });
    let engine = TopsisEngine::new(CriteriaAugmenter::new(
        distances,
        FlatCostModel { per_day: 150_000 },
    ));
    let preferences = preferences();

    for &size in CATALOG_SIZES {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(u64::from(size)));
        group.bench_with_input(BenchmarkId::new("routes", size), &catalog, |b, catalog| {
            b.iter(|| engine.rank(black_box(catalog), black_box(&preferences)));
        });
    }

    group.finish();
}

/// Benchmark the stock catalog with haversine distances and rate tables.
fn bench_rank_stock(c: &mut Criterion) {
    let catalog = seed_catalog().unwrap_or_else(|err| panic!("seed catalog is valid: {err}"));
    let engine = TopsisEngine::new(CriteriaAugmenter::new(
        LocationTable::default(),
        CostEstimator::new(LocationTable::default()),
    ));
    let preferences = preferences();
    c.bench_function("rank_stock_catalog", |b| {
        b.iter(|| engine.rank(black_box(&catalog), black_box(&preferences)));
    });
}

criterion_group!(benches, bench_rank_synthetic, bench_rank_stock);
criterion_main!(benches);
