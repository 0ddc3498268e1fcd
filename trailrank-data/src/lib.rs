//! Reference data and logistics collaborators for the trailrank engine.
//!
//! Responsibilities:
//! - Resolve named locations to great-circle distances ([`LocationTable`]).
//! - Estimate per-trip costs from fixed rate tables ([`CostEstimator`]).
//! - Ship the stock route catalog ([`seed_catalog`]).
//!
//! Boundaries:
//! - Do not encode ranking rules (live in `trailrank-topsis`).
//!
//! Invariants:
//! - Tables are immutable once built and safe to share between threads.
//! - No global mutable state.
#![forbid(unsafe_code)]

mod cost;
mod locations;
mod seed;

pub use cost::{ByDifficulty, ByLevel, CostEstimator, CostTables};
pub use locations::{DEFAULT_FALLBACK_KM, EARTH_RADIUS_KM, LocationTable, haversine_km};
pub use seed::{SEED_FACTOR_WEIGHTS, seed_catalog};
