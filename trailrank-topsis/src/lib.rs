//! TOPSIS decision engine for hiking routes.
//!
//! A request flows through three stages:
//! - [`PreferenceWeighter`] turns qualitative preferences into factor
//!   weights using declarative [`WeightingRules`];
//! - [`CriteriaAugmenter`] prices the trip and scores trailhead
//!   accessibility for the hiker;
//! - [`TopsisEngine`] scores the decision matrix, orders the routes and
//!   explains each placement.
//!
//! The engine implements [`trailrank_core::Ranker`] and is safe to share
//! between threads.
#![forbid(unsafe_code)]

mod augment;
mod engine;
mod explain;
mod methodology;
mod weights;

pub use augment::{Augmentation, CriteriaAugmenter, MIN_ACCESSIBILITY, accessibility_score};
pub use engine::{DEFAULT_NEUTRAL_SCORE, EngineConfig, TopsisEngine};
pub use explain::{ExplainConfig, RouteFacts, explain};
pub use methodology::{ALGORITHM, describe, effective_weights};
pub use weights::{
    Condition, DEFAULT_MIN_WEIGHT, PreferenceWeighter, Preset, WeightRule, WeightingRules,
};
