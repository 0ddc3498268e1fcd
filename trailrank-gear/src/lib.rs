//! Gear recommendations for a planned hike.
//!
//! Responsibilities:
//! - Describe a trip by duration, technical grade, weather, season, party
//!   size and experience ([`GearRequest`]).
//! - Merge fixed rule tables ([`GearRules`]) into a prioritised,
//!   deduplicated [`GearList`].
//!
//! Boundaries:
//! - Independent of route scoring; a ranked route only seeds the request.
#![forbid(unsafe_code)]

mod advisor;
mod request;
mod rules;

pub use advisor::{GearAdvisor, GearList};
pub use request::{GearRequest, GearRequestError, Season, Weather};
pub use rules::{GearRules, GearTier};
