//! # landfill-facilities
//!
//! Static catalog of drop-off facilities per region, with material-based
//! filtering and great-circle distance ranking.
//!
//! Unlike the policy and schedule tables there is no generic facility list:
//! absent or unknown regions are served the `US-CA` catalog.

pub mod catalog;
pub mod distance;
pub mod locator;

pub use catalog::{builtin_catalog, california_facilities, new_york_facilities, texas_facilities};
pub use distance::{distance_miles, great_circle_miles, EARTH_RADIUS_MILES};
pub use locator::{rank_by_distance, FacilityLocator};
