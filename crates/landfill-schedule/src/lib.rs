//! # landfill-schedule
//!
//! Curbside collection schedules per region, and the service that turns a
//! disposal recommendation into a "when to put it out" suggestion.
//!
//! Bin items are scheduled against the next collection day for their bin.
//! Drop-off items get a facility-hours suggestion whose urgency depends on how
//! dangerous the item is. Unknown regions use the `default` schedule, which
//! only points residents at their local waste authority.

#![deny(unsafe_code)]

pub mod schedule;
pub mod timing;

pub use schedule::{
    builtin_schedules, california_schedule, general_schedule, new_york_schedule, texas_schedule,
    CollectionDay, CollectionDays, CollectionKind, Schedule,
};
pub use timing::{DisposalTimeService, TimingRecommendation, EARLY_COLLECTION_HOUR};
