//! # Landfill Legends Agent
//!
//! Single entry point over the recommendation pipeline.
//!
//! ## Overview
//!
//! [`EnvironmentalAgent`] composes the identification, policy, facility and
//! schedule services behind one API:
//!
//! 1. Identify the item from a description or an image
//! 2. Look up the disposal method for the region
//! 3. Find drop-off facilities when the bin will not take it
//! 4. Suggest when to put it out or drop it off
//! 5. Attach handling tips
//!
//! ## Example
//!
//! ```rust
//! use landfill_agent::{EnvironmentalAgent, ProcessOptions};
//!
//! let agent = EnvironmentalAgent::new();
//! let outcome = agent.process_text_input("plastic bottle", &ProcessOptions::for_region("US-CA"));
//!
//! let report = outcome.report().expect("catalog item");
//! assert_eq!(report.disposal.method.as_str(), "curbside-recycling");
//! ```
//!
//! Failures are values, not errors: blank input and unrecognized items come
//! back as [`ProcessOutcome::Failure`] with a suggestion for the user.

#![deny(unsafe_code)]

pub mod agent;
pub mod config;
pub mod report;
pub mod tips;

pub use agent::EnvironmentalAgent;
pub use config::{AgentConfig, ProcessOptions, DEFAULT_FACILITY_LIMIT};
pub use report::{
    DisposalReport, DisposalSummary, MaterialSummary, ProcessFailure, ProcessOutcome,
};
pub use tips::{disposal_tips, SINGLE_USE_TIP};
