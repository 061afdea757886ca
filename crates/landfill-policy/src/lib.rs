//! # landfill-policy
//!
//! Regional disposal policies and the rules that turn a material record into
//! a disposal recommendation.
//!
//! ## Regions
//!
//! - **US-CA** (California): resin codes 1, 2, 5; curbside organics pickup
//! - **US-NY** (New York): resin codes 1, 2, 4, 5; organics by drop-off only
//! - **US-TX** (Texas): resin codes 1, 2; no composting program
//! - **default** (General Guidelines): used for any unknown region
//!
//! ## Decision order
//!
//! First applicable rule wins:
//!
//! 1. Special-disposal items go to a designated drop-off
//! 2. Compostable items go to composting where the region runs a program
//! 3. Definitely-recyclable items go to curbside or drop-off recycling
//! 4. Everything else goes to landfill

#![deny(unsafe_code)]

pub mod policy;
pub mod regions;
pub mod service;

pub use policy::{
    CurbsideRecycling, OrganicsProgram, RegionalPolicy, SpecialDisposalCategory,
    SpecialDisposalRule, SpecialDisposalRules,
};
pub use regions::{
    builtin_policies, california_policy, general_policy, new_york_policy, texas_policy,
};
pub use service::DisposalPolicyService;
