//! Landfill Legends Types - Core types for waste classification and disposal
//!
//! These types are shared by every stage of the recommendation pipeline:
//!
//! ## Pipeline
//!
//! - **Identification** produces a [`MaterialRecord`] from a description or image
//! - **Policy** maps a record and a region to a [`DisposalRecommendation`]
//! - **Facilities** returns ranked [`Facility`] entries for drop-off items
//! - **Schedule** turns a recommendation into a collection-day suggestion
//!
//! ## Regions
//!
//! Region codes (`US-CA`, `US-NY`, ...) are matched case-insensitively. See
//! [`region`] for normalization and the fallback codes each lookup uses.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod disposal;
pub mod facility;
pub mod material;
pub mod region;

// Re-export main types
pub use disposal::{DisposalMethod, DisposalRecommendation, Urgency};
pub use facility::{Facility, FacilityHours, FacilityLocation, FacilityType, GeoPoint};
pub use material::{IdentificationSource, MaterialRecord, MaterialType, Recyclability};
pub use region::{normalize_region, DEFAULT_REGION, FALLBACK_FACILITY_REGION};
