//! Disposal recommendation types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an item should leave the household
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisposalMethod {
    CurbsideRecycling,
    DropOffRecycling,
    Composting,
    SpecialDisposal,
    Landfill,
}

impl DisposalMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurbsideRecycling => "curbside-recycling",
            Self::DropOffRecycling => "drop-off-recycling",
            Self::Composting => "composting",
            Self::SpecialDisposal => "special-disposal",
            Self::Landfill => "landfill",
        }
    }

    /// Methods that end at a facility rather than a bin
    pub fn is_drop_off(&self) -> bool {
        matches!(self, Self::DropOffRecycling | Self::SpecialDisposal)
    }
}

impl fmt::Display for DisposalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon an item should be dealt with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Region-specific disposal decision for one material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisposalRecommendation {
    pub method: DisposalMethod,

    /// True when the regular collection bin takes the item
    pub curbside_accepted: bool,

    /// Instructions shown to the resident
    pub notes: String,

    /// Display name of the policy that decided (e.g. "California")
    pub region: String,

    /// Whether special handling is legally required
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Drop-off channel for special disposal (e.g. "drop-off")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_off_method: Option<String>,

    /// Items the region's organics program takes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_items: Option<Vec<String>>,

    /// Waste-reduction advice attached to landfill results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl DisposalRecommendation {
    pub fn new(
        method: DisposalMethod,
        curbside_accepted: bool,
        notes: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            method,
            curbside_accepted,
            notes: notes.into(),
            region: region.into(),
            required: None,
            drop_off_method: None,
            accepted_items: None,
            recommendation: None,
        }
    }

    /// Whether the resident has to find a facility for this item
    pub fn needs_facility(&self) -> bool {
        !self.curbside_accepted || self.method == DisposalMethod::SpecialDisposal
    }
}
