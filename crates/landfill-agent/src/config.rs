//! Agent configuration and per-request options

use chrono::NaiveDateTime;
use landfill_types::{GeoPoint, DEFAULT_REGION};
use serde::{Deserialize, Serialize};

/// Maximum number of facilities attached to a report by default
pub const DEFAULT_FACILITY_LIMIT: usize = 3;

/// Agent-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Region used when a request does not name one
    pub default_region: String,

    /// Cap on facilities returned with a report
    pub facility_limit: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            default_region: DEFAULT_REGION.to_string(),
            facility_limit: DEFAULT_FACILITY_LIMIT,
        }
    }
}

impl AgentConfig {
    pub fn with_default_region(mut self, region: impl Into<String>) -> Self {
        self.default_region = region.into();
        self
    }

    pub fn with_facility_limit(mut self, limit: usize) -> Self {
        self.facility_limit = limit;
        self
    }
}

/// Options for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessOptions {
    /// Overrides the agent's region
    pub region: Option<String>,

    /// Enables distance ranking of facilities
    pub user_location: Option<GeoPoint>,

    /// Clock used for collection-day math; local time when absent
    pub now: Option<NaiveDateTime>,
}

impl ProcessOptions {
    pub fn for_region(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.user_location = Some(location);
        self
    }

    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    pub(crate) fn clock(&self) -> NaiveDateTime {
        self.now
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}
