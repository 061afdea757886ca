//! CLI configuration

use crate::error::{CliError, CliResult};
use landfill_agent::AgentConfig;
use landfill_types::GeoPoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Region used when `--region` is not given
    pub default_region: Option<String>,

    /// Location used for distance ranking when `--lat`/`--lng` are not given
    pub home_location: Option<GeoPoint>,

    /// Maximum facilities listed with a recommendation
    pub facility_limit: Option<usize>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };
        Self::load_from(&config_path)
    }

    fn load_from(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(CliConfig::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("landfill").join("config.toml"))
    }

    /// Agent settings with config-file values applied over the defaults
    pub fn agent_config(&self) -> AgentConfig {
        let mut config = AgentConfig::default();
        if let Some(region) = &self.default_region {
            config = config.with_default_region(region.clone());
        }
        if let Some(limit) = self.facility_limit {
            config = config.with_facility_limit(limit);
        }
        config
    }
}
