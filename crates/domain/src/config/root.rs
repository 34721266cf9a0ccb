use super::{CacheConfig, ConfigError, LoggingConfig, ServerConfig, UpstreamConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parses a TOML config file. Validation is separate so CLI overrides
    /// can be applied between loading and validating.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.upstream.instances.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one upstream instance must be configured".to_string(),
            ));
        }
        if self.upstream.fan_out == 0 {
            return Err(ConfigError::Invalid(
                "upstream fan_out must be at least 1".to_string(),
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::Invalid(
                "cache max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
