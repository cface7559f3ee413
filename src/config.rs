//! Generator configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noise::LatticeNoiseConfig;

/// Errors raised while loading or checking a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Everything needed to build one height field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Noise parameters, including the seed.
    pub noise: LatticeNoiseConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            noise: LatticeNoiseConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a JSON document, taking the seed from `fallback` when the
    /// document has no `noise.seed` key.
    pub fn from_json_str_or_seed<F>(json: &str, fallback: F) -> Result<Self, ConfigError>
    where
        F: FnOnce() -> u64,
    {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let has_seed = value
            .get("noise")
            .and_then(|noise| noise.get("seed"))
            .is_some();
        let mut config: Self = serde_json::from_value(value)?;
        if !has_seed {
            config.noise.seed = fallback();
        }
        config.validate()?;
        Ok(config)
    }

    /// File variant of `from_json_str_or_seed`.
    pub fn from_json_file_or_seed<F>(path: &Path, fallback: F) -> Result<Self, ConfigError>
    where
        F: FnOnce() -> u64,
    {
        let text = fs::read_to_string(path)?;
        Self::from_json_str_or_seed(&text, fallback)
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        self.noise
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}
