use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::export::ExportConfig;

fn default_iterations() -> u64 {
    1
}

/// Settings for a suite run, loadable from a YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Untimed invocations per case before measurement starts.
    #[serde(default)]
    pub warmup: u64,
    /// Measured invocations per case.
    #[serde(default = "default_iterations")]
    pub iterations: u64,
    /// Optional periodic export of the timing record.
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            warmup: 0,
            iterations: default_iterations(),
            export: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

impl RunConfig {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Validation(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
