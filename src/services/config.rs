use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::estimation::DEFAULT_CAPACITY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid default_capacity: {0}")]
    InvalidCapacity(f64),
}

/// Settings shared by the `estimate` and `report` commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Hours per unit of work when the dashboard payload has no rate.
    pub default_rate: Option<f64>,
    pub default_capacity: f64,
    /// Holiday YAML file or directory.
    pub holidays: Option<String>,
    /// Capacity store YAML file.
    pub capacity_store: Option<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            default_rate: None,
            default_capacity: DEFAULT_CAPACITY,
            holidays: None,
            capacity_store: None,
        }
    }
}

impl EstimatorConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(filepath).map_err(|source| ConfigError::Read {
            path: PathBuf::from(filepath),
            source,
        })?;
        Self::from_yaml_str(&contents, filepath)
    }

    fn from_yaml_str(contents: &str, filepath: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EstimatorConfig =
            serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
                path: PathBuf::from(filepath),
                source,
            })?;
        if !config.default_capacity.is_finite() || config.default_capacity < 0.0 {
            return Err(ConfigError::InvalidCapacity(config.default_capacity));
        }
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }
}
