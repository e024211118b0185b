use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CapacityStoreError {
    #[error("failed to read capacity store {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write capacity store {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse capacity store {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize capacity store: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("entity id must not be empty")]
    EmptyId,
    #[error("invalid capacity for {id}: {value}")]
    InvalidCapacity { id: String, value: f64 },
}

/// Capacity multipliers persisted per entity id (usually an epic id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityStore {
    capacities: BTreeMap<String, f64>,
}

impl CapacityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store at `path`; a missing file is an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CapacityStoreError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "capacity store not found, starting empty");
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path).map_err(|source| CapacityStoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        let store: CapacityStore =
            serde_yaml::from_str(&contents).map_err(|source| CapacityStoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        for (id, value) in &store.capacities {
            validate_capacity(id, *value)?;
        }
        Ok(store)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CapacityStoreError> {
        let path = path.as_ref();
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml).map_err(|source| CapacityStoreError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.capacities.get(id).copied()
    }

    pub fn set(&mut self, id: &str, capacity: f64) -> Result<(), CapacityStoreError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CapacityStoreError::EmptyId);
        }
        validate_capacity(id, capacity)?;
        self.capacities.insert(id.to_string(), capacity);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.capacities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capacities.is_empty()
    }
}

fn validate_capacity(id: &str, value: f64) -> Result<(), CapacityStoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CapacityStoreError::InvalidCapacity {
            id: id.to_string(),
            value,
        });
    }
    Ok(())
}
