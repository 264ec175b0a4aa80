//! Run configuration, loadable from a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::builder::BuildConfig;
use crate::{Error, Result};

/// Settings for one generate-analyse-save run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    pub population: usize,
    pub min_friends: usize,
    pub max_friends: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    pub snapshot_path: PathBuf,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            population: 20,
            min_friends: 2,
            max_friends: 6,
            seed: None,
            threads: None,
            snapshot_path: PathBuf::from("social_network.json"),
        }
    }
}

impl NetworkConfig {
    /// Parse a JSON config file. Missing fields take defaults.
    ///
    /// Not validated here: callers merge their overrides first, then call
    /// `validate` once.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_friends > self.max_friends {
            return Err(Error::InvalidConfig(format!(
                "min_friends ({}) is greater than max_friends ({})",
                self.min_friends, self.max_friends
            )));
        }
        if self.snapshot_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("snapshot_path is empty".into()));
        }
        self.build_config().validate()
    }

    pub fn build_config(&self) -> BuildConfig {
        BuildConfig {
            population: self.population,
            friends: self.min_friends..=self.max_friends,
            seed: self.seed,
            threads: self.threads,
        }
    }
}
