//! Meter configuration
//!
//! Values come from an optional file (format picked from its extension) with
//! `KMETER_*` environment variables layered on top, e.g.
//! `KMETER_ESTIMATE_BPS=750000` or `KMETER_LOG_TRANSFERS=false`.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::meter::NO_ESTIMATE;
use crate::models::DataSpec;

pub const ENV_PREFIX: &str = "KMETER";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// A transfer replayed through the meter, one byte-count notification per chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptedTransfer {
    pub source: String,
    pub uri: String,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub chunks: Vec<u64>,
}

impl ScriptedTransfer {
    pub fn data_spec(&self) -> DataSpec {
        DataSpec::new(self.uri.clone()).with_range(self.position, self.length)
    }

    pub fn total_bytes(&self) -> u64 {
        self.chunks.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Estimate reported by the meter, in bits per second
    pub estimate_bps: i64,
    /// Wrap the observer so every notification is logged
    pub log_transfers: bool,
    pub transfers: Vec<ScriptedTransfer>,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            estimate_bps: NO_ESTIMATE,
            log_transfers: true,
            transfers: Vec::new(),
        }
    }
}

impl MeterConfig {
    /// Loads from `path` (if any) and the process environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(
            path,
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Loads from `path` (if any) with `env` as the override layer
    pub fn load_with_env(
        path: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!("Loading meter configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }
        let settings: MeterConfig = builder.add_source(env).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, transfer) in self.transfers.iter().enumerate() {
            if transfer.source.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "transfer {index} has an empty source"
                )));
            }
            if transfer.uri.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "transfer {index} ({}) has an empty uri",
                    transfer.source
                )));
            }
        }
        Ok(())
    }
}
