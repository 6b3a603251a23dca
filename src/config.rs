//! Turn configuration.
//!
//! Loaded from JSON; every field has a default, so `{}` is a valid config.
//!
//! ```json
//! { "max_rolls": 1000, "seed": 42 }
//! ```

use crate::die::RandomDie;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default cap on rolls per turn. A fair die needs more than this with
/// probability (1/6)^1000.
pub const DEFAULT_MAX_ROLLS: usize = 1000;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurnConfig {
    /// Most rolls a single turn may take before giving up
    pub max_rolls: usize,
    /// Fixed RNG seed for reproducible turns
    pub seed: Option<u64>,
}

impl Default for TurnConfig {
    fn default() -> Self {
        Self {
            max_rolls: DEFAULT_MAX_ROLLS,
            seed: None,
        }
    }
}

impl TurnConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rolls == 0 {
            return Err(ConfigError::Invalid(
                "max_rolls must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Die for this config: seeded when `seed` is set, otherwise from the OS.
    pub fn die(&self) -> RandomDie<StdRng> {
        match self.seed {
            Some(seed) => RandomDie::seeded(seed),
            None => RandomDie::from_os_rng(),
        }
    }
}
