//! Seed configuration
//!
//! Describes how an engine should be seeded, in a form that can be read
//! from JSON (CLI config files, Python dicts) and validated before any
//! engine is built.

use serde::{Deserialize, Serialize};

use crate::rng::{Mt19937, RngError, DEFAULT_SEED};

/// Seeding mode for a new engine
///
/// JSON form: `{"type": "scalar", "seed": 5489}` or
/// `{"type": "key", "key": [291, 564, 837, 1110]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SeedConfig {
    /// Scalar seeding
    Scalar { seed: u32 },

    /// Array seeding (key must be non-empty)
    Key { key: Vec<u32> },
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig::Scalar { seed: DEFAULT_SEED }
    }
}

impl SeedConfig {
    /// Parse from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, RngError> {
        let config: SeedConfig = serde_json::from_str(json).map_err(|e| {
            RngError::Serialization(format!("Seed config deserialization failed: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RngError> {
        match self {
            SeedConfig::Scalar { .. } => Ok(()),
            SeedConfig::Key { key } if key.is_empty() => Err(RngError::InvalidArgument(
                "Seed config key must contain at least one word".to_string(),
            )),
            SeedConfig::Key { .. } => Ok(()),
        }
    }

    /// Build a freshly seeded engine
    pub fn build(&self) -> Result<Mt19937, RngError> {
        match self {
            SeedConfig::Scalar { seed } => Ok(Mt19937::new(*seed)),
            SeedConfig::Key { key } => Mt19937::from_key(key),
        }
    }
}
