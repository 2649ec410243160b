//! Ingestion and shuffle configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReclassificationConfig {
    /// Minimum arclength for a curve to be a clustering candidate. Default: 35.
    pub length_threshold: Option<f32>,
    /// Seed of the candidate shuffle. Default: 2.
    pub shuffle_seed: Option<u64>,
}

impl ReclassificationConfig {
    pub fn effective_length_threshold(&self) -> f32 {
        self.length_threshold.unwrap_or(defaults::DEFAULT_LENGTH_THRESHOLD)
    }

    pub fn effective_shuffle_seed(&self) -> u64 {
        self.shuffle_seed.unwrap_or(defaults::DEFAULT_SHUFFLE_SEED)
    }
}
