//! Explicit engine parameters. The engine reads nothing else.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReclassificationParams {
    pub length_threshold: f32,
    pub shuffle_seed: u64,
    pub distance_threshold: f32,
    pub resample_points: usize,
}

impl ReclassificationParams {
    /// True when every value matches the compiled defaults, i.e. scores
    /// produced with these parameters are comparable with other submissions.
    pub fn is_standard(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for ReclassificationParams {
    fn default() -> Self {
        Self {
            length_threshold: defaults::DEFAULT_LENGTH_THRESHOLD,
            shuffle_seed: defaults::DEFAULT_SHUFFLE_SEED,
            distance_threshold: defaults::DEFAULT_DISTANCE_THRESHOLD,
            resample_points: defaults::DEFAULT_RESAMPLE_POINTS,
        }
    }
}
