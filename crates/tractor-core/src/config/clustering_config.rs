//! Clustering oracle configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Shape distance under which curves share a group. Default: 20.
    pub distance_threshold: Option<f32>,
    /// Points each curve is resampled to before comparison. Default: 12.
    pub resample_points: Option<usize>,
}

impl ClusteringConfig {
    pub fn effective_distance_threshold(&self) -> f32 {
        self.distance_threshold.unwrap_or(defaults::DEFAULT_DISTANCE_THRESHOLD)
    }

    pub fn effective_resample_points(&self) -> usize {
        self.resample_points.unwrap_or(defaults::DEFAULT_RESAMPLE_POINTS)
    }
}
