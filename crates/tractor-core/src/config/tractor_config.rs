//! Top-level Tractor configuration with 4-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    defaults, ClusteringConfig, ExportConfig, ReclassificationConfig, ReclassificationParams,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TRACTOR_*`)
/// 3. Project config (`tractor.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TractorConfig {
    pub reclassification: ReclassificationConfig,
    pub clustering: ClusteringConfig,
    pub export: ExportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub length_threshold: Option<f32>,
    pub shuffle_seed: Option<u64>,
    pub distance_threshold: Option<f32>,
    pub resample_points: Option<usize>,
    pub save_tracts: Option<bool>,
}

impl TractorConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            debug!(path = %project_config_path.display(), "merged project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TractorConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.reclassification.length_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "reclassification.length_threshold".to_string(),
                    message: "must be a finite, non-negative number".to_string(),
                });
            }
        }
        if let Some(threshold) = config.clustering.distance_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "clustering.distance_threshold".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        if let Some(points) = config.clustering.resample_points {
            if points < defaults::MIN_RESAMPLE_POINTS {
                return Err(ConfigError::ValidationFailed {
                    field: "clustering.resample_points".to_string(),
                    message: format!("must be at least {}", defaults::MIN_RESAMPLE_POINTS),
                });
            }
        }
        Ok(())
    }

    /// The explicit parameters handed to the engine.
    pub fn to_params(&self) -> ReclassificationParams {
        ReclassificationParams {
            length_threshold: self.reclassification.effective_length_threshold(),
            shuffle_seed: self.reclassification.effective_shuffle_seed(),
            distance_threshold: self.clustering.effective_distance_threshold(),
            resample_points: self.clustering.effective_resample_points(),
        }
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TractorConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TractorConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TractorConfig, other: &TractorConfig) {
        if other.reclassification.length_threshold.is_some() {
            base.reclassification.length_threshold = other.reclassification.length_threshold;
        }
        if other.reclassification.shuffle_seed.is_some() {
            base.reclassification.shuffle_seed = other.reclassification.shuffle_seed;
        }
        if other.clustering.distance_threshold.is_some() {
            base.clustering.distance_threshold = other.clustering.distance_threshold;
        }
        if other.clustering.resample_points.is_some() {
            base.clustering.resample_points = other.clustering.resample_points;
        }
        if other.export.save_tracts.is_some() {
            base.export.save_tracts = other.export.save_tracts;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRACTOR_LENGTH_THRESHOLD`, `TRACTOR_SHUFFLE_SEED`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut TractorConfig) {
        if let Ok(val) = std::env::var("TRACTOR_LENGTH_THRESHOLD") {
            if let Ok(v) = val.parse::<f32>() {
                config.reclassification.length_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRACTOR_SHUFFLE_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.reclassification.shuffle_seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRACTOR_DISTANCE_THRESHOLD") {
            if let Ok(v) = val.parse::<f32>() {
                config.clustering.distance_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRACTOR_RESAMPLE_POINTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.resample_points = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TRACTOR_SAVE_TRACTS") {
            if let Ok(v) = val.parse::<bool>() {
                config.export.save_tracts = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TractorConfig, cli: &CliOverrides) {
        if let Some(v) = cli.length_threshold {
            config.reclassification.length_threshold = Some(v);
        }
        if let Some(v) = cli.shuffle_seed {
            config.reclassification.shuffle_seed = Some(v);
        }
        if let Some(v) = cli.distance_threshold {
            config.clustering.distance_threshold = Some(v);
        }
        if let Some(v) = cli.resample_points {
            config.clustering.resample_points = Some(v);
        }
        if let Some(v) = cli.save_tracts {
            config.export.save_tracts = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
