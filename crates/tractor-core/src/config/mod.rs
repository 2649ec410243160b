//! Configuration system for Tractor.
//! TOML-based, 4-layer resolution: CLI > env > project file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod export_config;
pub mod params;
pub mod reclassification_config;
pub mod tractor_config;

pub use clustering_config::ClusteringConfig;
pub use export_config::ExportConfig;
pub use params::ReclassificationParams;
pub use reclassification_config::ReclassificationConfig;
pub use tractor_config::{CliOverrides, TractorConfig};
