//! # tractor-core
//!
//! Foundation crate for the Tractor reclassification workspace.
//! Defines curves, regions, region pairs, score records, the collaborator
//! traits (curve source, region source, clustering oracle), errors, config
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod geometry;
pub mod models;
pub mod traits;
pub mod tracing;

pub use config::{ReclassificationParams, TractorConfig};
pub use errors::{PipelineResult, ReclassificationError, TractorErrorCode};
pub use geometry::Point3;
pub use models::{
    ClusterGroup, Curve, InvalidBundle, Orientation, Region, RegionPair, ScoreRecord, SourceLabel,
};
