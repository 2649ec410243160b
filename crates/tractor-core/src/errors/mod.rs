//! Error handling for Tractor.
//! One error enum per subsystem, `thiserror` only.

pub mod assignment_error;
pub mod clustering_error;
pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod ingest_error;
pub mod pipeline_error;
pub mod region_error;
pub mod score_error;

pub use assignment_error::AssignmentError;
pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use error_code::TractorErrorCode;
pub use export_error::ExportError;
pub use ingest_error::IngestError;
pub use pipeline_error::{PipelineResult, ReclassificationError};
pub use region_error::RegionError;
pub use score_error::ScoreError;
