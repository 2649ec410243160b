//! Clustering oracle errors.

use super::error_code::{self, TractorErrorCode};

/// Errors raised by or about the shape-clustering oracle.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("invalid clustering parameters: {reason}")]
    InvalidParameters { reason: String },

    #[error("oracle {oracle} returned groups that do not partition the candidates: {reason}")]
    InvalidPartition { oracle: String, reason: String },

    #[error("oracle {oracle} failed: {reason}")]
    OracleFailed { oracle: String, reason: String },
}

impl TractorErrorCode for ClusteringError {
    fn error_code(&self) -> &'static str {
        error_code::CLUSTERING_ERROR
    }
}
