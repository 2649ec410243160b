//! Curve and region ingestion errors.

use super::error_code::{self, TractorErrorCode};

/// Errors raised while locating and reading curve containers or region masks.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("required input not found: {path}")]
    MissingInput { path: String },

    #[error("malformed input {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl TractorErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => error_code::MISSING_INPUT,
            Self::Malformed { .. } => error_code::MALFORMED_INPUT,
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
