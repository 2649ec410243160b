//! Score record errors.

use super::error_code::{self, TractorErrorCode};

/// Errors raised while reading, updating or writing a score record.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("score file not found: {path}")]
    MissingInput { path: String },

    #[error("inconsistent score record: {reason}")]
    InconsistentScore { reason: String },

    #[error("output score path {path} is the input score path")]
    OutputCollision { path: String },

    #[error("output score file {path} already exists")]
    OutputExists { path: String },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },
}

impl TractorErrorCode for ScoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingInput { .. } => error_code::MISSING_INPUT,
            Self::InconsistentScore { .. } => error_code::INCONSISTENT_SCORE,
            Self::OutputCollision { .. } | Self::OutputExists { .. } => {
                error_code::OUTPUT_COLLISION
            }
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}
