//! Curve export errors.

use super::error_code::{self, TractorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to serialize export {path}: {message}")]
    Serialize { path: String, message: String },
}

impl TractorErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
