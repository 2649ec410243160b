//! TractorErrorCode trait for stable, machine-readable error reporting.

/// Every error enum implements this to provide a structured error code
/// string, used by the CLI when reporting boundary violations.
pub trait TractorErrorCode {
    /// Returns the error code string (e.g., "MISSING_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MISSING_INPUT: &str = "MISSING_INPUT";
pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const IO_ERROR: &str = "IO_ERROR";
pub const INCONSISTENT_SCORE: &str = "INCONSISTENT_SCORE";
pub const OUTPUT_COLLISION: &str = "OUTPUT_COLLISION";
pub const AMBIGUOUS_ASSIGNMENT: &str = "AMBIGUOUS_ASSIGNMENT";
pub const CLUSTERING_ERROR: &str = "CLUSTERING_ERROR";
pub const REGION_ERROR: &str = "REGION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
