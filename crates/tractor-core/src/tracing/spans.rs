//! Span definitions per operation: submission run, reclassification pass.

/// Create the span of one full submission run.
#[macro_export]
macro_rules! submission_span {
    ($submission_id:expr) => {
        ::tracing::info_span!("tractor.submission", submission = %$submission_id)
    };
}

/// Create the span of one reclassification pass.
#[macro_export]
macro_rules! reclassify_span {
    ($oracle:expr, $seed:expr) => {
        ::tracing::info_span!("tractor.reclassify", oracle = %$oracle, seed = $seed)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SUBMISSION: &str = "tractor.submission";
    pub const RECLASSIFY: &str = "tractor.reclassify";
}
