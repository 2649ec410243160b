//! Non-fatal diagnostics raised during cluster to region-pair assignment.

use super::error_code::{self, TractorErrorCode};

/// Diagnostic conditions recorded while assigning groups to region pairs.
/// None of these abort a run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssignmentError {
    #[error(
        "group {group} has a tied majority vote ({votes} votes each among {tied:?}); kept {chosen}"
    )]
    AmbiguousAssignment {
        group: usize,
        chosen: String,
        tied: Vec<String>,
        votes: usize,
    },
}

impl TractorErrorCode for AssignmentError {
    fn error_code(&self) -> &'static str {
        error_code::AMBIGUOUS_ASSIGNMENT
    }
}
