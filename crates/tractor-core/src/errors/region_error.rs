//! Region-proximity resolver errors.

use super::error_code::{self, TractorErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    #[error("at least two regions are required to resolve a pair, found {found}")]
    NotEnoughRegions { found: usize },

    #[error("region {name} has no voxels")]
    EmptyRegion { name: String },

    #[error("duplicate region name: {name}")]
    DuplicateRegion { name: String },
}

impl TractorErrorCode for RegionError {
    fn error_code(&self) -> &'static str {
        error_code::REGION_ERROR
    }
}
