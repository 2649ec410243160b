//! Pipeline errors and non-fatal diagnostic collection.

use super::{
    AssignmentError, ClusteringError, ConfigError, ExportError, IngestError, RegionError,
    ScoreError, TractorErrorCode,
};

/// Fatal errors that can occur during a reclassification run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReclassificationError {
    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Region error: {0}")]
    Region(#[from] RegionError),

    #[error("Clustering error: {0}")]
    Clustering(#[from] ClusteringError),

    #[error("Score error: {0}")]
    Score(#[from] ScoreError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TractorErrorCode for ReclassificationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Region(e) => e.error_code(),
            Self::Clustering(e) => e.error_code(),
            Self::Score(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a pipeline run that carries non-fatal diagnostics beside the data.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal diagnostics collected during the run.
    pub warnings: Vec<AssignmentError>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, warning: AssignmentError) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no non-fatal diagnostics.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
