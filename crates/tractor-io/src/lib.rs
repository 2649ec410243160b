//! # tractor-io
//!
//! The filesystem side of Tractor: JSON curve containers, the region mask
//! directory, score records, the submission/output layout, bundle exports
//! and the `run_submission` orchestration that ties them to the engine.

pub mod curve_container;
pub mod export;
mod json_io;
pub mod region_masks;
pub mod runner;
pub mod score_store;
pub mod submission;
pub mod versions;

pub use curve_container::{ContainerSource, CurveContainer};
pub use export::export_outcome;
pub use region_masks::{MaskDirectory, ReferenceVolume};
pub use runner::{default_config_root, run_submission, run_submission_with, RunReport, RunRequest};
pub use score_store::{check_writable, read_score, write_score};
pub use submission::{OutputLayout, SubmissionPaths};
pub use versions::check_versions;
