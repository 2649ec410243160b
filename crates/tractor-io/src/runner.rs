//! One submission, end to end.
//!
//! Every input is read and the updated score record computed before the
//! first output is written. Exports go to a staging directory under the
//! output root and are only moved into `segmented/` once the score record
//! is on disk, so a failed run never leaves exports without scores.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use tractor_clustering::QuickBundles;
use tractor_core::config::TractorConfig;
use tractor_core::errors::ReclassificationError;
use tractor_core::models::ScoreRecord;
use tractor_core::traits::{ClusteringOracle, RegionSource};
use tractor_reclassify::{update_scores, ReclassificationEngine, RegionResolver};

use crate::curve_container::ContainerSource;
use crate::export::export_outcome;
use crate::region_masks::{MaskDirectory, ReferenceVolume};
use crate::score_store::{check_writable, read_score, write_score};
use crate::submission::{OutputLayout, SubmissionPaths};

#[derive(Debug, Clone)]
pub struct RunRequest {
    /// `<id>_IC.<ext>` container; NC and VCWP are found beside it.
    pub ic_container: PathBuf,
    pub score_file: PathBuf,
    /// Holds `masks/rois/` and `masks/wm.json`.
    pub base_dir: PathBuf,
    pub out_dir: PathBuf,
    pub config: TractorConfig,
    /// Overwrite an existing output score file.
    pub force: bool,
}

#[derive(Debug)]
pub struct RunReport {
    pub submission_id: String,
    pub score_path: PathBuf,
    pub exports: Vec<PathBuf>,
    pub scores: ScoreRecord,
    /// Ambiguous votes resolved by first-seen order.
    pub ambiguous_groups: usize,
}

/// Run with the QuickBundles oracle.
pub fn run_submission(request: &RunRequest) -> Result<RunReport, ReclassificationError> {
    run_submission_with(request, &QuickBundles::new())
}

pub fn run_submission_with(
    request: &RunRequest,
    oracle: &dyn ClusteringOracle,
) -> Result<RunReport, ReclassificationError> {
    let submission = SubmissionPaths::from_ic_path(&request.ic_container)?;
    let span = tractor_core::submission_span!(submission.id);
    let _guard = span.enter();

    submission.ensure_exist()?;
    let original = read_score(&request.score_file)?;
    original.total_count()?;

    let layout = OutputLayout::new(&request.out_dir)?;
    let score_path = layout.score_path(&request.score_file)?;
    check_writable(&score_path, request.force)?;

    let volume = ReferenceVolume::load(&request.base_dir)?;
    let regions = MaskDirectory::new(&request.base_dir).load_regions()?;
    let resolver = RegionResolver::new(regions)?;
    let source = ContainerSource::new(submission.by_label(), volume.dimensions);

    let engine = ReclassificationEngine::new(request.config.to_params(), oracle);
    let result = engine.run(&source, &resolver)?;
    if !result.is_clean() {
        warn!(
            ambiguous_groups = result.warning_count(),
            "some groups had tied region-pair votes"
        );
    }
    let outcome = &result.data;
    let scores = update_scores(&original, outcome)?;

    let staged = if request.config.export.effective_save_tracts() {
        let staging = layout.create_staging(&submission.id)?;
        match export_outcome(outcome, &submission.id, &staging) {
            Ok(files) => Some((staging, files)),
            Err(e) => {
                discard_staging(&staging);
                return Err(e.into());
            }
        }
    } else {
        None
    };

    if let Err(e) = write_scores(&layout, &score_path, &scores, request.force) {
        if let Some((staging, _)) = &staged {
            discard_staging(staging);
        }
        return Err(e);
    }

    let exports = match staged {
        Some((staging, files)) => layout.publish(&staging, files)?,
        None => Vec::new(),
    };

    info!(
        bundles = outcome.invalid_bundle_count(),
        reclassified_ic = outcome.reclassified_ic_count,
        nc = outcome.nc_count(),
        exports = exports.len(),
        "submission reclassified"
    );

    Ok(RunReport {
        submission_id: submission.id,
        score_path,
        exports,
        scores,
        ambiguous_groups: result.warning_count(),
    })
}

fn write_scores(
    layout: &OutputLayout,
    path: &Path,
    scores: &ScoreRecord,
    force: bool,
) -> Result<(), ReclassificationError> {
    layout.create_scores()?;
    write_score(path, scores, force)?;
    Ok(())
}

fn discard_staging(staging: &Path) {
    if let Err(e) = std::fs::remove_dir_all(staging) {
        warn!(path = %staging.display(), error = %e, "could not remove staged exports");
    }
}

/// Default config root for a run: the working directory.
pub fn default_config_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf())
}
