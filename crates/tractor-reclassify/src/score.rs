//! Score update.
//!
//! `IB` stays an absolute count while `IC` and `NC` are fractions of the
//! total streamline count. Report consumers depend on that schema.

use tracing::{info, warn};

use tractor_core::config::defaults::RECLASSIFICATION_ALGO_VERSION;
use tractor_core::errors::ScoreError;
use tractor_core::models::ScoreRecord;

use crate::engine::ReclassificationOutcome;

/// Rewrite `original` with the counts of a reclassification run.
pub fn update_scores(
    original: &ScoreRecord,
    outcome: &ReclassificationOutcome,
) -> Result<ScoreRecord, ScoreError> {
    apply_counts(
        original,
        outcome.invalid_bundle_count(),
        outcome.reclassified_ic_count,
        outcome.nc_count(),
    )
}

/// Rewrite `IB`, `IC`, `NC`, `VCWP` and `algo_version`; everything else,
/// `total_streamlines_count` included, is carried over.
pub fn apply_counts(
    original: &ScoreRecord,
    invalid_bundles: usize,
    reclassified_ic_count: usize,
    nc_count: usize,
) -> Result<ScoreRecord, ScoreError> {
    let total = original.total_count()?;
    let classified = (reclassified_ic_count + nc_count) as u64;
    if classified > total {
        return Err(ScoreError::InconsistentScore {
            reason: format!(
                "{classified} reclassified streamlines exceed total_streamlines_count {total}"
            ),
        });
    }

    let total_f = total as f64;
    let mut updated = original.clone();
    updated.ib = invalid_bundles as u64;
    updated.vcwp = 0.0;
    updated.ic = reclassified_ic_count as f64 / total_f;
    updated.nc = nc_count as f64 / total_f;
    updated.algo_version = RECLASSIFICATION_ALGO_VERSION;

    let valid = (original.vc * total_f).round() as u64;
    if valid + classified != total {
        warn!(
            valid,
            classified,
            total,
            "VC count plus reclassified streamlines does not add up to the total"
        );
    }

    info!(
        ib = updated.ib,
        ic = updated.ic,
        nc = updated.nc,
        algo_version = updated.algo_version,
        "score record updated"
    );
    Ok(updated)
}
