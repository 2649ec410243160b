//! Bundle exports: one RAS container per invalid bundle, named
//! `<submission>_<A>_<B>.json`, plus `<submission>_NC.json` for a non-empty
//! no-connection pool.

use std::path::{Path, PathBuf};

use tracing::info;

use tractor_core::errors::ExportError;
use tractor_reclassify::ReclassificationOutcome;

use crate::curve_container::CurveContainer;

pub fn export_outcome(
    outcome: &ReclassificationOutcome,
    submission_id: &str,
    dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(outcome.bundles.len() + 1);

    for bundle in &outcome.bundles {
        let path = dir.join(format!("{submission_id}_{}.json", bundle.pair));
        CurveContainer::from_curves(outcome.bundle_curves(bundle)).write(&path)?;
        info!(
            path = %path.display(),
            pair = %bundle.pair,
            streamlines = bundle.streamline_count(),
            "bundle exported"
        );
        written.push(path);
    }

    if !outcome.nc_pool.is_empty() {
        let path = dir.join(format!("{submission_id}_NC.json"));
        CurveContainer::from_curves(outcome.nc_curves()).write(&path)?;
        info!(path = %path.display(), streamlines = outcome.nc_count(), "no-connection pool exported");
        written.push(path);
    }

    Ok(written)
}
