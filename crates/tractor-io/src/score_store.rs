//! Score record files.

use std::path::Path;

use tracing::info;

use tractor_core::errors::ScoreError;
use tractor_core::models::ScoreRecord;

use crate::json_io::read_json;

/// Read a score record. A file that does not parse is an inconsistent record.
pub fn read_score(path: &Path) -> Result<ScoreRecord, ScoreError> {
    Ok(read_json(path)?)
}

/// Fails with `OutputExists` when `path` exists and `force` is off.
pub fn check_writable(path: &Path, force: bool) -> Result<(), ScoreError> {
    if path.exists() && !force {
        return Err(ScoreError::OutputExists {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

pub fn write_score(path: &Path, record: &ScoreRecord, force: bool) -> Result<(), ScoreError> {
    check_writable(path, force)?;
    let json = record.to_json()?;
    std::fs::write(path, json).map_err(|e| ScoreError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    info!(path = %path.display(), algo_version = record.algo_version, "score record written");
    Ok(())
}
