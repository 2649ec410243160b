//! Algorithm-version consistency across a directory of score records.
//!
//! Reports are only comparable when every record was produced by the same
//! reclassification algorithm version.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use tractor_core::errors::ScoreError;

use crate::json_io::json_files;
use crate::score_store::read_score;

/// The shared `algo_version` of every `*.json` score record in `dir`.
pub fn check_versions(dir: &Path) -> Result<u32, ScoreError> {
    let mut by_version: BTreeMap<u32, Vec<PathBuf>> = BTreeMap::new();
    for path in json_files(dir)? {
        let record = read_score(&path)?;
        debug!(path = %path.display(), algo_version = record.algo_version, "read score record");
        by_version.entry(record.algo_version).or_default().push(path);
    }

    let mut versions = by_version.keys().copied();
    match (versions.next(), versions.next()) {
        (None, _) => Err(ScoreError::InconsistentScore {
            reason: format!("no score records in {}", dir.display()),
        }),
        (Some(version), None) => {
            info!(
                dir = %dir.display(),
                algo_version = version,
                records = by_version[&version].len(),
                "score records share one algorithm version"
            );
            Ok(version)
        }
        _ => {
            let summary: Vec<String> = by_version
                .iter()
                .map(|(v, paths)| format!("v{v}: {} file(s)", paths.len()))
                .collect();
            Err(ScoreError::InconsistentScore {
                reason: format!("mixed algo_version values ({})", summary.join(", ")),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(version: u32) -> String {
        format!(
            r#"{{"VB": 1, "IB": 2, "VC": 0.5, "IC": 0.25, "VCWP": 0.0, "NC": 0.25,
                "total_streamlines_count": 4, "algo_version": {version}}}"#
        )
    }

    #[test]
    fn shared_version_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), record(5)).unwrap();
        std::fs::write(dir.path().join("b.json"), record(5)).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        assert_eq!(check_versions(dir.path()).unwrap(), 5);
    }

    #[test]
    fn mixed_versions_fail() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), record(4)).unwrap();
        std::fs::write(dir.path().join("b.json"), record(5)).unwrap();
        let err = check_versions(dir.path()).unwrap_err();
        assert!(err.to_string().contains("mixed algo_version"));
    }

    #[test]
    fn bracketed_directory_is_matched_literally() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("scores[v5]");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("a.json"), record(5)).unwrap();
        std::fs::write(dir.join("b.json"), record(5)).unwrap();
        assert_eq!(check_versions(&dir).unwrap(), 5);
    }

    #[test]
    fn missing_directory_is_missing_input() {
        let root = tempfile::tempdir().unwrap();
        assert!(matches!(
            check_versions(&root.path().join("absent")),
            Err(ScoreError::MissingInput { .. })
        ));
    }

    #[test]
    fn empty_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            check_versions(dir.path()),
            Err(ScoreError::InconsistentScore { .. })
        ));
    }
}
