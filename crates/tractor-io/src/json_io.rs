//! JSON file reading shared by containers, masks and score records.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use tractor_core::errors::{IngestError, ScoreError};

/// Why a JSON file could not be read. Callers convert this into their own
/// error type with `?`.
#[derive(Debug)]
pub(crate) enum JsonReadError {
    Missing { path: String },
    Io { path: String, message: String },
    Malformed { path: String, message: String },
}

impl From<JsonReadError> for IngestError {
    fn from(err: JsonReadError) -> Self {
        match err {
            JsonReadError::Missing { path } => IngestError::MissingInput { path },
            JsonReadError::Io { path, message } => IngestError::Io { path, message },
            JsonReadError::Malformed { path, message } => IngestError::Malformed { path, message },
        }
    }
}

impl From<JsonReadError> for ScoreError {
    fn from(err: JsonReadError) -> Self {
        match err {
            JsonReadError::Missing { path } => ScoreError::MissingInput { path },
            JsonReadError::Io { path, message } => ScoreError::Io { path, message },
            // A record that does not parse is an inconsistent record.
            JsonReadError::Malformed { path, message } => ScoreError::InconsistentScore {
                reason: format!("{path}: {message}"),
            },
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, JsonReadError> {
    if !path.is_file() {
        return Err(JsonReadError::Missing {
            path: path.display().to_string(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| JsonReadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| JsonReadError::Malformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Every `*.json` file directly under `dir`, sorted by path.
///
/// The directory part is escaped so names like `run[1]` are matched
/// literally.
pub(crate) fn json_files(dir: &Path) -> Result<Vec<PathBuf>, JsonReadError> {
    if !dir.is_dir() {
        return Err(JsonReadError::Missing {
            path: dir.display().to_string(),
        });
    }
    let pattern = format!("{}/*.json", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob::glob(&pattern).map_err(|e| JsonReadError::Io {
        path: pattern.clone(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| JsonReadError::Io {
            path: e.path().display().to_string(),
            message: e.to_string(),
        })?;
        paths.push(path);
    }
    paths.sort();
    Ok(paths)
}
