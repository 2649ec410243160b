//! Submission inputs and output layout.
//!
//! A submission is identified by its IC container `<id>_IC.<ext>`; the NC
//! and VCWP containers sit beside it as `<id>_NC.<ext>` and
//! `<id>_VCWP.<ext>`. Outputs go under an existing directory as
//! `segmented/` (exports) and `scores/` (score records).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tractor_core::errors::{ExportError, IngestError, ScoreError};
use tractor_core::models::SourceLabel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPaths {
    pub id: String,
    pub ic: PathBuf,
    pub nc: PathBuf,
    pub vcwp: PathBuf,
}

impl SubmissionPaths {
    /// Derive the submission id and sibling containers from the IC path.
    pub fn from_ic_path(ic: &Path) -> Result<Self, IngestError> {
        let malformed = |message: &str| IngestError::Malformed {
            path: ic.display().to_string(),
            message: message.to_string(),
        };
        let file_name = ic
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| malformed("not a file path"))?;
        let ic_tag = SourceLabel::Ic.file_tag();
        let at = file_name
            .rfind(&ic_tag)
            .ok_or_else(|| malformed("IC container name must contain `_IC.`"))?;

        let id = &file_name[..at];
        let rest = &file_name[at + ic_tag.len()..];
        if id.is_empty() {
            return Err(malformed("empty submission id"));
        }
        let sibling = |label: SourceLabel| ic.with_file_name(format!("{id}{}{rest}", label.file_tag()));

        Ok(Self {
            id: id.to_string(),
            ic: ic.to_path_buf(),
            nc: sibling(SourceLabel::Nc),
            vcwp: sibling(SourceLabel::Vcwp),
        })
    }

    pub fn path(&self, label: SourceLabel) -> &Path {
        match label {
            SourceLabel::Ic => &self.ic,
            SourceLabel::Nc => &self.nc,
            SourceLabel::Vcwp => &self.vcwp,
        }
    }

    pub fn by_label(&self) -> HashMap<SourceLabel, PathBuf> {
        SourceLabel::ALL
            .into_iter()
            .map(|label| (label, self.path(label).to_path_buf()))
            .collect()
    }

    /// All three containers must exist.
    pub fn ensure_exist(&self) -> Result<(), IngestError> {
        for label in SourceLabel::ALL {
            let path = self.path(label);
            if !path.is_file() {
                return Err(IngestError::MissingInput {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub root: PathBuf,
    pub segmented: PathBuf,
    pub scores: PathBuf,
}

impl OutputLayout {
    /// Layout under `out_dir`, which must already exist. Nothing is created yet.
    pub fn new(out_dir: &Path) -> Result<Self, ExportError> {
        if !out_dir.is_dir() {
            return Err(ExportError::Io {
                path: out_dir.display().to_string(),
                message: "output directory does not exist".to_string(),
            });
        }
        Ok(Self {
            root: out_dir.to_path_buf(),
            segmented: out_dir.join("segmented"),
            scores: out_dir.join("scores"),
        })
    }

    /// `scores/<basename of input>`, which must differ from the input itself.
    pub fn score_path(&self, input: &Path) -> Result<PathBuf, ScoreError> {
        let name = input.file_name().ok_or_else(|| ScoreError::MissingInput {
            path: input.display().to_string(),
        })?;
        let output = self.scores.join(name);
        if same_file(&output, input) {
            return Err(ScoreError::OutputCollision {
                path: output.display().to_string(),
            });
        }
        Ok(output)
    }

    pub fn create_segmented(&self) -> Result<(), ExportError> {
        create_dir(&self.segmented)
    }

    pub fn create_scores(&self) -> Result<(), ExportError> {
        create_dir(&self.scores)
    }

    /// Scratch directory exports are written to before the score record.
    pub fn staging_dir(&self, submission_id: &str) -> PathBuf {
        self.root.join(format!(".staging-{submission_id}"))
    }

    /// An empty staging directory, replacing one left behind by an earlier run.
    pub fn create_staging(&self, submission_id: &str) -> Result<PathBuf, ExportError> {
        let dir = self.staging_dir(submission_id);
        if dir.is_dir() {
            remove_dir(&dir)?;
        }
        create_dir(&dir)?;
        Ok(dir)
    }

    /// Move staged files into `segmented/` and remove the staging directory.
    pub fn publish(&self, staging: &Path, staged: Vec<PathBuf>) -> Result<Vec<PathBuf>, ExportError> {
        self.create_segmented()?;
        let mut published = Vec::with_capacity(staged.len());
        for from in staged {
            let Some(name) = from.file_name() else {
                continue;
            };
            let to = self.segmented.join(name);
            std::fs::rename(&from, &to).map_err(|e| ExportError::Io {
                path: to.display().to_string(),
                message: e.to_string(),
            })?;
            published.push(to);
        }
        remove_dir(staging)?;
        Ok(published)
    }
}

fn create_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::create_dir_all(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn remove_dir(path: &Path) -> Result<(), ExportError> {
    std::fs::remove_dir_all(path).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siblings_follow_the_ic_name() {
        let paths = SubmissionPaths::from_ic_path(Path::new("/data/team_3_IC.json")).unwrap();
        assert_eq!(paths.id, "team_3");
        assert_eq!(paths.nc, Path::new("/data/team_3_NC.json"));
        assert_eq!(paths.vcwp, Path::new("/data/team_3_VCWP.json"));
    }

    #[test]
    fn last_ic_tag_wins() {
        let paths = SubmissionPaths::from_ic_path(Path::new("a_IC.b_IC.json")).unwrap();
        assert_eq!(paths.id, "a_IC.b");
        assert_eq!(paths.nc, Path::new("a_IC.b_NC.json"));
    }

    #[test]
    fn name_without_tag_is_rejected() {
        assert!(matches!(
            SubmissionPaths::from_ic_path(Path::new("/data/team_3.json")),
            Err(IngestError::Malformed { .. })
        ));
        assert!(SubmissionPaths::from_ic_path(Path::new("_IC.json")).is_err());
    }

    #[test]
    fn output_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(OutputLayout::new(&dir.path().join("missing")).is_err());
        let layout = OutputLayout::new(dir.path()).unwrap();
        assert_eq!(
            layout.score_path(Path::new("/in/s.json")).unwrap(),
            dir.path().join("scores/s.json")
        );
    }

    #[test]
    fn staged_files_move_into_segmented() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path()).unwrap();
        let staging = layout.create_staging("team").unwrap();
        std::fs::write(staging.join("stale.json"), "[]").unwrap();

        // A second call starts from an empty directory.
        let staging = layout.create_staging("team").unwrap();
        let staged = staging.join("team_NC.json");
        std::fs::write(&staged, "{}").unwrap();

        let published = layout.publish(&staging, vec![staged]).unwrap();
        assert_eq!(published, vec![layout.segmented.join("team_NC.json")]);
        assert!(published[0].is_file());
        assert!(!staging.exists());
        assert!(!layout.segmented.join("stale.json").exists());
    }

    #[test]
    fn score_path_cannot_be_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let layout = OutputLayout::new(dir.path()).unwrap();
        layout.create_scores().unwrap();
        let input = dir.path().join("scores/s.json");
        std::fs::write(&input, "{}").unwrap();
        assert!(matches!(
            layout.score_path(&input),
            Err(ScoreError::OutputCollision { .. })
        ));
    }
}
