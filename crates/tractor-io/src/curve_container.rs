//! JSON curve containers.
//!
//! ```json
//! { "orientation": "LPS", "streamlines": [[[x, y, z], ...], ...] }
//! ```
//!
//! Coordinates are voxel indices of the reference volume. `orientation`
//! defaults to RAS when absent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use tractor_core::errors::{ExportError, IngestError};
use tractor_core::geometry::Point3;
use tractor_core::models::{Curve, Orientation, SourceLabel};
use tractor_core::traits::CurveSource;

use crate::json_io::read_json;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveContainer {
    #[serde(default)]
    pub orientation: Orientation,
    pub streamlines: Vec<Vec<Point3>>,
}

impl CurveContainer {
    /// RAS container holding the points of `curves`.
    pub fn from_curves<'a>(curves: impl IntoIterator<Item = &'a Curve>) -> Self {
        Self {
            orientation: Orientation::Ras,
            streamlines: curves.into_iter().map(|c| c.points().to_vec()).collect(),
        }
    }

    pub fn read(path: &Path) -> Result<Self, IngestError> {
        Ok(read_json(path)?)
    }

    pub fn write(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string(self).map_err(|e| ExportError::Serialize {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, json).map_err(|e| ExportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// The streamlines in RAS voxel space of a volume with `dimensions`.
    pub fn into_ras(self, dimensions: [usize; 3]) -> Vec<Vec<Point3>> {
        let orientation = self.orientation;
        if orientation == Orientation::Ras {
            return self.streamlines;
        }
        self.streamlines
            .into_iter()
            .map(|s| s.into_iter().map(|p| orientation.to_ras(p, dimensions)).collect())
            .collect()
    }
}

/// `CurveSource` over one container file per label.
pub struct ContainerSource {
    paths: HashMap<SourceLabel, PathBuf>,
    dimensions: [usize; 3],
}

impl ContainerSource {
    pub fn new(paths: HashMap<SourceLabel, PathBuf>, dimensions: [usize; 3]) -> Self {
        Self { paths, dimensions }
    }
}

impl CurveSource for ContainerSource {
    fn load(&self, label: SourceLabel) -> Result<Vec<Vec<Point3>>, IngestError> {
        let path = self
            .paths
            .get(&label)
            .ok_or_else(|| IngestError::MissingInput {
                path: format!("<{label} container>"),
            })?;
        let container = CurveContainer::read(path)?;
        debug!(
            path = %path.display(),
            orientation = %container.orientation,
            streamlines = container.streamlines.len(),
            "read curve container"
        );
        Ok(container.into_ras(self.dimensions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_defaults_to_ras() {
        let container: CurveContainer =
            serde_json::from_str(r#"{"streamlines": [[[1, 2, 3], [4, 5, 6]]]}"#).unwrap();
        assert_eq!(container.orientation, Orientation::Ras);
        assert_eq!(container.streamlines[0][1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn lps_is_flipped_on_load() {
        let container = CurveContainer {
            orientation: Orientation::Lps,
            streamlines: vec![vec![[0.0, 0.0, 2.0], [9.0, 19.0, 2.0]]],
        };
        let ras = container.into_ras([10, 20, 5]);
        assert_eq!(ras, vec![vec![[9.0, 19.0, 2.0], [0.0, 0.0, 2.0]]]);
    }

    #[test]
    fn unknown_label_is_missing_input() {
        let source = ContainerSource::new(HashMap::new(), [1, 1, 1]);
        assert!(matches!(
            source.load(SourceLabel::Nc),
            Err(IngestError::MissingInput { .. })
        ));
    }
}
