//! Region mask directory.
//!
//! Layout under a base directory:
//! - `masks/rois/<name>.json`: list of `[i, j, k]` voxels belonging to the region
//! - `masks/wm.json`: reference volume header, `{ "dimensions": [nx, ny, nz] }`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use tractor_core::errors::IngestError;
use tractor_core::models::Region;
use tractor_core::traits::RegionSource;

use crate::json_io::{json_files, read_json};

const ROI_DIR: &str = "masks/rois";
const REFERENCE_FILE: &str = "masks/wm.json";

/// Header of the reference volume all masks and curves are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReferenceVolume {
    pub dimensions: [usize; 3],
}

impl ReferenceVolume {
    pub fn load(base_dir: &Path) -> Result<Self, IngestError> {
        let path = base_dir.join(REFERENCE_FILE);
        let volume: Self = read_json(&path)?;
        if volume.dimensions.contains(&0) {
            return Err(IngestError::Malformed {
                path: path.display().to_string(),
                message: format!("zero-sized dimensions {:?}", volume.dimensions),
            });
        }
        Ok(volume)
    }
}

/// `RegionSource` over `<base>/masks/rois/*.json`.
pub struct MaskDirectory {
    roi_dir: PathBuf,
}

impl MaskDirectory {
    pub fn new(base_dir: &Path) -> Self {
        Self {
            roi_dir: base_dir.join(ROI_DIR),
        }
    }
}

impl RegionSource for MaskDirectory {
    fn load_regions(&self) -> Result<Vec<Region>, IngestError> {
        let mut regions = Vec::new();
        for path in json_files(&self.roi_dir)? {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let voxels: Vec<[u32; 3]> = read_json(&path)?;
            debug!(region = %name, voxels = voxels.len(), "read region mask");
            regions.push(Region::new(
                name,
                voxels
                    .into_iter()
                    .map(|[i, j, k]| [i as f32, j as f32, k as f32])
                    .collect(),
            ));
        }
        info!(dir = %self.roi_dir.display(), regions = regions.len(), "loaded region masks");
        Ok(regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_masks_from_bracketed_base_directory() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("subject[01]");
        let rois = base.join(ROI_DIR);
        std::fs::create_dir_all(&rois).unwrap();
        std::fs::write(rois.join("CST_left.json"), "[[1, 2, 3], [1, 2, 4]]").unwrap();
        std::fs::write(rois.join("AF_right.json"), "[[9, 9, 9]]").unwrap();

        let regions = MaskDirectory::new(&base).load_regions().unwrap();
        let names: Vec<&str> = regions.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["AF_right", "CST_left"]);
        assert_eq!(regions[1].voxels().len(), 2);
    }

    #[test]
    fn missing_roi_directory_is_missing_input() {
        let root = tempfile::tempdir().unwrap();
        assert!(matches!(
            MaskDirectory::new(root.path()).load_regions(),
            Err(IngestError::MissingInput { .. })
        ));
    }
}
