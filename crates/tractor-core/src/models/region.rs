use serde::{Deserialize, Serialize};

use crate::geometry::Point3;

/// A named anatomical region, as the set of its non-zero mask voxels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    name: String,
    voxels: Vec<Point3>,
}

impl Region {
    pub fn new(name: impl Into<String>, voxels: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            voxels,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn voxels(&self) -> &[Point3] {
        &self.voxels
    }

    pub fn into_parts(self) -> (String, Vec<Point3>) {
        (self.name, self.voxels)
    }
}
