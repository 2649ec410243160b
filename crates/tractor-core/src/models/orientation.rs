//! Declared coordinate orientation of a curve container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::Point3;

/// Axis orientation of voxel coordinates. Region masks and the engine work
/// in RAS voxel space; LPS containers are flipped on the first two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    #[default]
    Ras,
    Lps,
}

impl Orientation {
    /// Convert a point expressed in this orientation into RAS voxel space
    /// of a reference volume with the given dimensions.
    pub fn to_ras(&self, point: Point3, dimensions: [usize; 3]) -> Point3 {
        match self {
            Self::Ras => point,
            Self::Lps => [
                (dimensions[0] as f32 - 1.0) - point[0],
                (dimensions[1] as f32 - 1.0) - point[1],
                point[2],
            ],
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ras => f.write_str("RAS"),
            Self::Lps => f.write_str("LPS"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RAS" => Ok(Self::Ras),
            "LPS" => Ok(Self::Lps),
            other => Err(format!("unknown orientation: {other}")),
        }
    }
}
