//! Geometry primitives: points, curve arclength and nearest-voxel lookup.

pub mod point;
pub mod voxel_index;

pub use point::{arclength, distance, distance_sq, Point3};
pub use voxel_index::VoxelIndex;
