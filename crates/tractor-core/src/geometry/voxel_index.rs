//! Nearest-voxel lookup over a region mask, backed by an R*-tree.

use rstar::{PointDistance, RTree};

use super::point::Point3;

#[derive(Debug, Clone)]
pub struct VoxelIndex {
    tree: RTree<Point3>,
}

impl VoxelIndex {
    pub fn build(voxels: Vec<Point3>) -> Self {
        Self {
            tree: RTree::bulk_load(voxels),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Euclidean distance from `query` to the nearest voxel.
    /// `None` when the index is empty.
    pub fn nearest_distance(&self, query: &Point3) -> Option<f32> {
        self.tree
            .nearest_neighbor(query)
            .map(|nearest| nearest.distance_2(query).sqrt())
    }
}
