//! Region-proximity resolver.
//!
//! A curve's region pair depends only on its geometry: the distance from
//! its head and tail to the nearest voxel of every region. The chosen pair
//! is the ordered pair of distinct regions `(i, j)` minimizing
//! `d_head(i) + d_tail(j)`, reported as `(head region, tail region)`.
//! Regions are ordered by name; on equal cost the first `(i, j)` in that
//! order wins.

use std::collections::HashSet;

use tracing::info;

use tractor_core::errors::RegionError;
use tractor_core::geometry::{Point3, VoxelIndex};
use tractor_core::models::{Curve, Region, RegionPair};

pub struct RegionResolver {
    names: Vec<String>,
    indices: Vec<VoxelIndex>,
}

impl RegionResolver {
    /// Index every region. Needs at least two regions, none of them empty,
    /// with distinct names.
    pub fn new(mut regions: Vec<Region>) -> Result<Self, RegionError> {
        if regions.len() < 2 {
            return Err(RegionError::NotEnoughRegions {
                found: regions.len(),
            });
        }
        regions.sort_by(|a, b| a.name().cmp(b.name()));

        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(regions.len());
        let mut indices = Vec::with_capacity(regions.len());
        for region in regions {
            if !seen.insert(region.name().to_string()) {
                return Err(RegionError::DuplicateRegion {
                    name: region.name().to_string(),
                });
            }
            if region.voxels().is_empty() {
                return Err(RegionError::EmptyRegion {
                    name: region.name().to_string(),
                });
            }
            let (name, voxels) = region.into_parts();
            names.push(name);
            indices.push(VoxelIndex::build(voxels));
        }

        info!(regions = names.len(), "region index built");
        Ok(Self { names, indices })
    }

    /// Region names in resolution order.
    pub fn region_names(&self) -> &[String] {
        &self.names
    }

    /// The closest region pair for one curve.
    pub fn closest_pair(&self, curve: &Curve) -> RegionPair {
        let head = self.distances(curve.head());
        let tail = self.distances(curve.tail());

        let mut best = (0usize, 1usize);
        let mut best_cost = f32::INFINITY;
        for (i, dh) in head.iter().enumerate() {
            for (j, dt) in tail.iter().enumerate() {
                if i == j {
                    continue;
                }
                let cost = dh + dt;
                if cost < best_cost {
                    best_cost = cost;
                    best = (i, j);
                }
            }
        }

        RegionPair::new(self.names[best.0].clone(), self.names[best.1].clone())
    }

    /// Distance from `point` to every region; infinite when there is no point.
    fn distances(&self, point: Option<&Point3>) -> Vec<f32> {
        self.indices
            .iter()
            .map(|idx| {
                point
                    .and_then(|p| idx.nearest_distance(p))
                    .unwrap_or(f32::INFINITY)
            })
            .collect()
    }

    /// Resolve every curve, in order.
    pub fn resolve_all(&self, curves: &[Curve]) -> Vec<RegionPair> {
        curves.iter().map(|c| self.closest_pair(c)).collect()
    }
}
