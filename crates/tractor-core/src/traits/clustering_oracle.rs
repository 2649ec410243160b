use crate::errors::ClusteringError;
use crate::models::{ClusterGroup, Curve};

/// Shape-clustering capability, treated as a black box by the engine.
///
/// Implementations must return groups that partition `0..curves.len()`:
/// every index appears in exactly one group and no group is empty.
/// The result may depend on input order but must be deterministic for a
/// given order and parameter set.
pub trait ClusteringOracle {
    fn cluster(
        &self,
        curves: &[Curve],
        distance_threshold: f32,
        resample_points: usize,
    ) -> Result<Vec<ClusterGroup>, ClusteringError>;

    /// Human-readable oracle name.
    fn name(&self) -> &str;
}
