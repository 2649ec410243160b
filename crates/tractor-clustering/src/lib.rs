//! # tractor-clustering
//!
//! Shape clustering of streamlines behind the `ClusteringOracle` seam.
//! QuickBundles: curves are resampled to a fixed number of equidistant
//! points and greedily assigned to the nearest bundle centroid under the
//! minimum average direct-flip (MDF) distance.

pub mod distance;
pub mod quickbundles;
pub mod resample;

pub use distance::{direct_flip_distances, mdf};
pub use quickbundles::QuickBundles;
pub use resample::resample;
