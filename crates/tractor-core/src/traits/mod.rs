//! Seams to the external collaborators: curve containers, region masks and
//! the shape-clustering oracle.

pub mod clustering_oracle;
pub mod curve_source;
pub mod region_source;

pub use clustering_oracle::ClusteringOracle;
pub use curve_source::CurveSource;
pub use region_source::RegionSource;
