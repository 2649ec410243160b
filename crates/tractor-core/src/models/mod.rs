pub mod cluster_group;
pub mod curve;
pub mod invalid_bundle;
pub mod orientation;
pub mod region;
pub mod region_pair;
pub mod score_record;
pub mod source_label;

pub use cluster_group::ClusterGroup;
pub use curve::Curve;
pub use invalid_bundle::InvalidBundle;
pub use orientation::Orientation;
pub use region::Region;
pub use region_pair::RegionPair;
pub use score_record::ScoreRecord;
pub use source_label::SourceLabel;
