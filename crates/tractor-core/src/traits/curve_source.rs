use crate::errors::IngestError;
use crate::geometry::Point3;
use crate::models::SourceLabel;

/// Supplies the pre-labeled curve collections, in RAS voxel space.
pub trait CurveSource {
    /// Load every curve of the collection tagged `label`.
    /// Fails with `IngestError::MissingInput` when the container cannot be located.
    fn load(&self, label: SourceLabel) -> Result<Vec<Vec<Point3>>, IngestError>;
}
