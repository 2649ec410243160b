use crate::errors::IngestError;
use crate::models::Region;

/// Supplies the anatomical regions.
pub trait RegionSource {
    /// Load every region, in a stable order (by name).
    fn load_regions(&self) -> Result<Vec<Region>, IngestError>;
}
