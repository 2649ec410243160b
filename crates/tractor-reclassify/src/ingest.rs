//! Curve ingestion and length filtering.

use tracing::info;

use tractor_core::errors::IngestError;
use tractor_core::models::{Curve, SourceLabel};
use tractor_core::traits::CurveSource;

/// Curves split by the length threshold. Nothing is dropped.
#[derive(Debug, Clone, Default)]
pub struct LengthPartition {
    /// Arclength at or above the threshold.
    pub candidates: Vec<Curve>,
    /// Arclength below the threshold.
    pub short: Vec<Curve>,
}

/// Load the IC, NC and VCWP collections, in that order, assigning origin
/// indices over the merged sequence.
pub fn load_curves(source: &dyn CurveSource) -> Result<Vec<Curve>, IngestError> {
    let mut curves = Vec::new();
    for label in SourceLabel::ALL {
        let collection = source.load(label)?;
        info!(label = %label, count = collection.len(), "loaded curve collection");
        for points in collection {
            let origin_index = curves.len();
            curves.push(Curve::new(points, label, origin_index));
        }
    }
    Ok(curves)
}

/// Split curves into candidates (arclength ≥ `threshold`) and short curves,
/// preserving relative order within each side. Empty curves are always short.
pub fn partition_by_length(curves: Vec<Curve>, threshold: f32) -> LengthPartition {
    let (candidates, short): (Vec<Curve>, Vec<Curve>) = curves
        .into_iter()
        .partition(|c| !c.is_empty() && c.arclength() >= threshold);
    LengthPartition { candidates, short }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tractor_core::geometry::Point3;

    struct FixedSource;

    impl CurveSource for FixedSource {
        fn load(&self, label: SourceLabel) -> Result<Vec<Vec<Point3>>, IngestError> {
            Ok(match label {
                SourceLabel::Ic => vec![vec![[0.0; 3], [40.0, 0.0, 0.0]]],
                SourceLabel::Nc => vec![vec![[0.0; 3], [10.0, 0.0, 0.0]]],
                SourceLabel::Vcwp => vec![
                    vec![[0.0; 3], [35.0, 0.0, 0.0]],
                    vec![[1.0, 1.0, 1.0]],
                ],
            })
        }
    }

    #[test]
    fn origin_indices_follow_label_order() {
        let curves = load_curves(&FixedSource).unwrap();
        let labels: Vec<_> = curves.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![SourceLabel::Ic, SourceLabel::Nc, SourceLabel::Vcwp, SourceLabel::Vcwp]
        );
        assert!(curves.iter().enumerate().all(|(i, c)| c.origin_index() == i));
    }

    #[test]
    fn threshold_is_inclusive() {
        let curves = load_curves(&FixedSource).unwrap();
        let partition = partition_by_length(curves, 35.0);
        let candidates: Vec<_> = partition.candidates.iter().map(|c| c.origin_index()).collect();
        let short: Vec<_> = partition.short.iter().map(|c| c.origin_index()).collect();
        assert_eq!(candidates, vec![0, 2]);
        assert_eq!(short, vec![1, 3]);
    }

    struct GappySource;

    impl CurveSource for GappySource {
        fn load(&self, label: SourceLabel) -> Result<Vec<Vec<Point3>>, IngestError> {
            Ok(match label {
                SourceLabel::Nc => vec![vec![], vec![[0.0; 3], [1.0, 0.0, 0.0]]],
                _ => vec![],
            })
        }
    }

    #[test]
    fn empty_streamline_is_kept_as_short() {
        let curves = load_curves(&GappySource).unwrap();
        assert_eq!(curves.len(), 2);
        assert!(curves[0].is_empty());

        let partition = partition_by_length(curves, 0.0);
        let short: Vec<_> = partition.short.iter().map(|c| c.origin_index()).collect();
        let candidates: Vec<_> = partition.candidates.iter().map(|c| c.origin_index()).collect();
        assert_eq!(short, vec![0]);
        assert_eq!(candidates, vec![1]);
    }

    struct MissingSource;

    impl CurveSource for MissingSource {
        fn load(&self, label: SourceLabel) -> Result<Vec<Vec<Point3>>, IngestError> {
            match label {
                SourceLabel::Vcwp => Err(IngestError::MissingInput {
                    path: "sub_VCWP.json".into(),
                }),
                _ => Ok(vec![]),
            }
        }
    }

    #[test]
    fn missing_container_fails() {
        assert!(matches!(
            load_curves(&MissingSource),
            Err(IngestError::MissingInput { .. })
        ));
    }
}
