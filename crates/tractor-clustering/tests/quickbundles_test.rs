//! Tests for the QuickBundles oracle.

use proptest::prelude::*;

use tractor_clustering::QuickBundles;
use tractor_core::errors::ClusteringError;
use tractor_core::geometry::Point3;
use tractor_core::models::{Curve, SourceLabel};
use tractor_core::traits::ClusteringOracle;

fn line(from: Point3, to: Point3, samples: usize) -> Vec<Point3> {
    (0..samples)
        .map(|i| {
            let t = i as f32 / (samples - 1) as f32;
            [
                from[0] + (to[0] - from[0]) * t,
                from[1] + (to[1] - from[1]) * t,
                from[2] + (to[2] - from[2]) * t,
            ]
        })
        .collect()
}

fn curves(lines: Vec<Vec<Point3>>) -> Vec<Curve> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, pts)| Curve::new(pts, SourceLabel::Ic, i))
        .collect()
}

#[test]
fn test_separates_distant_bundles() {
    let input = curves(vec![
        line([0.0, 0.0, 0.0], [60.0, 0.0, 0.0], 30),
        line([0.0, 100.0, 0.0], [60.0, 100.0, 0.0], 25),
        line([0.0, 1.0, 0.0], [60.0, 1.0, 0.0], 40),
        line([0.0, 101.0, 0.0], [60.0, 101.0, 0.0], 20),
    ]);
    let groups = QuickBundles::new().cluster(&input, 20.0, 12).unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].indices, vec![0, 2]);
    assert_eq!(groups[1].indices, vec![1, 3]);
    assert_eq!(groups[0].id, 0);
    assert_eq!(groups[1].id, 1);
}

#[test]
fn test_reversed_curve_joins_same_bundle() {
    let forward = line([0.0, 0.0, 0.0], [50.0, 0.0, 0.0], 20);
    let mut backward = line([0.0, 2.0, 0.0], [50.0, 2.0, 0.0], 20);
    backward.reverse();
    let groups = QuickBundles::new()
        .cluster(&curves(vec![forward, backward]), 20.0, 12)
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].indices, vec![0, 1]);
}

#[test]
fn test_empty_input_gives_no_groups() {
    let groups = QuickBundles::new().cluster(&[], 20.0, 12).unwrap();
    assert!(groups.is_empty());
}

#[test]
fn test_rejects_bad_parameters() {
    let input = curves(vec![line([0.0; 3], [40.0, 0.0, 0.0], 5)]);
    assert!(matches!(
        QuickBundles::new().cluster(&input, 0.0, 12),
        Err(ClusteringError::InvalidParameters { .. })
    ));
    assert!(matches!(
        QuickBundles::new().cluster(&input, 20.0, 1),
        Err(ClusteringError::InvalidParameters { .. })
    ));
}

proptest! {
    #[test]
    fn prop_groups_partition_input(
        offsets in prop::collection::vec((0.0f32..80.0, 0.0f32..80.0, 0.0f32..80.0), 0..40),
    ) {
        let lines: Vec<Vec<Point3>> = offsets
            .iter()
            .map(|&(x, y, z)| line([x, y, z], [x + 40.0, y + 10.0, z], 8))
            .collect();
        let input = curves(lines);
        let groups = QuickBundles::new().cluster(&input, 20.0, 12).unwrap();

        let mut seen: Vec<usize> = groups.iter().flat_map(|g| g.indices.clone()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());
        prop_assert!(groups.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn prop_deterministic_for_fixed_order(
        offsets in prop::collection::vec((0.0f32..80.0, 0.0f32..80.0), 1..30),
    ) {
        let lines: Vec<Vec<Point3>> = offsets
            .iter()
            .map(|&(x, y)| line([x, y, 0.0], [x + 45.0, y, 5.0], 10))
            .collect();
        let input = curves(lines);
        let a = QuickBundles::new().cluster(&input, 20.0, 12).unwrap();
        let b = QuickBundles::new().cluster(&input, 20.0, 12).unwrap();
        prop_assert_eq!(a, b);
    }
}
