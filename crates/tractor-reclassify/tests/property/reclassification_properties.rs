//! Property tests for the reclassification engine.
//!
//! Random tractograms run through the real QuickBundles oracle against a
//! fixed three-region layout.

use proptest::prelude::*;

use tractor_clustering::QuickBundles;
use tractor_core::config::ReclassificationParams;
use tractor_core::geometry::Point3;
use tractor_core::models::{Curve, Region, RegionPair, ScoreRecord, SourceLabel};
use tractor_reclassify::score::apply_counts;
use tractor_reclassify::{majority_vote, ReclassificationEngine, RegionResolver};

fn resolver() -> RegionResolver {
    RegionResolver::new(vec![
        Region::new("A", vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]),
        Region::new("B", vec![[60.0, 0.0, 0.0], [61.0, 0.0, 0.0]]),
        Region::new("C", vec![[30.0, 50.0, 0.0], [30.0, 51.0, 0.0]]),
    ])
    .unwrap()
}

fn point() -> impl Strategy<Value = Point3> {
    (0.0f32..64.0, 0.0f32..56.0, -4.0f32..4.0).prop_map(|(x, y, z)| [x, y, z])
}

fn label() -> impl Strategy<Value = SourceLabel> {
    prop_oneof![
        Just(SourceLabel::Ic),
        Just(SourceLabel::Nc),
        Just(SourceLabel::Vcwp)
    ]
}

fn tractogram() -> impl Strategy<Value = Vec<Curve>> {
    prop::collection::vec((label(), prop::collection::vec(point(), 0..8)), 0..40).prop_map(
        |raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (label, points))| Curve::new(points, label, i))
                .collect()
        },
    )
}

fn record(total: u64) -> ScoreRecord {
    ScoreRecord::from_json(&format!(
        r#"{{"VB": 5, "IB": 12, "VC": 0.25, "IC": 0.25, "VCWP": 0.25, "NC": 0.25,
            "total_streamlines_count": {total}, "algo_version": 4}}"#
    ))
    .unwrap()
}

/// A total plus IC and NC counts that together stay within it.
fn counts() -> impl Strategy<Value = (u64, usize, usize)> {
    (1u64..100_000).prop_flat_map(|total| {
        (0..=total).prop_flat_map(move |ic| (Just(total), Just(ic as usize), 0..=(total - ic) as usize))
    })
}

fn run(curves: Vec<Curve>, seed: u64) -> tractor_reclassify::ReclassificationOutcome {
    let params = ReclassificationParams {
        shuffle_seed: seed,
        ..ReclassificationParams::default()
    };
    let oracle = QuickBundles::new();
    ReclassificationEngine::new(params, &oracle)
        .run_curves(curves, &resolver())
        .unwrap()
        .data
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn curves_are_conserved(curves in tractogram(), seed in any::<u64>()) {
        let n = curves.len();
        let outcome = run(curves, seed);

        let mut placed: Vec<usize> = outcome
            .bundles
            .iter()
            .flat_map(|b| b.members.iter().copied())
            .chain(outcome.nc_pool.iter().copied())
            .collect();
        placed.sort_unstable();
        prop_assert_eq!(placed, (0..n).collect::<Vec<_>>());
        prop_assert_eq!(outcome.reclassified_ic_count + outcome.nc_count(), n);
        prop_assert_eq!(outcome.candidate_count + outcome.short_count, n);
    }

    #[test]
    fn runs_are_deterministic(curves in tractogram(), seed in any::<u64>()) {
        let a = run(curves.clone(), seed);
        let b = run(curves, seed);
        prop_assert_eq!(&a.nc_pool, &b.nc_pool);
        prop_assert_eq!(a.bundles.len(), b.bundles.len());
        for (x, y) in a.bundles.iter().zip(&b.bundles) {
            prop_assert!(x.pair.same_orientation(&y.pair));
            prop_assert_eq!(&x.members, &y.members);
        }
    }

    #[test]
    fn bundle_pairs_are_unique_up_to_flip(curves in tractogram(), seed in any::<u64>()) {
        let outcome = run(curves, seed);
        for (i, x) in outcome.bundles.iter().enumerate() {
            prop_assert_ne!(x.pair.first(), x.pair.second());
            for y in &outcome.bundles[i + 1..] {
                prop_assert_ne!(&x.pair, &y.pair);
                prop_assert_ne!(&x.pair, &y.pair.flipped());
            }
        }
    }

    #[test]
    fn singleton_groups_never_form_bundles(curves in tractogram(), seed in any::<u64>()) {
        let outcome = run(curves, seed);
        for bundle in &outcome.bundles {
            prop_assert!(bundle.streamline_count() >= 2);
        }
        let singletons = outcome.groups.iter().filter(|g| g.is_singleton()).count();
        prop_assert_eq!(outcome.nc_count(), outcome.short_count + singletons);
    }

    #[test]
    fn only_short_curves_and_singletons_reach_nc(curves in tractogram(), seed in any::<u64>()) {
        let outcome = run(curves, seed);
        let threshold = ReclassificationParams::default().length_threshold;
        let (short, demoted) = outcome.nc_pool.split_at(outcome.short_count);
        for &i in short {
            prop_assert!(outcome.curves[i].arclength() < threshold);
        }
        for &i in demoted {
            prop_assert!(outcome.curves[i].arclength() >= threshold);
        }
    }

    #[test]
    fn updated_fractions_stay_in_bounds((total, ic, nc) in counts(), bundles in 0usize..500) {
        let updated = apply_counts(&record(total), bundles, ic, nc).unwrap();
        prop_assert!((0.0..=1.0).contains(&updated.ic));
        prop_assert!((0.0..=1.0).contains(&updated.nc));
        let t = total as f64;
        prop_assert!(updated.ic * t + updated.nc * t <= t + 1e-6);
        prop_assert_eq!(updated.vcwp, 0.0);
        prop_assert_eq!(updated.ib, bundles as u64);
    }

    #[test]
    fn vote_ignores_orientation(flips in prop::collection::vec(any::<bool>(), 1..12)) {
        let pairs: Vec<RegionPair> = flips
            .iter()
            .map(|&f| if f { RegionPair::new("B", "A") } else { RegionPair::new("A", "B") })
            .collect();
        let vote = majority_vote(&pairs).unwrap();
        prop_assert_eq!(vote.votes, pairs.len());
        prop_assert!(!vote.is_tie());
        prop_assert!(vote.winner.same_orientation(&pairs[0]));
    }
}
