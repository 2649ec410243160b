//! QuickBundles: single-pass greedy centroid clustering.
//!
//! Curves are visited in input order. Each one joins the bundle whose
//! centroid is closest under MDF if that distance is strictly below the
//! threshold, otherwise it starts a new bundle. A curve that matches a
//! centroid better when flipped is added flipped, so centroids stay aligned.
//! The output depends on input order, which is why the engine shuffles
//! candidates with a fixed seed first.

use tracing::debug;

use tractor_core::config::defaults::MIN_RESAMPLE_POINTS;
use tractor_core::errors::ClusteringError;
use tractor_core::geometry::Point3;
use tractor_core::models::{ClusterGroup, Curve};
use tractor_core::traits::ClusteringOracle;

use crate::distance::direct_flip_distances;
use crate::resample::resample;

const ORACLE_NAME: &str = "quickbundles";

/// QuickBundles clustering oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickBundles;

impl QuickBundles {
    pub fn new() -> Self {
        Self
    }
}

/// A bundle under construction: running point-wise sum and its centroid.
struct Bundle {
    sum: Vec<[f64; 3]>,
    centroid: Vec<Point3>,
    indices: Vec<usize>,
}

impl Bundle {
    fn seed(index: usize, curve: &[Point3]) -> Self {
        Self {
            sum: curve
                .iter()
                .map(|p| [f64::from(p[0]), f64::from(p[1]), f64::from(p[2])])
                .collect(),
            centroid: curve.to_vec(),
            indices: vec![index],
        }
    }

    fn add(&mut self, index: usize, curve: &[Point3], flip: bool) {
        let n = curve.len();
        for (i, acc) in self.sum.iter_mut().enumerate() {
            let p = if flip { curve[n - 1 - i] } else { curve[i] };
            acc[0] += f64::from(p[0]);
            acc[1] += f64::from(p[1]);
            acc[2] += f64::from(p[2]);
        }
        self.indices.push(index);

        let count = self.indices.len() as f64;
        for (c, acc) in self.centroid.iter_mut().zip(&self.sum) {
            *c = [
                (acc[0] / count) as f32,
                (acc[1] / count) as f32,
                (acc[2] / count) as f32,
            ];
        }
    }
}

impl ClusteringOracle for QuickBundles {
    fn cluster(
        &self,
        curves: &[Curve],
        distance_threshold: f32,
        resample_points: usize,
    ) -> Result<Vec<ClusterGroup>, ClusteringError> {
        if !distance_threshold.is_finite() || distance_threshold <= 0.0 {
            return Err(ClusteringError::InvalidParameters {
                reason: format!("distance threshold must be > 0, got {distance_threshold}"),
            });
        }
        if resample_points < MIN_RESAMPLE_POINTS {
            return Err(ClusteringError::InvalidParameters {
                reason: format!(
                    "resample count must be at least {MIN_RESAMPLE_POINTS}, got {resample_points}"
                ),
            });
        }

        let mut bundles: Vec<Bundle> = Vec::new();

        for (index, curve) in curves.iter().enumerate() {
            let sampled = resample(curve.points(), resample_points);

            let mut best: Option<(usize, f32, bool)> = None;
            for (b, bundle) in bundles.iter().enumerate() {
                let (direct, flipped) = direct_flip_distances(&sampled, &bundle.centroid);
                let (d, flip) = if flipped < direct {
                    (flipped, true)
                } else {
                    (direct, false)
                };
                if best.map_or(true, |(_, best_d, _)| d < best_d) {
                    best = Some((b, d, flip));
                }
            }

            match best {
                Some((b, d, flip)) if d < distance_threshold => {
                    bundles[b].add(index, &sampled, flip);
                }
                _ => bundles.push(Bundle::seed(index, &sampled)),
            }
        }

        debug!(
            curves = curves.len(),
            bundles = bundles.len(),
            distance_threshold,
            resample_points,
            "quickbundles pass complete"
        );

        Ok(bundles
            .into_iter()
            .enumerate()
            .map(|(id, b)| ClusterGroup::new(id, b.indices))
            .collect())
    }

    fn name(&self) -> &str {
        ORACLE_NAME
    }
}
