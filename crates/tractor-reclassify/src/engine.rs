//! ReclassificationEngine: one sequential pass from labeled curves to
//! invalid bundles and the final no-connection pool.

use tracing::{info, warn};

use tractor_core::config::ReclassificationParams;
use tractor_core::errors::{IngestError, PipelineResult, ReclassificationError};
use tractor_core::models::{ClusterGroup, Curve, InvalidBundle};
use tractor_core::traits::{ClusteringOracle, CurveSource};

use crate::assignment::assign_groups;
use crate::ingest::{self, LengthPartition};
use crate::oracle::invoke_oracle;
use crate::resolver::RegionResolver;
use crate::shuffle::deterministic_shuffle;

/// Everything a run produces. Curve references are origin indices into `curves`.
#[derive(Debug, Default)]
pub struct ReclassificationOutcome {
    /// Every ingested curve, indexed by origin index.
    pub curves: Vec<Curve>,
    /// Oracle groups; indices point into the shuffled candidate order.
    pub groups: Vec<ClusterGroup>,
    pub bundles: Vec<InvalidBundle>,
    /// Short curves followed by demoted singletons.
    pub nc_pool: Vec<usize>,
    pub candidate_count: usize,
    /// Curves below the length threshold.
    pub short_count: usize,
    pub reclassified_ic_count: usize,
}

impl ReclassificationOutcome {
    pub fn invalid_bundle_count(&self) -> usize {
        self.bundles.len()
    }

    pub fn nc_count(&self) -> usize {
        self.nc_pool.len()
    }

    /// Member curves of one bundle.
    pub fn bundle_curves<'a>(&'a self, bundle: &'a InvalidBundle) -> impl Iterator<Item = &'a Curve> {
        bundle.members.iter().map(move |&i| &self.curves[i])
    }

    /// Curves of the no-connection pool.
    pub fn nc_curves(&self) -> impl Iterator<Item = &Curve> {
        self.nc_pool.iter().map(move |&i| &self.curves[i])
    }
}

pub struct ReclassificationEngine<'a> {
    params: ReclassificationParams,
    oracle: &'a dyn ClusteringOracle,
}

impl<'a> ReclassificationEngine<'a> {
    pub fn new(params: ReclassificationParams, oracle: &'a dyn ClusteringOracle) -> Self {
        Self { params, oracle }
    }

    pub fn params(&self) -> &ReclassificationParams {
        &self.params
    }

    /// Load the IC, NC and VCWP collections from `source` and run.
    pub fn run(
        &self,
        source: &dyn CurveSource,
        resolver: &RegionResolver,
    ) -> Result<PipelineResult<ReclassificationOutcome>, ReclassificationError> {
        let curves = ingest::load_curves(source)?;
        self.run_curves(curves, resolver)
    }

    /// Run over already-ingested curves. Origin indices must be `0..curves.len()`.
    pub fn run_curves(
        &self,
        curves: Vec<Curve>,
        resolver: &RegionResolver,
    ) -> Result<PipelineResult<ReclassificationOutcome>, ReclassificationError> {
        let span = tractor_core::reclassify_span!(self.oracle.name(), self.params.shuffle_seed);
        let _guard = span.enter();

        if !self.params.is_standard() {
            warn!(
                params = ?self.params,
                "non-default reclassification parameters; scores are not comparable with standard runs"
            );
        }
        check_origin_indices(&curves)?;

        // Ingestion and length filter.
        let LengthPartition {
            mut candidates,
            short,
        } = ingest::partition_by_length(curves, self.params.length_threshold);
        info!(
            candidate_count = candidates.len(),
            short_count = short.len(),
            length_threshold = self.params.length_threshold,
            "length filter applied"
        );

        // Seeded shuffle.
        deterministic_shuffle(&mut candidates, self.params.shuffle_seed);

        // Clustering oracle.
        let groups = invoke_oracle(self.oracle, &candidates, &self.params)?;
        info!(group_count = groups.len(), "candidates clustered");

        // Region pairs, independent of grouping.
        let resolved = resolver.resolve_all(&candidates);

        // Assignment and singleton demotion.
        let assignment = assign_groups(&groups, &candidates, &resolved);

        let mut nc_pool: Vec<usize> = short.iter().map(|c| c.origin_index()).collect();
        nc_pool.extend(&assignment.demoted);

        info!(
            bundle_count = assignment.bundles.len(),
            reclassified_ic_count = assignment.reclassified_ic_count,
            nc_pool_count = nc_pool.len(),
            demoted = assignment.demoted.len(),
            "reclassification complete"
        );

        let candidate_count = candidates.len();
        let short_count = short.len();
        let mut all: Vec<Curve> = candidates.into_iter().chain(short).collect();
        all.sort_by_key(|c| c.origin_index());

        let mut result = PipelineResult::new(ReclassificationOutcome {
            curves: all,
            groups,
            bundles: assignment.bundles,
            nc_pool,
            candidate_count,
            short_count,
            reclassified_ic_count: assignment.reclassified_ic_count,
        });
        for diagnostic in assignment.diagnostics {
            result.add_warning(diagnostic);
        }
        Ok(result)
    }
}

fn check_origin_indices(curves: &[Curve]) -> Result<(), IngestError> {
    let mut seen = vec![false; curves.len()];
    for curve in curves {
        match seen.get_mut(curve.origin_index()) {
            Some(slot) if !*slot => *slot = true,
            _ => {
                return Err(IngestError::Malformed {
                    path: "<curves>".to_string(),
                    message: format!(
                        "origin index {} is duplicated or out of range",
                        curve.origin_index()
                    ),
                })
            }
        }
    }
    Ok(())
}
