//! Cluster → region-pair assignment with singleton demotion.
//!
//! Invalid connections are repeatable tracking errors, so a group, not a
//! single curve, defines an invalid bundle. Multi-member groups vote for a
//! region pair and join the bundle of that pair (or of its flip). Groups of
//! one go back to the no-connection pool.

use std::collections::HashMap;

use tracing::{debug, warn};

use tractor_core::errors::AssignmentError;
use tractor_core::models::{ClusterGroup, Curve, InvalidBundle, RegionPair};

use crate::vote::majority_vote;

/// Invalid bundles keyed by region pair. A pair and its flip share one
/// canonical key, so a lookup by either orientation finds the same bundle.
#[derive(Debug, Default)]
pub struct BundleTable {
    bundles: Vec<InvalidBundle>,
    by_key: HashMap<(String, String), usize>,
}

impl BundleTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(pair: &RegionPair) -> (String, String) {
        let (a, b) = pair.canonical_key();
        (a.to_string(), b.to_string())
    }

    /// Position of the bundle for `pair` or its flip.
    pub fn find(&self, pair: &RegionPair) -> Option<usize> {
        self.by_key.get(&Self::key(pair)).copied()
    }

    /// Append a group to the bundle for `pair`, creating the bundle in the
    /// given orientation when neither orientation exists yet.
    pub fn assign(
        &mut self,
        pair: &RegionPair,
        group_id: usize,
        members: impl IntoIterator<Item = usize>,
    ) -> usize {
        let position = match self.find(pair) {
            Some(position) => position,
            None => {
                let position = self.bundles.len();
                self.bundles.push(InvalidBundle::new(pair.clone()));
                self.by_key.insert(Self::key(pair), position);
                position
            }
        };
        self.bundles[position].absorb(group_id, members);
        position
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn bundles(&self) -> &[InvalidBundle] {
        &self.bundles
    }

    pub fn into_bundles(self) -> Vec<InvalidBundle> {
        self.bundles
    }
}

#[derive(Debug, Default)]
pub struct AssignmentOutcome {
    /// Bundles in creation order.
    pub bundles: Vec<InvalidBundle>,
    /// Curves placed in bundles.
    pub reclassified_ic_count: usize,
    /// Origin indices of singleton-group curves, in group order.
    pub demoted: Vec<usize>,
    /// Tied votes, resolved by first-seen order.
    pub diagnostics: Vec<AssignmentError>,
}

/// Assign every group.
///
/// `candidates` is the collection the oracle clustered and `resolved[i]` is
/// the region pair of `candidates[i]`. Group indices point into both.
pub fn assign_groups(
    groups: &[ClusterGroup],
    candidates: &[Curve],
    resolved: &[RegionPair],
) -> AssignmentOutcome {
    let mut table = BundleTable::new();
    let mut outcome = AssignmentOutcome::default();

    for group in groups {
        if group.is_singleton() {
            outcome
                .demoted
                .push(candidates[group.indices[0]].origin_index());
            continue;
        }

        let pairs: Vec<RegionPair> = group.indices.iter().map(|&i| resolved[i].clone()).collect();
        let Some(vote) = majority_vote(&pairs) else {
            continue;
        };

        if vote.is_tie() {
            let diagnostic = AssignmentError::AmbiguousAssignment {
                group: group.id,
                chosen: vote.winner.to_string(),
                tied: vote.tied.iter().map(|p| p.to_string()).collect(),
                votes: vote.votes,
            };
            warn!(group = group.id, %diagnostic, "ambiguous region-pair vote");
            outcome.diagnostics.push(diagnostic);
        }

        let bundle = table.assign(
            &vote.winner,
            group.id,
            group.indices.iter().map(|&i| candidates[i].origin_index()),
        );
        outcome.reclassified_ic_count += group.len();

        debug!(
            group = group.id,
            size = group.len(),
            pair = %vote.winner,
            votes = vote.votes,
            bundle,
            "group assigned"
        );
    }

    outcome.bundles = table.into_bundles();
    outcome
}
