//! Clustering oracle invocation.
//!
//! Owns the fixed parameters and checks that the oracle's answer is a
//! partition of the candidates before anything downstream trusts it.

use tracing::info;

use tractor_core::config::ReclassificationParams;
use tractor_core::errors::ClusteringError;
use tractor_core::models::{ClusterGroup, Curve};
use tractor_core::traits::ClusteringOracle;

pub fn invoke_oracle(
    oracle: &dyn ClusteringOracle,
    candidates: &[Curve],
    params: &ReclassificationParams,
) -> Result<Vec<ClusterGroup>, ClusteringError> {
    let groups = oracle.cluster(
        candidates,
        params.distance_threshold,
        params.resample_points,
    )?;
    validate_partition(oracle.name(), &groups, candidates.len())?;
    info!(
        oracle = oracle.name(),
        groups = groups.len(),
        candidates = candidates.len(),
        "clustering complete"
    );
    Ok(groups)
}

/// Every index in `0..candidate_count` must appear in exactly one non-empty group.
pub fn validate_partition(
    oracle: &str,
    groups: &[ClusterGroup],
    candidate_count: usize,
) -> Result<(), ClusteringError> {
    let invalid = |reason: String| ClusteringError::InvalidPartition {
        oracle: oracle.to_string(),
        reason,
    };

    let mut seen = vec![false; candidate_count];
    for group in groups {
        if group.is_empty() {
            return Err(invalid(format!("group {} is empty", group.id)));
        }
        for &index in &group.indices {
            match seen.get_mut(index) {
                None => {
                    return Err(invalid(format!(
                        "group {} references index {index}, only {candidate_count} candidates",
                        group.id
                    )))
                }
                Some(true) => {
                    return Err(invalid(format!("index {index} appears in more than one group")))
                }
                Some(slot) => *slot = true,
            }
        }
    }
    if let Some(missing) = seen.iter().position(|s| !s) {
        return Err(invalid(format!("index {missing} is in no group")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(id: usize, indices: &[usize]) -> ClusterGroup {
        ClusterGroup::new(id, indices.to_vec())
    }

    #[test]
    fn accepts_partition() {
        assert!(validate_partition("t", &[g(0, &[2, 0]), g(1, &[1])], 3).is_ok());
        assert!(validate_partition("t", &[], 0).is_ok());
    }

    #[test]
    fn rejects_duplicates_gaps_and_out_of_range() {
        assert!(validate_partition("t", &[g(0, &[0, 1]), g(1, &[1])], 2).is_err());
        assert!(validate_partition("t", &[g(0, &[0])], 2).is_err());
        assert!(validate_partition("t", &[g(0, &[0, 5])], 2).is_err());
        assert!(validate_partition("t", &[g(0, &[0, 1]), g(1, &[])], 2).is_err());
    }
}
