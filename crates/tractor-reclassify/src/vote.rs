//! Majority vote over region pairs.
//!
//! Counting merges a pair with its flip (`RegionPair` equality is
//! symmetric). The winner keeps the orientation in which it was first
//! seen. On a tie the first-seen leader wins and the tie is reported.

use std::collections::HashMap;

use tractor_core::models::RegionPair;

#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    pub winner: RegionPair,
    pub votes: usize,
    /// Every pair sharing the top count, in first-seen order. Empty when
    /// the winner is unique.
    pub tied: Vec<RegionPair>,
}

impl VoteOutcome {
    pub fn is_tie(&self) -> bool {
        !self.tied.is_empty()
    }
}

/// The most frequent pair in `pairs`. `None` for an empty slice.
pub fn majority_vote(pairs: &[RegionPair]) -> Option<VoteOutcome> {
    let mut tally: Vec<(&RegionPair, usize)> = Vec::new();
    let mut position: HashMap<&RegionPair, usize> = HashMap::new();

    for pair in pairs {
        match position.get(pair) {
            Some(&i) => tally[i].1 += 1,
            None => {
                position.insert(pair, tally.len());
                tally.push((pair, 1));
            }
        }
    }

    let votes = tally.iter().map(|(_, n)| *n).max()?;
    let leaders: Vec<&RegionPair> = tally
        .iter()
        .filter(|(_, n)| *n == votes)
        .map(|(p, _)| *p)
        .collect();

    let winner = leaders[0].clone();
    let tied = if leaders.len() > 1 {
        leaders.into_iter().cloned().collect()
    } else {
        Vec::new()
    };

    Some(VoteOutcome {
        winner,
        votes,
        tied,
    })
}
