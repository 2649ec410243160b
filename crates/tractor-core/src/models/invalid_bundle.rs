use serde::{Deserialize, Serialize};

use super::RegionPair;

/// A repeated invalid connection: a region pair and every group assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidBundle {
    /// Pair in the orientation it was first created with.
    pub pair: RegionPair,
    /// Ids of the cluster groups merged into this bundle.
    pub groups: Vec<usize>,
    /// Origin indices of every member curve.
    pub members: Vec<usize>,
}

impl InvalidBundle {
    pub fn new(pair: RegionPair) -> Self {
        Self {
            pair,
            groups: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Merge a group's members into this bundle.
    pub fn absorb(&mut self, group_id: usize, members: impl IntoIterator<Item = usize>) {
        self.groups.push(group_id);
        self.members.extend(members);
    }

    pub fn streamline_count(&self) -> usize {
        self.members.len()
    }
}
