use serde::{Deserialize, Serialize};

/// One group returned by the clustering oracle. `indices` point into the
/// shuffled candidate collection the oracle was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterGroup {
    pub id: usize,
    pub indices: Vec<usize>,
}

impl ClusterGroup {
    pub fn new(id: usize, indices: Vec<usize>) -> Self {
        Self { id, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.indices.len() == 1
    }
}
