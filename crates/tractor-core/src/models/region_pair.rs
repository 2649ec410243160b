//! Unordered pair of region names.
//!
//! `(A, B)` and `(B, A)` compare equal and hash identically. The pair still
//! remembers the orientation it was built with, which names exported bundles.
//! `canonical_key` is the single flip normalization used everywhere.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionPair {
    first: String,
    second: String,
}

impl RegionPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn second(&self) -> &str {
        &self.second
    }

    /// The same pair in the opposite orientation.
    pub fn flipped(&self) -> Self {
        Self {
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }

    /// Orientation-independent key: members ordered by name.
    pub fn canonical_key(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }

    /// True when `other` holds the same members in the same orientation.
    pub fn same_orientation(&self, other: &RegionPair) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl PartialEq for RegionPair {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_key() == other.canonical_key()
    }
}

impl Eq for RegionPair {}

impl Hash for RegionPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_key().hash(state);
    }
}

impl fmt::Display for RegionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn flip_is_equal() {
        let ab = RegionPair::new("A", "B");
        assert_eq!(ab, ab.flipped());
        assert!(!ab.same_orientation(&ab.flipped()));
    }

    #[test]
    fn flip_hashes_identically() {
        let mut set = HashSet::new();
        set.insert(RegionPair::new("CST_left", "Cingulum"));
        assert!(!set.insert(RegionPair::new("Cingulum", "CST_left")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_keeps_orientation() {
        assert_eq!(RegionPair::new("B", "A").to_string(), "B_A");
        assert_eq!(RegionPair::new("B", "A").canonical_key(), ("A", "B"));
    }
}
