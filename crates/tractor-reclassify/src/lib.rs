//! # tractor-reclassify
//!
//! Regroups IC, NC and VCWP streamlines by shape and decides, per group,
//! which region pair it connects.
//! Pipeline: ingestion + length filter → seeded shuffle → clustering oracle →
//! region-pair resolution → majority vote with flip-merge → singleton
//! demotion → score update.

pub mod assignment;
pub mod engine;
pub mod ingest;
pub mod oracle;
pub mod resolver;
pub mod score;
pub mod shuffle;
pub mod vote;

pub use assignment::{assign_groups, AssignmentOutcome, BundleTable};
pub use engine::{ReclassificationEngine, ReclassificationOutcome};
pub use ingest::LengthPartition;
pub use resolver::RegionResolver;
pub use score::update_scores;
pub use vote::{majority_vote, VoteOutcome};
