//! Per-submission score record.
//!
//! `IC`, `NC`, `VC` and `VCWP` are fractions of `total_streamlines_count`;
//! `VB` and `IB` are absolute counts. Fields this workspace does not know
//! about are kept in `extra` and written back untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "VB")]
    pub vb: u64,
    #[serde(rename = "IB")]
    pub ib: u64,
    #[serde(rename = "VC")]
    pub vc: f64,
    #[serde(rename = "IC")]
    pub ic: f64,
    #[serde(rename = "VCWP")]
    pub vcwp: f64,
    #[serde(rename = "NC")]
    pub nc: f64,
    pub total_streamlines_count: Option<u64>,
    #[serde(default)]
    pub streamlines_per_bundle: BTreeMap<String, u64>,
    pub algo_version: u32,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ScoreRecord {
    /// Parse a record from JSON. Missing required fields are an
    /// inconsistent record, not a parse failure.
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        serde_json::from_str(json).map_err(|e| ScoreError::InconsistentScore {
            reason: e.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, ScoreError> {
        serde_json::to_string_pretty(self).map_err(|e| ScoreError::InconsistentScore {
            reason: e.to_string(),
        })
    }

    /// The total streamline count, which must be present and non-zero.
    pub fn total_count(&self) -> Result<u64, ScoreError> {
        match self.total_streamlines_count {
            Some(0) => Err(ScoreError::InconsistentScore {
                reason: "total_streamlines_count is zero".to_string(),
            }),
            Some(total) => Ok(total),
            None => Err(ScoreError::InconsistentScore {
                reason: "total_streamlines_count is absent".to_string(),
            }),
        }
    }
}
