use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Write one curve container per invalid bundle plus the NC pool.
    pub save_tracts: Option<bool>,
}

impl ExportConfig {
    pub fn effective_save_tracts(&self) -> bool {
        self.save_tracts.unwrap_or(defaults::DEFAULT_SAVE_TRACTS)
    }
}
