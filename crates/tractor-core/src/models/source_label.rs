//! Upstream classification labels of the input curve collections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The label an upstream classifier gave a curve collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLabel {
    /// Invalid connection.
    #[serde(rename = "IC")]
    Ic,
    /// No connection.
    #[serde(rename = "NC")]
    Nc,
    /// Valid connection, wrong path.
    #[serde(rename = "VCWP")]
    Vcwp,
}

impl SourceLabel {
    /// Ingestion order. Origin indices follow this order.
    pub const ALL: [SourceLabel; 3] = [SourceLabel::Ic, SourceLabel::Nc, SourceLabel::Vcwp];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ic => "IC",
            Self::Nc => "NC",
            Self::Vcwp => "VCWP",
        }
    }

    /// File-name tag of a container holding this label, e.g. `_IC.`.
    pub fn file_tag(&self) -> String {
        format!("_{}.", self.as_str())
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
