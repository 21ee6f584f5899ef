//! Record type tags shared by invoices and returns.

use serde::{Deserialize, Serialize};

/// Tag distinguishing sale invoices from return records.
///
/// Persisted lowercase (`"sale"` / `"return"`) in the account document; the
/// dashboard metrics filter on this tag rather than on which collection a
/// record came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Sale,
    Return,
}

impl core::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RecordKind::Sale => write!(f, "sale"),
            RecordKind::Return => write!(f, "return"),
        }
    }
}
