use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, RecordId, RecordKind};

/// One returned product on a return record.
///
/// `returned_qty` defaults to 0 on deserialization for the same reason
/// invoice lines do: older documents may omit the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLine {
    pub product_ref: RecordId,
    #[serde(default)]
    pub returned_qty: u64,
}

/// A processed customer return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRecord {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub customer_name: String,
    pub date: DateTime<Utc>,
    pub items: Vec<ReturnLine>,
}

impl ReturnRecord {
    /// Create a return record, validating the draft input.
    pub fn new(
        id: RecordId,
        customer_name: impl Into<String>,
        date: DateTime<Utc>,
        items: Vec<ReturnLine>,
    ) -> Result<Self, DomainError> {
        let customer_name = customer_name.into();
        if customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if items.is_empty() {
            return Err(DomainError::validation(
                "cannot process return without line items",
            ));
        }
        for line in &items {
            if line.returned_qty == 0 {
                return Err(DomainError::validation(
                    "return line quantity must be positive",
                ));
            }
        }
        Ok(Self {
            id,
            kind: RecordKind::Return,
            customer_name,
            date,
            items,
        })
    }

    /// Total units across all line items.
    pub fn units_returned(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.returned_qty))
    }
}
