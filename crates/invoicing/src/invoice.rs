use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{DomainError, RecordId, RecordKind};

/// One ordered product on an invoice.
///
/// `ordered_qty` defaults to 0 on deserialization: documents written by
/// earlier versions of the dashboard may omit the quantity, and a missing
/// quantity counts as zero everywhere it is summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub product_ref: RecordId,
    #[serde(default)]
    pub ordered_qty: u64,
}

/// A sales invoice.
///
/// Carries its own `type` tag (normally `"sale"`) because the dashboard
/// metrics filter on the tag, not on the collection a record sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub customer_name: String,
    pub date: DateTime<Utc>,
    pub items: Vec<InvoiceLine>,
}

impl Invoice {
    /// Create a sale invoice, validating the draft input.
    pub fn sale(
        id: RecordId,
        customer_name: impl Into<String>,
        date: DateTime<Utc>,
        items: Vec<InvoiceLine>,
    ) -> Result<Self, DomainError> {
        let customer_name = customer_name.into();
        if customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if items.is_empty() {
            return Err(DomainError::validation(
                "cannot create invoice without line items",
            ));
        }
        for line in &items {
            if line.ordered_qty == 0 {
                return Err(DomainError::validation(
                    "invoice line quantity must be positive",
                ));
            }
        }
        Ok(Self {
            id,
            kind: RecordKind::Sale,
            customer_name,
            date,
            items,
        })
    }

    /// Total units across all line items.
    pub fn units_ordered(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, l| acc.saturating_add(l.ordered_qty))
    }
}
