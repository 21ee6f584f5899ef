use serde::{Deserialize, Serialize};

use stockbook_inventory::InventoryItem;
use stockbook_invoicing::Invoice;
use stockbook_returns::ReturnRecord;

/// The entire persisted state for one account.
///
/// Shape matches the external document store:
/// `{ inventory: [...], invoices: [...], returnHistory: [...] }`.
/// Collections default to empty so partially written documents still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDocument {
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub return_history: Vec<ReturnRecord>,
}

/// A merge update: named collections are replaced wholesale, unnamed ones
/// are left untouched. There are no per-record deltas.
#[derive(Debug, Clone, Default)]
pub struct DocumentPatch {
    pub inventory: Option<Vec<InventoryItem>>,
    pub invoices: Option<Vec<Invoice>>,
    pub return_history: Option<Vec<ReturnRecord>>,
}

impl DocumentPatch {
    pub fn inventory(items: Vec<InventoryItem>) -> Self {
        Self {
            inventory: Some(items),
            ..Self::default()
        }
    }

    pub fn invoices(invoices: Vec<Invoice>) -> Self {
        Self {
            invoices: Some(invoices),
            ..Self::default()
        }
    }

    pub fn return_history(returns: Vec<ReturnRecord>) -> Self {
        Self {
            return_history: Some(returns),
            ..Self::default()
        }
    }

    pub fn with_inventory(mut self, items: Vec<InventoryItem>) -> Self {
        self.inventory = Some(items);
        self
    }

    pub fn with_invoices(mut self, invoices: Vec<Invoice>) -> Self {
        self.invoices = Some(invoices);
        self
    }

    pub fn with_return_history(mut self, returns: Vec<ReturnRecord>) -> Self {
        self.return_history = Some(returns);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_none() && self.invoices.is_none() && self.return_history.is_none()
    }

    /// Apply this patch to a document in place.
    pub fn apply_to(self, doc: &mut AccountDocument) {
        if let Some(inventory) = self.inventory {
            doc.inventory = inventory;
        }
        if let Some(invoices) = self.invoices {
            doc.invoices = invoices;
        }
        if let Some(return_history) = self.return_history {
            doc.return_history = return_history;
        }
    }
}
