//! Domain operations invoked by the presentation layer.
//!
//! Each operation follows compute-then-commit: the next state of every
//! touched collection is computed on clones, persisted in a single merge
//! call, and only then committed to memory. A failed save therefore leaves
//! memory and store consistent with each other.

use chrono::Utc;

use stockbook_core::{DomainError, RecordId};
use stockbook_inventory::InventoryItem;
use stockbook_invoicing::{Invoice, InvoiceLine};
use stockbook_returns::{ReturnLine, ReturnRecord};
use stockbook_store::DocumentPatch;

use crate::context::SessionContext;
use crate::error::AppError;

/// One product line of a draft invoice or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDraft {
    pub product_ref: RecordId,
    pub qty: u64,
}

/// User input for the invoice-creation view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer_name: String,
    pub lines: Vec<LineDraft>,
}

/// User input for the return-processing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDraft {
    pub customer_name: String,
    pub lines: Vec<LineDraft>,
}

impl SessionContext {
    /// Record a sale: decrement matching stock and append the invoice.
    ///
    /// Inventory and invoices are persisted in one merge call; nothing is
    /// mutated if validation, the stock decrement, or the save fails.
    pub async fn create_invoice(&mut self, draft: InvoiceDraft) -> Result<Invoice, AppError> {
        let items: Vec<InvoiceLine> = draft
            .lines
            .iter()
            .map(|l| InvoiceLine {
                product_ref: l.product_ref,
                ordered_qty: l.qty,
            })
            .collect();
        let invoice = Invoice::sale(RecordId::new(), draft.customer_name, Utc::now(), items)?;

        let mut inventory = self.inventory.clone();
        for line in &invoice.items {
            let item = find_item(&mut inventory, line.product_ref)?;
            item.deduct(line.ordered_qty)?;
        }
        let mut invoices = self.invoices.clone();
        invoices.push(invoice.clone());

        self.persist(
            DocumentPatch::inventory(inventory.clone()).with_invoices(invoices.clone()),
        )
        .await?;

        self.inventory = inventory;
        self.invoices = invoices;
        tracing::info!(
            account = %self.account,
            invoice = %invoice.id,
            units = invoice.units_ordered(),
            "invoice created"
        );
        Ok(invoice)
    }

    /// Process a customer return: increment matching stock and append the
    /// return record. Same atomicity as invoice creation.
    pub async fn process_return(&mut self, draft: ReturnDraft) -> Result<ReturnRecord, AppError> {
        let items: Vec<ReturnLine> = draft
            .lines
            .iter()
            .map(|l| ReturnLine {
                product_ref: l.product_ref,
                returned_qty: l.qty,
            })
            .collect();
        let record = ReturnRecord::new(RecordId::new(), draft.customer_name, Utc::now(), items)?;

        let mut inventory = self.inventory.clone();
        for line in &record.items {
            let item = find_item(&mut inventory, line.product_ref)?;
            item.receive(line.returned_qty)?;
        }
        let mut return_history = self.return_history.clone();
        return_history.push(record.clone());

        self.persist(
            DocumentPatch::inventory(inventory.clone())
                .with_return_history(return_history.clone()),
        )
        .await?;

        self.inventory = inventory;
        self.return_history = return_history;
        tracing::info!(
            account = %self.account,
            record = %record.id,
            units = record.units_returned(),
            "return processed"
        );
        Ok(record)
    }

    /// Create or replace an inventory item (settings/total view).
    pub async fn upsert_item(&mut self, item: InventoryItem) -> Result<(), AppError> {
        let mut inventory = self.inventory.clone();
        match inventory.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item,
            None => inventory.push(item),
        }

        self.persist(DocumentPatch::inventory(inventory.clone())).await?;
        self.inventory = inventory;
        Ok(())
    }

    /// Delete an inventory item (settings/total view).
    pub async fn remove_item(&mut self, id: RecordId) -> Result<(), AppError> {
        let mut inventory = self.inventory.clone();
        let before = inventory.len();
        inventory.retain(|i| i.id != id);
        if inventory.len() == before {
            return Err(DomainError::not_found().into());
        }

        self.persist(DocumentPatch::inventory(inventory.clone())).await?;
        self.inventory = inventory;
        Ok(())
    }

    async fn persist(&self, patch: DocumentPatch) -> Result<(), AppError> {
        if let Err(err) = self.store.merge(&self.account, patch).await {
            tracing::warn!(account = %self.account, %err, "save failed, in-memory state unchanged");
            return Err(err.into());
        }
        Ok(())
    }
}

fn find_item(
    inventory: &mut [InventoryItem],
    product_ref: RecordId,
) -> Result<&mut InventoryItem, DomainError> {
    inventory
        .iter_mut()
        .find(|i| i.id == product_ref)
        .ok_or_else(|| DomainError::validation(format!("unknown product ref: {product_ref}")))
}
