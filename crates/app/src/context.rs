use std::sync::Arc;

use stockbook_auth::SessionGate;
use stockbook_core::{AccountId, RecordId};
use stockbook_inventory::InventoryItem;
use stockbook_invoicing::Invoice;
use stockbook_metrics::{ActivityEntry, DashboardMetrics, activity_feed, dashboard_metrics};
use stockbook_returns::ReturnRecord;
use stockbook_store::{AccountDocument, DocumentStore};

use crate::error::AppError;

/// Session-scoped state: the signed-in account's three collections plus the
/// handle to its document store.
///
/// One instance per signed-in session; operations take `&mut self` and await
/// their save, so persistence per account is serialized by construction.
pub struct SessionContext {
    pub(crate) account: AccountId,
    pub(crate) inventory: Vec<InventoryItem>,
    pub(crate) invoices: Vec<Invoice>,
    pub(crate) return_history: Vec<ReturnRecord>,
    pub(crate) store: Arc<dyn DocumentStore>,
}

impl SessionContext {
    /// Load the account's document, initializing an empty baseline for
    /// first-time accounts (the baseline is persisted before returning).
    pub async fn open(
        account: AccountId,
        store: Arc<dyn DocumentStore>,
    ) -> Result<Self, AppError> {
        let doc = match store.get(&account).await? {
            Some(doc) => doc,
            None => {
                let baseline = AccountDocument::default();
                store.set(&account, baseline.clone()).await?;
                tracing::info!(account = %account, "initialized empty account document");
                baseline
            }
        };

        tracing::debug!(
            account = %account,
            items = doc.inventory.len(),
            invoices = doc.invoices.len(),
            returns = doc.return_history.len(),
            "session opened"
        );

        Ok(Self {
            account,
            inventory: doc.inventory,
            invoices: doc.invoices,
            return_history: doc.return_history,
            store,
        })
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn return_history(&self) -> &[ReturnRecord] {
        &self.return_history
    }

    /// Lookup backing the `/invoice/:id` detail view.
    pub fn invoice(&self, id: RecordId) -> Option<&Invoice> {
        self.invoices.iter().find(|inv| inv.id == id)
    }

    /// Lookup backing the `/return-history/:id` detail view.
    pub fn return_record(&self, id: RecordId) -> Option<&ReturnRecord> {
        self.return_history.iter().find(|ret| ret.id == id)
    }

    /// Dashboard counters over the current collections.
    pub fn metrics(&self) -> DashboardMetrics {
        dashboard_metrics(&self.inventory, &self.invoices, &self.return_history)
    }

    /// The merged, date-descending activity log (capped at 20 entries).
    pub fn activity_feed(&self) -> Vec<ActivityEntry> {
        activity_feed(&self.invoices, &self.return_history)
    }

    /// End the session: sign out at the gate and drop the in-memory state.
    pub async fn sign_out(self, gate: &dyn SessionGate) -> Result<(), AppError> {
        gate.sign_out().await?;
        tracing::info!(account = %self.account, "session closed");
        Ok(())
    }
}
