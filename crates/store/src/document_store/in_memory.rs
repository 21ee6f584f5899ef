use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockbook_core::AccountId;

use super::r#trait::{DocumentStore, StoreError};
use crate::document::{AccountDocument, DocumentPatch};

/// In-memory account document store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    accounts: RwLock<HashMap<AccountId, AccountDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, account: &AccountId) -> Result<Option<AccountDocument>, StoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(accounts.get(account).cloned())
    }

    async fn set(&self, account: &AccountId, doc: AccountDocument) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        accounts.insert(account.clone(), doc);
        Ok(())
    }

    async fn merge(&self, account: &AccountId, patch: DocumentPatch) -> Result<(), StoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        let doc = accounts.entry(account.clone()).or_default();
        patch.apply_to(doc);
        Ok(())
    }
}
