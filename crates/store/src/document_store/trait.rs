use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use stockbook_core::AccountId;

use crate::document::{AccountDocument, DocumentPatch};

/// Document store operation error.
///
/// These are **infrastructure errors** (backend reachability, payload
/// shape), as opposed to domain errors. An absent document is not an error:
/// the read path reports it as `Ok(None)` so the caller can initialize a
/// baseline.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing service failed or was unreachable.
    #[error("store backend failure: {0}")]
    Backend(String),

    /// A stored document could not be decoded.
    #[error("document serialization failure: {0}")]
    Serialization(String),
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

/// Per-account document store.
///
/// Keyed by the opaque account identity. Implementations must:
/// - return `Ok(None)` from `get` for accounts with no document yet
/// - replace named collections wholesale in `merge`, leaving unnamed ones
///   untouched, creating the document from empty defaults when absent
/// - never partially apply a patch
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the full document for an account.
    async fn get(&self, account: &AccountId) -> Result<Option<AccountDocument>, StoreError>;

    /// Replace the full document for an account.
    async fn set(&self, account: &AccountId, doc: AccountDocument) -> Result<(), StoreError>;

    /// Merge named collections into the account's document.
    async fn merge(&self, account: &AccountId, patch: DocumentPatch) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn get(&self, account: &AccountId) -> Result<Option<AccountDocument>, StoreError> {
        (**self).get(account).await
    }

    async fn set(&self, account: &AccountId, doc: AccountDocument) -> Result<(), StoreError> {
        (**self).set(account, doc).await
    }

    async fn merge(&self, account: &AccountId, patch: DocumentPatch) -> Result<(), StoreError> {
        (**self).merge(account, patch).await
    }
}
