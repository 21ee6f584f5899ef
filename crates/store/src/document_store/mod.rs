//! Account-document store boundary.
//!
//! This module defines an infrastructure-facing abstraction for loading and
//! saving per-account documents without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryDocumentStore;
pub use r#trait::{DocumentStore, StoreError};

use std::time::Duration;

use stockbook_core::AccountId;

use crate::document::{AccountDocument, DocumentPatch};

/// Decorator that retries failed store calls with exponential backoff.
///
/// Failures surviving the final attempt are returned to the caller — a save
/// is never silently dropped.
pub struct RetryingStore<S> {
    inner: S,
    max_attempts: u32,
    base_delay: Duration,
}

impl<S> RetryingStore<S> {
    pub fn new(inner: S, max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Delay before retry `attempt` (1-based): base * 2^(attempt-1).
    fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt.saturating_sub(1))
    }
}

#[async_trait::async_trait]
impl<S> DocumentStore for RetryingStore<S>
where
    S: DocumentStore,
{
    async fn get(&self, account: &AccountId) -> Result<Option<AccountDocument>, StoreError> {
        let mut attempt = 1;
        loop {
            match self.inner.get(account).await {
                Ok(doc) => return Ok(doc),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(account = %account, %err, attempt, "document load failed, retrying");
                    tokio::time::sleep(self.backoff(attempt)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn set(&self, account: &AccountId, doc: AccountDocument) -> Result<(), StoreError> {
        let mut attempt = 1;
        loop {
            match self.inner.set(account, doc.clone()).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(account = %account, %err, attempt, "document write failed, retrying");
                    tokio::time::sleep(self.backoff(attempt)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn merge(&self, account: &AccountId, patch: DocumentPatch) -> Result<(), StoreError> {
        let mut attempt = 1;
        loop {
            match self.inner.merge(account, patch.clone()).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt < self.max_attempts => {
                    tracing::warn!(account = %account, %err, attempt, "document merge failed, retrying");
                    tokio::time::sleep(self.backoff(attempt)).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
