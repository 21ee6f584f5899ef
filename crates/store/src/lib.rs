//! Persistence layer: the account document and the document-store boundary.
//!
//! The external collaborator is any login+document-store backend; this crate
//! defines the document shape it holds, the async boundary trait, an
//! in-memory implementation for tests/dev, and a retrying decorator.

pub mod document;
pub mod document_store;

pub use document::{AccountDocument, DocumentPatch};
pub use document_store::{DocumentStore, InMemoryDocumentStore, RetryingStore, StoreError};
