//! Invoicing domain module.
//!
//! Sales invoices are immutable once created; there is no edit or delete
//! flow. Stock effects are applied by the session layer, not here.

pub mod invoice;

pub use invoice::{Invoice, InvoiceLine};
