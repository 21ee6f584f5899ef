//! Returns domain module.
//!
//! Return records mirror invoices on the inbound side: each one logs units
//! coming back into stock for a customer.

pub mod record;

pub use record::{ReturnLine, ReturnRecord};
