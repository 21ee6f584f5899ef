//! `stockbook-auth` — session gate boundary.
//!
//! Authentication itself is an external collaborator; this crate only models
//! the session state it reports, the change notifications it emits, and the
//! sign-out call. It is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod session;

pub use error::AuthError;
pub use session::{InMemorySessionGate, SessionGate, SessionState};
