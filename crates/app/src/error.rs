use thiserror::Error;

use stockbook_auth::AuthError;
use stockbook_core::DomainError;
use stockbook_store::StoreError;

/// Application-level error taxonomy.
///
/// Presentation-layer actions catch and display all of these; none are fatal
/// to the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// Sign-in/sign-out failure reported by the auth collaborator.
    #[error("authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Load/save failure against the document store.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// Malformed input or violated invariant (validation errors included).
    #[error(transparent)]
    Domain(#[from] DomainError),
}
