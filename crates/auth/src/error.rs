use thiserror::Error;

/// Failure reported by the auth collaborator.
///
/// These surface to the user as notifications; none of them are fatal to the
/// process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("sign-in failed: {0}")]
    SignInFailed(String),

    #[error("sign-out failed: {0}")]
    SignOutFailed(String),

    #[error("no account is signed in")]
    NotSignedIn,
}
