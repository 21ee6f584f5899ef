use async_trait::async_trait;
use tokio::sync::watch;

use stockbook_core::AccountId;

use crate::error::AuthError;

/// Current authentication state of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    SignedIn(AccountId),
    SignedOut,
}

impl SessionState {
    pub fn account(&self) -> Option<&AccountId> {
        match self {
            SessionState::SignedIn(account) => Some(account),
            SessionState::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Boundary to the external auth collaborator.
///
/// The collaborator pushes session changes (an account identity, or none
/// when signed out); `subscribe` exposes those as a watch channel so callers
/// can react to sign-in/sign-out without polling.
#[async_trait]
pub trait SessionGate: Send + Sync {
    /// The current session state.
    fn state(&self) -> SessionState;

    /// Subscribe to session-change notifications.
    fn subscribe(&self) -> watch::Receiver<SessionState>;

    /// End the current session.
    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-memory session gate for tests/dev.
///
/// Stands in for the external auth service: `sign_in` and `sign_out` flip
/// the state and notify subscribers.
#[derive(Debug)]
pub struct InMemorySessionGate {
    state: watch::Sender<SessionState>,
}

impl InMemorySessionGate {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::SignedOut);
        Self { state }
    }

    pub fn sign_in(&self, account: AccountId) -> Result<(), AuthError> {
        tracing::info!(account = %account, "session signed in");
        // send_replace delivers even when nobody subscribed yet.
        self.state.send_replace(SessionState::SignedIn(account));
        Ok(())
    }
}

impl Default for InMemorySessionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionGate for InMemorySessionGate {
    fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if !self.state.borrow().is_signed_in() {
            return Err(AuthError::NotSignedIn);
        }
        tracing::info!("session signed out");
        self.state.send_replace(SessionState::SignedOut);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountId {
        AccountId::new("owner@example.com").unwrap()
    }

    #[tokio::test]
    async fn sign_in_then_out_flips_state() {
        let gate = InMemorySessionGate::new();
        assert_eq!(gate.state(), SessionState::SignedOut);

        gate.sign_in(account()).unwrap();
        assert_eq!(gate.state().account(), Some(&account()));

        gate.sign_out().await.unwrap();
        assert_eq!(gate.state(), SessionState::SignedOut);
    }

    #[tokio::test]
    async fn sign_out_without_session_fails() {
        let gate = InMemorySessionGate::new();
        assert_eq!(gate.sign_out().await.unwrap_err(), AuthError::NotSignedIn);
    }

    #[tokio::test]
    async fn subscribers_see_session_changes() {
        let gate = InMemorySessionGate::new();
        let mut rx = gate.subscribe();

        gate.sign_in(account()).unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_signed_in());

        gate.sign_out().await.unwrap();
        rx.changed().await.unwrap();
        assert!(!rx.borrow().is_signed_in());
    }
}
