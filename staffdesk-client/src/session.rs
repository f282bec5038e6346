//! Session context
//!
//! Explicit replacement for the browser-storage token/username state:
//! opened on login, cleared on logout, consulted by the HTTP transport on
//! every request. Cheap to clone; all clones share the same state.

use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("username and password are required")]
    MissingCredentials,
}

/// An open session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub username: String,
    pub token: String,
    pub logged_in_at: DateTime<Utc>,
}

/// Shared session handle
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<SessionState>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session.
    ///
    /// DEMO ONLY: any non-empty username/password pair is accepted and a
    /// locally minted `demo-token-<millis>` becomes the bearer token. A real
    /// deployment would validate against a backend.
    pub fn login(&self, username: &str, password: &str) -> Result<SessionState, SessionError> {
        if username.is_empty() || password.is_empty() {
            return Err(SessionError::MissingCredentials);
        }

        let now = Utc::now();
        let state = SessionState {
            username: username.to_string(),
            token: format!("demo-token-{}", now.timestamp_millis()),
            logged_in_at: now,
        };
        *self.inner.write().expect("session lock poisoned") = Some(state.clone());
        tracing::debug!(username, "session opened");
        Ok(state)
    }

    /// Close the session, discarding token and username
    pub fn logout(&self) {
        let mut guard = self.inner.write().expect("session lock poisoned");
        if let Some(state) = guard.take() {
            tracing::debug!(username = %state.username, "session closed");
        }
    }

    /// Token-presence check, the guard question for protected views
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn username(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.username.clone())
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.logged_in_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_opens_session() {
        let session = Session::new();
        assert!(!session.is_authenticated());

        let state = session.login("alice", "secret").unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.username().as_deref(), Some("alice"));
        assert!(state.token.starts_with("demo-token-"));
        assert_eq!(session.token(), Some(state.token));
    }

    #[test]
    fn test_login_rejects_empty_credentials() {
        let session = Session::new();
        assert!(matches!(
            session.login("", "secret"),
            Err(SessionError::MissingCredentials)
        ));
        assert!(matches!(
            session.login("alice", ""),
            Err(SessionError::MissingCredentials)
        ));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_clears_state() {
        let session = Session::new();
        session.login("alice", "secret").unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.username().is_none());
        assert!(session.logged_in_at().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::new();
        let view = session.clone();

        session.login("alice", "secret").unwrap();
        assert!(view.is_authenticated());

        view.logout();
        assert!(!session.is_authenticated());
    }
}
