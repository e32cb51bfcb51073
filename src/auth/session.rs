//! Session store
//!
//! The store is the single owner of the signed-in [`User`]. Views never hold
//! the user directly: they read it from the store or subscribe to changes
//! through a [`watch::Receiver`].

use crate::auth::models::{LoginRequest, User};
use crate::auth::verifier::{validate_credentials, CredentialVerifier, MockVerifier};
use crate::config::AuthConfig;
use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

/// Session information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session ID
    pub id: String,
    /// User associated with this session
    pub user: User,
    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    /// Create a new session
    pub fn new(user: User) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Observable session value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Absent,
    Present(Session),
}

impl SessionState {
    pub fn is_present(&self) -> bool {
        matches!(self, SessionState::Present(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Present(session) => Some(&session.user),
            SessionState::Absent => None,
        }
    }
}

/// Clears the pending flag when a login attempt finishes, however it finishes
struct PendingLogin<'a>(&'a AtomicBool);

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Holder of the current session
pub struct SessionStore {
    state: Arc<watch::Sender<SessionState>>,
    pending: Arc<AtomicBool>,
    /// Bumped by every logout; a login started before a logout must not land
    logouts: Arc<AtomicU64>,
    verifier: Arc<dyn CredentialVerifier>,
    login_delay: Duration,
    fallback_name: String,
}

impl SessionStore {
    /// Create an empty store backed by the mock verifier
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_verifier(config, Arc::new(MockVerifier))
    }

    /// Create an empty store with a custom verifier
    pub fn with_verifier(config: &AuthConfig, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let (state, _) = watch::channel(SessionState::Absent);
        Self {
            state: Arc::new(state),
            pending: Arc::new(AtomicBool::new(false)),
            logouts: Arc::new(AtomicU64::new(0)),
            verifier,
            login_delay: Duration::from_millis(config.login_delay_ms),
            fallback_name: config.fallback_name.clone(),
        }
    }

    /// Sign in with an email and password.
    ///
    /// Failures leave the session untouched. A logout issued while the
    /// attempt is still pending cancels it.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest::new(email, password);
        if let Err(e) = validate_credentials(&request) {
            tracing::warn!("Rejected login: {}", e);
            return Err(e);
        }

        if self.pending.swap(true, Ordering::SeqCst) {
            tracing::warn!("Login for {} ignored, another attempt is pending", email);
            return Err(Error::LoginInProgress);
        }
        let _pending = PendingLogin(&self.pending);
        let logouts_at_start = self.logouts.load(Ordering::SeqCst);

        tracing::debug!("Logging in {}", email);
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        if let Err(e) = self.verifier.verify(&request) {
            tracing::warn!("Credentials for {} rejected: {}", email, e);
            return Err(e);
        }

        let user = User::from_email(&request.email, &self.fallback_name);
        let session = Session::new(user.clone());
        let session_id = session.id.clone();
        let mut cancelled = false;
        let mut replaced = None;
        // Checked under the channel lock so a concurrent logout cannot slip in
        self.state.send_if_modified(|state| {
            if self.logouts.load(Ordering::SeqCst) != logouts_at_start {
                cancelled = true;
                return false;
            }
            replaced = Some(std::mem::replace(state, SessionState::Present(session)));
            true
        });

        if cancelled {
            tracing::warn!("Login for {} cancelled by logout", email);
            return Err(Error::LoginCancelled);
        }
        tracing::info!("Session {} started for {}", session_id, user.email);
        if let Some(SessionState::Present(old)) = replaced {
            tracing::info!("Session {} replaced", old.id);
        }

        Ok(user)
    }

    /// Sign in and report only whether it worked
    pub async fn try_login(&self, email: &str, password: &str) -> bool {
        self.login(email, password).await.is_ok()
    }

    /// Clear the session and cancel any pending login. Calling this while
    /// signed out leaves the session absent and notifies nobody.
    pub fn logout(&self) {
        let cleared = self.state.send_if_modified(|state| {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            match state {
                SessionState::Present(session) => {
                    tracing::info!("Session {} ended for {}", session.id, session.user.email);
                    *state = SessionState::Absent;
                    true
                }
                SessionState::Absent => false,
            }
        });
        if !cleared {
            tracing::debug!("Logout with no active session");
        }
    }

    /// Currently signed-in user, if any
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    /// Snapshot of the session value
    pub fn session(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_present()
    }

    /// Whether a login attempt is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Receive a notification on every session change
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

impl Clone for SessionStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            pending: Arc::clone(&self.pending),
            logouts: Arc::clone(&self.logouts),
            verifier: Arc::clone(&self.verifier),
            login_delay: self.login_delay,
            fallback_name: self.fallback_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_store() -> SessionStore {
        SessionStore::new(&AuthConfig {
            login_delay_ms: 0,
            ..AuthConfig::default()
        })
    }

    #[tokio::test]
    async fn test_login_sets_user() {
        let store = instant_store();
        let user = store.login("a@b.com", "x").await.unwrap();

        assert_eq!(user.email, "a@b.com");
        assert_eq!(store.current_user(), Some(user));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_empty_credentials_leave_session_absent() {
        let store = instant_store();
        assert!(matches!(
            store.login("", "x").await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            store.login("a@b.com", "").await,
            Err(Error::Validation(_))
        ));
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let store = instant_store();
        store.login("a@b.com", "x").await.unwrap();

        store.logout();
        store.logout();
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_pending_flag_blocks_second_login() {
        let store = instant_store();
        store.pending.store(true, Ordering::SeqCst);

        let result = store.login("a@b.com", "x").await;
        assert!(matches!(result, Err(Error::LoginInProgress)));
        assert!(store.current_user().is_none());
        // The rejected attempt must not clear the other attempt's flag
        assert!(store.is_loading());
    }

    #[tokio::test]
    async fn test_logout_before_login_does_not_cancel_it() {
        let store = instant_store();
        store.logout();
        assert!(store.login("a@b.com", "x").await.is_ok());
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = instant_store();
        let view = store.clone();
        store.login("a@b.com", "x").await.unwrap();
        assert!(view.is_authenticated());
    }
}
