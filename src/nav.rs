//! Stack navigation with guard checks
//!
//! Every route change goes through [`RouteGuard::check`] before the stack is
//! touched, so the active view is always one the current session may see.
//! Redirects reset the stack, which keeps "back" from returning to a view the
//! guard has already refused.

use tokio::sync::watch;

use crate::auth::{AuthState, RouteDecision, RouteGuard, SessionState, SessionStore, User};
use crate::error::Error;
use crate::routes::Route;

/// Result of a login attempt as handed to the login view
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub success: bool,
    /// Message to show when the attempt failed
    pub message: Option<String>,
    pub user: Option<User>,
    /// Route active after the attempt
    pub route: Route,
}

/// Navigation state for one app instance
pub struct Navigator {
    store: SessionStore,
    guard: RouteGuard,
    stack: Vec<Route>,
    observed: watch::Receiver<SessionState>,
}

impl Navigator {
    /// Start at the launch view and resolve it against the current session
    pub fn new(store: SessionStore, guard: RouteGuard) -> Self {
        let mut observed = store.subscribe();
        let state = AuthState::from(&*observed.borrow_and_update());
        let start = guard.check(state, Route::Launch).destination();
        tracing::debug!("Navigator starting at {}", start);
        Self {
            store,
            guard,
            stack: vec![start],
            observed,
        }
    }

    pub fn current(&self) -> Route {
        // The stack is never empty: every operation leaves at least one route
        self.stack.last().copied().unwrap_or(Route::Launch)
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn auth_state(&self) -> AuthState {
        AuthState::from(&self.store.session())
    }

    /// Push `route` on top of the stack
    pub fn push(&mut self, route: Route) -> RouteDecision {
        let decision = self.guard.check(self.auth_state(), route);
        match decision {
            RouteDecision::Allow(route) => self.stack.push(route),
            RouteDecision::Redirect { to, .. } => self.reset(to),
        }
        tracing::debug!("push: {}", decision);
        decision
    }

    /// Swap the top of the stack for `route`
    pub fn replace(&mut self, route: Route) -> RouteDecision {
        let decision = self.guard.check(self.auth_state(), route);
        match decision {
            RouteDecision::Allow(route) => {
                self.stack.pop();
                self.stack.push(route);
            }
            RouteDecision::Redirect { to, .. } => self.reset(to),
        }
        tracing::debug!("replace: {}", decision);
        decision
    }

    /// Go to `route` the way the app's links do: detail views are pushed,
    /// everything else replaces the current view.
    pub fn navigate(&mut self, route: Route) -> RouteDecision {
        match route {
            Route::Detail { .. } => self.push(route),
            _ => self.replace(route),
        }
    }

    /// Pop the top view. Returns the new active route, or `None` at the root.
    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.stack.pop();
        let current = self.current();
        if let Some(to) = self.guard.on_transition(self.auth_state(), current) {
            self.reset(to);
        }
        Some(self.current())
    }

    /// Apply the guard to any session change since the last call.
    ///
    /// Returns the redirect performed, if one was needed.
    pub fn sync(&mut self) -> Option<RouteDecision> {
        let changed = self.observed.has_changed().unwrap_or(false);
        let state = AuthState::from(&*self.observed.borrow_and_update());
        if changed {
            tracing::debug!("Session changed, now {}", state);
        }

        let active = self.current();
        let to = self.guard.on_transition(state, active)?;
        self.reset(to);
        tracing::info!("Redirected {} -> {} ({})", active, to, state);
        Some(RouteDecision::Redirect {
            requested: active,
            to,
        })
    }

    /// Log in through the store and move off the login view on success
    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        match self.store.login(email, password).await {
            Ok(user) => {
                self.sync();
                LoginOutcome {
                    success: true,
                    message: None,
                    user: Some(user),
                    route: self.current(),
                }
            }
            Err(e) => {
                self.sync();
                LoginOutcome {
                    success: false,
                    message: Some(login_message(&e)),
                    user: None,
                    route: self.current(),
                }
            }
        }
    }

    /// Log out through the store and return to the login view
    pub fn logout(&mut self) -> Option<RouteDecision> {
        self.store.logout();
        self.sync()
    }

    /// Whether the active view is consistent with the session
    pub fn is_consistent(&self) -> bool {
        self.guard.permits(self.auth_state(), self.current())
    }

    /// Drop the whole stack and make `to` the only route
    fn reset(&mut self, to: Route) {
        self.stack.clear();
        self.stack.push(to);
    }
}

fn login_message(error: &Error) -> String {
    if error.is_login_failure() {
        error.user_message()
    } else {
        format!("Login failed: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;

    fn navigator() -> Navigator {
        let store = SessionStore::new(&AuthConfig {
            login_delay_ms: 0,
            ..AuthConfig::default()
        });
        Navigator::new(store, RouteGuard::default())
    }

    #[test]
    fn test_starts_at_login_without_session() {
        let nav = navigator();
        assert_eq!(nav.current(), Route::Login);
        assert!(nav.is_consistent());
    }

    #[tokio::test]
    async fn test_login_moves_to_default_route() {
        let mut nav = navigator();
        let outcome = nav.login("a@b.com", "x").await;

        assert!(outcome.success);
        assert_eq!(outcome.route, Route::Home);
        assert_eq!(nav.stack(), &[Route::Home]);
    }

    #[tokio::test]
    async fn test_failed_login_stays_on_login() {
        let mut nav = navigator();
        let outcome = nav.login("", "").await;

        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("Please fill in all fields"));
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.auth_state(), AuthState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_back_after_logout_cannot_reach_protected() {
        let mut nav = navigator();
        nav.login("a@b.com", "x").await;
        nav.push(Route::Detail { course_id: 1 });
        assert!(nav.can_go_back());

        nav.logout();
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(nav.back(), None);
    }

    #[tokio::test]
    async fn test_redirect_replaces_whole_stack() {
        let mut nav = navigator();
        nav.login("a@b.com", "x").await;
        nav.navigate(Route::Favorites);
        nav.push(Route::Detail { course_id: 1 });
        nav.push(Route::Detail { course_id: 3 });
        assert_eq!(nav.stack().len(), 3);

        let decision = nav.push(Route::Login);
        assert_eq!(decision.destination(), Route::Home);
        assert_eq!(nav.stack(), &[Route::Home]);
        assert!(!nav.can_go_back());
    }

    #[tokio::test]
    async fn test_sync_picks_up_external_logout() {
        let mut nav = navigator();
        nav.login("a@b.com", "x").await;
        nav.navigate(Route::Settings);

        nav.store().clone().logout();
        let decision = nav.sync().unwrap();
        assert_eq!(decision.destination(), Route::Login);
        assert!(nav.sync().is_none());
    }
}
