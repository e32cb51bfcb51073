//! Route guard
//!
//! Maps the session state to the views a caller may reach. The guard never
//! navigates on its own; it returns a [`RouteDecision`] and the navigator
//! applies it.

use crate::auth::session::SessionState;
use crate::config::NavigationConfig;
use crate::routes::Route;
use std::fmt;

/// Authentication state seen by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl From<&SessionState> for AuthState {
    fn from(state: &SessionState) -> Self {
        if state.is_present() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthState::Unauthenticated => write!(f, "unauthenticated"),
            AuthState::Authenticated => write!(f, "authenticated"),
        }
    }
}

/// Outcome of a navigation check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The requested route may be shown
    Allow(Route),
    /// The requested route is not reachable; show `to` instead
    Redirect { requested: Route, to: Route },
}

impl RouteDecision {
    /// Route that ends up active
    pub fn destination(&self) -> Route {
        match self {
            RouteDecision::Allow(route) => *route,
            RouteDecision::Redirect { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, RouteDecision::Redirect { .. })
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteDecision::Allow(route) => write!(f, "allow {}", route),
            RouteDecision::Redirect { requested, to } => {
                write!(f, "redirect {} -> {}", requested, to)
            }
        }
    }
}

/// Decides which routes are reachable for an authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    login_route: Route,
    default_route: Route,
}

impl RouteGuard {
    /// Create a guard sending signed-in callers to `default_route`.
    ///
    /// A public `default_route` would let the guard bounce between views, so
    /// it falls back to [`Route::Home`].
    pub fn new(default_route: Route) -> Self {
        let default_route = if default_route.is_protected() {
            default_route
        } else {
            tracing::warn!(
                "Default route {} is not protected, using {}",
                default_route,
                Route::Home
            );
            Route::Home
        };
        Self {
            login_route: Route::Login,
            default_route,
        }
    }

    pub fn from_config(config: &NavigationConfig) -> Self {
        Self::new(config.default_route)
    }

    pub fn login_route(&self) -> Route {
        self.login_route
    }

    pub fn default_route(&self) -> Route {
        self.default_route
    }

    /// Where a caller in `state` lands after asking for `target`
    pub fn check(&self, state: AuthState, target: Route) -> RouteDecision {
        let to = match (state, target) {
            (AuthState::Unauthenticated, Route::Launch) => self.login_route,
            (AuthState::Authenticated, Route::Launch) => self.default_route,
            (AuthState::Unauthenticated, route) if route.is_protected() => self.login_route,
            (AuthState::Authenticated, route) if route == self.login_route => self.default_route,
            (_, route) => return RouteDecision::Allow(route),
        };
        tracing::debug!("Guard ({}) redirects {} to {}", state, target, to);
        RouteDecision::Redirect {
            requested: target,
            to,
        }
    }

    /// Whether `target` can be shown as-is in `state`
    pub fn permits(&self, state: AuthState, target: Route) -> bool {
        !self.check(state, target).is_redirect()
    }

    /// Redirect owed to the view `active` after the session moved to `state`
    pub fn on_transition(&self, state: AuthState, active: Route) -> Option<Route> {
        match self.check(state, active) {
            RouteDecision::Allow(_) => None,
            RouteDecision::Redirect { to, .. } => Some(to),
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_redirected_from_protected() {
        let guard = RouteGuard::default();
        for route in [Route::Home, Route::Profile, Route::Detail { course_id: 2 }] {
            assert_eq!(
                guard.check(AuthState::Unauthenticated, route),
                RouteDecision::Redirect {
                    requested: route,
                    to: Route::Login
                }
            );
        }
        assert!(guard.permits(AuthState::Unauthenticated, Route::Login));
    }

    #[test]
    fn test_authenticated_redirected_from_login() {
        let guard = RouteGuard::new(Route::Favorites);
        assert_eq!(
            guard.check(AuthState::Authenticated, Route::Login).destination(),
            Route::Favorites
        );
        assert!(guard.permits(AuthState::Authenticated, Route::Settings));
    }

    #[test]
    fn test_launch_always_resolves() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.check(AuthState::Unauthenticated, Route::Launch).destination(),
            Route::Login
        );
        assert_eq!(
            guard.check(AuthState::Authenticated, Route::Launch).destination(),
            Route::Home
        );
    }

    #[test]
    fn test_public_default_route_replaced() {
        assert_eq!(RouteGuard::new(Route::Login).default_route(), Route::Home);
    }

    #[test]
    fn test_transition_effects() {
        let guard = RouteGuard::default();
        assert_eq!(
            guard.on_transition(AuthState::Unauthenticated, Route::Settings),
            Some(Route::Login)
        );
        assert_eq!(
            guard.on_transition(AuthState::Authenticated, Route::Login),
            Some(Route::Home)
        );
        assert_eq!(guard.on_transition(AuthState::Authenticated, Route::Profile), None);
        assert_eq!(guard.on_transition(AuthState::Unauthenticated, Route::Login), None);
    }
}
