//! Application context handed to views
//!
//! Owns the session store, the navigator and the course data for one running
//! app. A fresh context starts signed out. The library belongs to one session:
//! it is created when a session starts and dropped when that session ends.

use std::sync::Arc;

use crate::auth::{
    CredentialVerifier, MockVerifier, RouteDecision, RouteGuard, SessionState, SessionStore, User,
};
use crate::catalog::{Catalog, Course, CourseFilter, Library};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::nav::{LoginOutcome, Navigator};
use crate::routes::Route;

pub struct AppContext {
    config: Config,
    navigator: Navigator,
    catalog: Catalog,
    library: Option<Library>,
    /// Session the library was created for
    library_session: Option<String>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self::with_verifier(config, Arc::new(MockVerifier))
    }

    pub fn with_verifier(config: Config, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let store = SessionStore::with_verifier(&config.auth, verifier);
        let guard = RouteGuard::from_config(&config.navigation);
        Self {
            navigator: Navigator::new(store, guard),
            catalog: Catalog::builtin(),
            library: None,
            library_session: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionStore {
        self.navigator.store()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session().current_user()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> LoginOutcome {
        let outcome = self.navigator.login(email, password).await;
        self.attach_library();
        outcome
    }

    pub fn logout(&mut self) -> Option<RouteDecision> {
        let decision = self.navigator.logout();
        self.attach_library();
        decision
    }

    /// Pick up session changes made through another handle to the store
    pub fn sync(&mut self) -> Option<RouteDecision> {
        let decision = self.navigator.sync();
        self.attach_library();
        decision
    }

    /// Match the library to the current session: a new session gets a fresh
    /// library, no session gets none.
    fn attach_library(&mut self) {
        let state = self.session().session();
        match state {
            SessionState::Present(session) => {
                if self.library_session.as_deref() != Some(session.id.as_str()) {
                    tracing::debug!("New library for session {}", session.id);
                    self.library = Some(Library::new());
                    self.library_session = Some(session.id);
                }
            }
            SessionState::Absent => {
                self.library = None;
                self.library_session = None;
            }
        }
    }

    pub fn navigate(&mut self, route: Route) -> Result<RouteDecision> {
        if let Route::Detail { course_id } = route {
            return self.open_course(course_id);
        }
        Ok(self.navigator.navigate(route))
    }

    /// Push the detail view for a course
    pub fn open_course(&mut self, course_id: u32) -> Result<RouteDecision> {
        if self.session().is_authenticated() {
            self.catalog.find(course_id)?;
        }
        Ok(self.navigator.push(Route::Detail { course_id }))
    }

    /// Course shown by the active detail view
    pub fn current_course(&self) -> Option<&Course> {
        match self.current_route() {
            Route::Detail { course_id } => self.catalog.find(course_id).ok(),
            _ => None,
        }
    }

    /// Home feed contents for a search
    pub fn search(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.catalog.search(filter)
    }

    pub fn library(&self) -> Result<&Library> {
        self.library.as_ref().ok_or(Error::NotAuthenticated)
    }

    pub fn library_mut(&mut self) -> Result<&mut Library> {
        self.library.as_mut().ok_or(Error::NotAuthenticated)
    }

    pub fn toggle_favorite(&mut self, course_id: u32) -> Result<bool> {
        let library = self.library.as_mut().ok_or(Error::NotAuthenticated)?;
        library.toggle_favorite(&self.catalog, course_id)
    }

    pub fn toggle_download(&mut self, course_id: u32) -> Result<bool> {
        let library = self.library.as_mut().ok_or(Error::NotAuthenticated)?;
        library.toggle_download(&self.catalog, course_id)
    }

    pub fn set_progress(&mut self, course_id: u32, percent: u8) -> Result<u8> {
        let library = self.library.as_mut().ok_or(Error::NotAuthenticated)?;
        library.set_progress(&self.catalog, course_id, percent)
    }

    /// Favorite courses, in catalog order
    pub fn favorites(&self) -> Result<Vec<&Course>> {
        Ok(self.library()?.favorites(&self.catalog))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> AppContext {
        let mut config = Config::default();
        config.auth.login_delay_ms = 0;
        AppContext::new(config)
    }

    #[tokio::test]
    async fn test_library_follows_session() {
        let mut app = context();
        assert!(matches!(app.library(), Err(Error::NotAuthenticated)));

        app.login("a@b.com", "x").await;
        assert!(app.toggle_favorite(2).unwrap());
        assert_eq!(app.favorites().unwrap().len(), 3);

        app.logout();
        assert!(app.toggle_favorite(2).is_err());
    }

    #[tokio::test]
    async fn test_open_unknown_course() {
        let mut app = context();
        app.login("a@b.com", "x").await;
        assert!(matches!(app.open_course(99), Err(Error::CourseNotFound(99))));
        assert_eq!(app.current_route(), Route::Home);
    }

    #[tokio::test]
    async fn test_current_course() {
        let mut app = context();
        app.login("a@b.com", "x").await;
        app.navigate(Route::Detail { course_id: 2 }).unwrap();
        assert_eq!(app.current_course().unwrap().title, "UI/UX Design Fundamentals");
    }
}
