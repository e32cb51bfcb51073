//! Studygate - session store and route guard for a course-learning app
//!
//! This is the library interface for Studygate: the session store that owns
//! the signed-in user, the guard deciding which views are reachable, and the
//! course data the views render.

pub mod app;
pub mod auth;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod nav;
pub mod routes;

pub use app::AppContext;
pub use auth::{RouteGuard, SessionStore, User};
pub use config::Config;
pub use error::Error;
pub use routes::Route;
