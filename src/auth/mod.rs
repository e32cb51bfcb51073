//! Authentication and session management

pub mod guard;
pub mod models;
pub mod session;
pub mod verifier;

pub use guard::{AuthState, RouteDecision, RouteGuard};
pub use models::{LoginRequest, User, UserInfo};
pub use session::{Session, SessionState, SessionStore};
pub use verifier::{validate_credentials, CredentialVerifier, MockVerifier};
