//! Error types for Studygate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("A login is already in progress")]
    LoginInProgress,

    #[error("Login cancelled: the session was ended while signing in")]
    LoginCancelled,

    #[error("No active session")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Course {0} not found")]
    CourseNotFound(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Config file not found. Run 'studygate init' first.")]
    ConfigNotFound,

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error is recovered locally by the session store
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            Error::Validation(_)
                | Error::Authentication(_)
                | Error::LoginInProgress
                | Error::LoginCancelled
        )
    }

    /// Message suitable for showing to the person at the login screen
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation(_) => "Please fill in all fields".to_string(),
            Error::Authentication(_) => "Invalid credentials".to_string(),
            Error::LoginInProgress => "Logging in...".to_string(),
            Error::LoginCancelled => "Login cancelled".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            Error::Validation("email is empty".into()).user_message(),
            "Please fill in all fields"
        );
        assert_eq!(
            Error::Authentication("rejected".into()).user_message(),
            "Invalid credentials"
        );
        assert_eq!(Error::LoginCancelled.user_message(), "Login cancelled");
    }

    #[test]
    fn test_login_failure_classification() {
        assert!(Error::Validation(String::new()).is_login_failure());
        assert!(Error::LoginInProgress.is_login_failure());
        assert!(Error::LoginCancelled.is_login_failure());
        assert!(!Error::ConfigNotFound.is_login_failure());
    }
}
