//! Configuration schema definitions

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::routes::Route;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl Config {
    /// Check values serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !self.navigation.default_route.is_protected() {
            return Err(Error::Config(format!(
                "navigation.default_route must be inside the protected area, got '{}'",
                self.navigation.default_route
            )));
        }
        if self.auth.fallback_name.trim().is_empty() {
            return Err(Error::Config(
                "auth.fallback_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Session store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Simulated latency of a login attempt
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Display name used when the email has no usable local part
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
}

fn default_login_delay_ms() -> u64 {
    1000
}

fn default_fallback_name() -> String {
    "Student".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: default_login_delay_ms(),
            fallback_name: default_fallback_name(),
        }
    }
}

/// Navigation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// View shown after a successful login
    #[serde(default = "default_route")]
    pub default_route: Route,
}

fn default_route() -> Route {
    Route::Home
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_route: default_route(),
        }
    }
}
