//! Navigation routes of the app
//!
//! Routes mirror the app's file-based navigation tree: a launch view, the login
//! entry point, a tab group forming the protected area, and a course detail view
//! stacked on top of the tabs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A navigable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// Entry view shown while the session is resolved
    Launch,
    /// Login entry point
    Login,
    /// Home feed tab (default protected view)
    Home,
    /// Saved courses tab
    Favorites,
    /// Profile tab
    Profile,
    /// Settings tab
    Settings,
    /// Course detail, pushed above the tabs
    Detail { course_id: u32 },
}

impl Route {
    /// Every route with a fixed path, in tab order
    pub const STATIC: [Route; 6] = [
        Route::Launch,
        Route::Login,
        Route::Home,
        Route::Favorites,
        Route::Profile,
        Route::Settings,
    ];

    /// Whether the route belongs to the protected area
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Launch | Route::Login)
    }

    /// Whether the route is one of the bottom tabs
    pub fn is_tab(&self) -> bool {
        matches!(
            self,
            Route::Home | Route::Favorites | Route::Profile | Route::Settings
        )
    }

    /// Path of the route in the navigation tree
    pub fn path(&self) -> String {
        match self {
            Route::Launch => "/".to_string(),
            Route::Login => "/auth/login".to_string(),
            Route::Home => "/(tabs)".to_string(),
            Route::Favorites => "/(tabs)/favorites".to_string(),
            Route::Profile => "/(tabs)/profile".to_string(),
            Route::Settings => "/(tabs)/settings".to_string(),
            Route::Detail { course_id } => format!("/detail?id={}", course_id),
        }
    }

    /// Short human-readable name
    pub fn title(&self) -> &'static str {
        match self {
            Route::Launch => "Launch",
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Favorites => "Favorites",
            Route::Profile => "Profile",
            Route::Settings => "Settings",
            Route::Detail { .. } => "Detail",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (trimmed, None),
        };
        // "/(tabs)/" and "/(tabs)" name the same view
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "" | "/" => Ok(Route::Launch),
            "/auth/login" => Ok(Route::Login),
            "/(tabs)" | "/(tabs)/index" => Ok(Route::Home),
            "/(tabs)/favorites" => Ok(Route::Favorites),
            "/(tabs)/profile" => Ok(Route::Profile),
            "/(tabs)/settings" => Ok(Route::Settings),
            "/detail" => {
                let course_id = query
                    .into_iter()
                    .flat_map(|q| q.split('&'))
                    .find_map(|pair| pair.strip_prefix("id="))
                    .and_then(|id| id.parse::<u32>().ok())
                    .ok_or_else(|| Error::UnknownRoute(trimmed.to_string()))?;
                Ok(Route::Detail { course_id })
            }
            _ => Err(Error::UnknownRoute(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for Route {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path()
    }
}
