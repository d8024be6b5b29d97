//! # Routes
//!
//! The navigation shell: two static screens addressed by path.
//!
//! ```text
//! /          → landing view
//! /chatbot   → chat view
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Landing,
    Chatbot,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Chatbot => "/chatbot",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError(pub String);

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route '{}' (expected '/' or '/chatbot')", self.0)
    }
}

impl std::error::Error for RouteError {}

/// Accepts either the path (`/`, `/chatbot`) or the bare name (`landing`, `chatbot`).
impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "/" | "landing" => Ok(Route::Landing),
            "/chatbot" | "chatbot" => Ok(Route::Chatbot),
            other => Err(RouteError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [Route::Landing, Route::Chatbot] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn names_parse() {
        assert_eq!("landing".parse::<Route>(), Ok(Route::Landing));
        assert_eq!("chatbot".parse::<Route>(), Ok(Route::Chatbot));
    }

    #[test]
    fn unknown_route_is_error() {
        let err = "/admin".parse::<Route>().unwrap_err();
        assert_eq!(err, RouteError("/admin".to_string()));
        assert!(err.to_string().contains("/chatbot"));
    }

    #[test]
    fn default_is_landing() {
        assert_eq!(Route::default(), Route::Landing);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrap {
            route: Route,
        }
        let w: Wrap = toml::from_str("route = \"chatbot\"").unwrap();
        assert_eq!(w.route, Route::Chatbot);
    }
}
