// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Ambient page context
//!
//! The client never reaches for globals. Whatever plays the role of the
//! browser window (a real page, a test fixture, the process environment)
//! hands over the current hostname and cookie string through [`Environment`].

/// Env var read by [`ProcessEnvironment`] for the page hostname
pub const HOSTNAME_VAR: &str = "API_HOSTNAME";

/// Env var read by [`ProcessEnvironment`] for the cookie string
pub const COOKIE_VAR: &str = "API_COOKIE";

/// Source of the ambient inputs read once when a client is constructed
pub trait Environment {
    /// Hostname of the current page (no scheme, no port)
    fn hostname(&self) -> String;

    /// Raw cookie string, `document.cookie` style (`a=1; b=2`)
    fn cookie(&self) -> String;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn hostname(&self) -> String {
        (**self).hostname()
    }

    fn cookie(&self) -> String {
        (**self).cookie()
    }
}

/// Fixed hostname and cookie string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    hostname: String,
    cookie: String,
}

impl StaticEnvironment {
    /// Create an environment for the given hostname with no cookies
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            cookie: String::new(),
        }
    }

    /// Set the cookie string
    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = cookie.into();
        self
    }
}

impl Environment for StaticEnvironment {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn cookie(&self) -> String {
        self.cookie.clone()
    }
}

/// Reads `API_HOSTNAME` (default `localhost`) and `API_COOKIE` (default empty)
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn hostname(&self) -> String {
        std::env::var(HOSTNAME_VAR)
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| "localhost".to_string())
    }

    fn cookie(&self) -> String {
        std::env::var(COOKIE_VAR).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_environment() {
        let env = StaticEnvironment::new("example.com").cookie("a=1; b=2");
        assert_eq!(env.hostname(), "example.com");
        assert_eq!(Environment::cookie(&env), "a=1; b=2");
    }

    #[test]
    fn test_static_environment_defaults_to_no_cookie() {
        let env = StaticEnvironment::new("localhost");
        assert!(Environment::cookie(&env).is_empty());
    }

    #[test]
    fn test_environment_by_reference() {
        fn host_of(env: impl Environment) -> String {
            env.hostname()
        }

        let env = StaticEnvironment::new("api.internal");
        assert_eq!(host_of(&env), "api.internal");
    }
}
