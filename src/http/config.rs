// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API client configuration

use std::time::Duration;

use super::DEFAULT_USER_AGENT;

/// Hostname that selects the plain-HTTP development host
pub const LOCAL_HOSTNAME: &str = "localhost";

/// Port of the development API server
pub const LOCAL_PORT: u16 = 8080;

/// Path prefix of every API endpoint
pub const API_PATH: &str = "/api";

/// Cookie carrying the API key
pub const API_KEY_COOKIE: &str = "x-api-key";

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Default timeout
    pub timeout: Duration,
    /// Hostname served over plain HTTP on `local_port`
    pub local_hostname: String,
    /// Port used for `local_hostname`
    pub local_port: u16,
    /// Path appended to the host
    pub api_path: String,
    /// Name of the cookie (and header) holding the API key
    pub api_key_cookie: String,
    /// Proxy URL
    pub proxy: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            local_hostname: LOCAL_HOSTNAME.to_string(),
            local_port: LOCAL_PORT,
            api_path: API_PATH.to_string(),
            api_key_cookie: API_KEY_COOKIE.to_string(),
            proxy: None,
        }
    }
}

impl ApiClientConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the development hostname and port
    pub fn local(mut self, hostname: impl Into<String>, port: u16) -> Self {
        self.local_hostname = hostname.into();
        self.local_port = port;
        self
    }

    /// Set the API path prefix
    pub fn api_path(mut self, path: impl Into<String>) -> Self {
        self.api_path = path.into();
        self
    }

    /// Set the API key cookie name
    pub fn api_key_cookie(mut self, name: impl Into<String>) -> Self {
        self.api_key_cookie = name.into();
        self
    }

    /// Set proxy
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiClientConfig::default();
        assert_eq!(config.local_hostname, "localhost");
        assert_eq!(config.local_port, 8080);
        assert_eq!(config.api_path, "/api");
        assert_eq!(config.api_key_cookie, "x-api-key");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.proxy.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ApiClientConfig::new()
            .local("127.0.0.1", 3000)
            .api_path("/v2")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.local_hostname, "127.0.0.1");
        assert_eq!(config.local_port, 3000);
        assert_eq!(config.api_path, "/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
