// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! API host detection from the page hostname

use super::config::ApiClientConfig;

/// Derive the API host for a page served from `hostname`.
///
/// The development hostname talks plain HTTP to `local_port`; every other
/// hostname is assumed to serve the API over HTTPS on the same origin.
///
/// ```
/// use api_base::http::{derive_host, ApiClientConfig};
///
/// let config = ApiClientConfig::default();
/// assert_eq!(derive_host("localhost", &config), "http://localhost:8080/api");
/// assert_eq!(derive_host("example.com", &config), "https://example.com/api");
/// ```
pub fn derive_host(hostname: &str, config: &ApiClientConfig) -> String {
    if hostname == config.local_hostname {
        format!(
            "http://{}:{}{}",
            hostname, config.local_port, config.api_path
        )
    } else {
        format!("https://{}{}", hostname, config.api_path)
    }
}
