// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Header bag shared by every request a client issues

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options attached to outgoing requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Header name to value, one value per name, ordered by name
    pub headers: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Create options with no headers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any previous value
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Remove a header, returning its value if it was set
    pub fn remove_header(&mut self, name: &str) -> Option<String> {
        self.headers.remove(name)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Convert to a wire header map
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut map = HeaderMap::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            let header_name = HeaderName::try_from(name.as_str())
                .map_err(|e| Error::invalid_header(name, e))?;
            let header_value = HeaderValue::try_from(value.as_str())
                .map_err(|e| Error::invalid_header(name, e))?;
            map.insert(header_name, header_value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut options = RequestOptions::new();
        options.set_header("x-custom", "one");
        options.set_header("x-custom", "two");
        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.header("x-custom"), Some("two"));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut options = RequestOptions::new();
        assert!(options.remove_header("Content-Type").is_none());
        assert!(options.headers.is_empty());
    }

    #[test]
    fn test_to_header_map() {
        let mut options = RequestOptions::new();
        options.set_header("Content-Type", "application/json");
        options.set_header("x-api-key", "secret");

        let map = options.to_header_map().unwrap();
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("x-api-key").unwrap(), "secret");
    }

    #[test]
    fn test_invalid_header_value() {
        let mut options = RequestOptions::new();
        options.set_header("x-api-key", "line\nbreak");

        match options.to_header_map() {
            Err(Error::InvalidHeader { name, .. }) => assert_eq!(name, "x-api-key"),
            other => panic!("Expected InvalidHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_serialized_headers_are_sorted() {
        let mut options = RequestOptions::new();
        options.set_header("x-api-key", "k");
        options.set_header("Content-Type", "application/json");
        options.set_header("Accept", "*/*");

        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"headers":{"Accept":"*/*","Content-Type":"application/json","x-api-key":"k"}}"#
        );
    }

    #[test]
    fn test_serializes_as_headers_object() {
        let mut options = RequestOptions::new();
        options.set_header("x-api-key", "k");
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "headers": { "x-api-key": "k" } }));
    }
}
