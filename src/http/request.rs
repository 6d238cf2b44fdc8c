// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP request types

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use url::Url;

use super::headers::{APPLICATION_JSON, CONTENT_TYPE};
use crate::error::Result;

/// HTTP request representation
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method
    pub method: Method,
    /// Request URL
    pub url: Url,
    /// Per-request headers, applied on top of the client options
    pub headers: HeaderMap,
    /// Request body
    pub body: Option<Bytes>,
    /// Request timeout, overriding the client default
    pub timeout: Option<Duration>,
}

impl Request {
    /// Create a new request
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set a header. Names or values that are not valid HTTP are dropped.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        match (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = %name.as_ref(), "Dropping invalid request header"),
        }
        self
    }

    /// Append query parameters
    pub fn query<K, V>(mut self, pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !pairs.is_empty() {
            let mut query = self.url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key.as_ref(), value.as_ref());
            }
        }
        self
    }

    /// Set the request body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set JSON body, defaulting the content type to `application/json`
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        let json = serde_json::to_vec(data)?;
        self.body = Some(Bytes::from(json));
        if !self.has_content_type() {
            self = self.header(CONTENT_TYPE, APPLICATION_JSON);
        }
        Ok(self)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Whether the request sets its own content type
    pub fn has_content_type(&self) -> bool {
        self.headers.contains_key(CONTENT_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/api/items").unwrap()
    }

    #[test]
    fn test_request_headers() {
        let req = Request::new(Method::GET, url()).header("x-custom", "value");
        assert_eq!(
            req.headers.get("x-custom").map(|v| v.to_str().unwrap()),
            Some("value")
        );
    }

    #[test]
    fn test_invalid_header_dropped() {
        let req = Request::new(Method::GET, url()).header("bad header", "value");
        assert!(req.headers.is_empty());
    }

    #[test]
    fn test_query() {
        let req = Request::new(Method::GET, url()).query(&[("page", "2"), ("q", "a b")]);
        assert_eq!(req.url.as_str(), "https://example.com/api/items?page=2&q=a+b");
    }

    #[test]
    fn test_json_body() {
        let req = Request::new(Method::POST, url())
            .json(&serde_json::json!({ "name": "widget" }))
            .unwrap();
        assert_eq!(req.body.as_deref(), Some(&br#"{"name":"widget"}"#[..]));
        assert_eq!(
            req.headers.get("content-type").map(|v| v.to_str().unwrap()),
            Some("application/json")
        );
    }

    #[test]
    fn test_json_keeps_explicit_content_type() {
        let req = Request::new(Method::POST, url())
            .header("Content-Type", "application/merge-patch+json")
            .json(&serde_json::json!({}))
            .unwrap();
        assert_eq!(
            req.headers.get("content-type").map(|v| v.to_str().unwrap()),
            Some("application/merge-patch+json")
        );
    }
}
