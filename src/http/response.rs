// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{Error, Result};

/// Buffered API response
#[derive(Debug, Clone)]
pub struct Response {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
    /// Final URL (after redirects)
    pub url: Url,
    /// Response time in milliseconds
    pub response_time_ms: u64,
}

impl Response {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        response_time_ms: u64,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            response_time_ms,
        }
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.body.to_vec()).map_err(|e| Error::Other(e.to_string()))
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse body as JSON. An empty body decodes as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return serde_json::from_value(Value::Null).map_err(Error::from);
        }
        serde_json::from_slice(&self.body).map_err(Error::from)
    }

    /// Body as a loose value: JSON if it parses, a string otherwise, null if empty
    pub fn body_value(&self) -> Value {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(&self.body).unwrap_or_else(|_| Value::String(self.text_lossy()))
    }

    /// Turn a non-2xx response into [`Error::Status`]
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::status(self.status, self.url.as_str(), self.body_value()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(
            status,
            HeaderMap::new(),
            Bytes::from(body),
            Url::parse("https://example.com/api/items").unwrap(),
            12,
        )
    }

    #[test]
    fn test_response_status() {
        let resp = response(StatusCode::OK, "");
        assert!(resp.is_success());
        assert_eq!(resp.status_code(), 200);
    }

    #[test]
    fn test_json_body() {
        let resp = response(StatusCode::OK, r#"{"id": 7}"#);
        let value: Value = resp.json().unwrap();
        assert_eq!(value, json!({ "id": 7 }));
    }

    #[test]
    fn test_empty_body_is_null() {
        let resp = response(StatusCode::NO_CONTENT, "");
        assert!(resp.json::<()>().is_ok());
        assert!(resp.json::<Option<u32>>().unwrap().is_none());
        assert_eq!(resp.body_value(), Value::Null);
    }

    #[test]
    fn test_body_value_falls_back_to_text() {
        let resp = response(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(resp.body_value(), json!("upstream down"));
    }

    #[test]
    fn test_error_for_status() {
        let err = response(StatusCode::NOT_FOUND, r#"{"message": "no such item"}"#)
            .error_for_status()
            .unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_failure_value()["error"]["message"], "no such item");
    }
}
