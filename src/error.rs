// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the API client
//!
//! Transport, URL and decoding failures keep their source error. Failed API
//! calls surface as [`Error::Rejected`] once they have been through
//! [`ApiClient::handle_error`](crate::ApiClient::handle_error).

use serde_json::{json, Value};
use thiserror::Error;

use crate::http::ApiFailure;

/// Result type alias for API client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the API client
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Header name or value that cannot go on the wire
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// Server answered with a non-2xx status
    #[error("{message}")]
    Status {
        status: u16,
        url: String,
        message: String,
        /// Parsed response body (JSON if possible, string otherwise, null if empty)
        body: Value,
    },

    /// Failure normalized by `handle_error`
    #[error("{0}")]
    Rejected(ApiFailure),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid header error
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a status error in the shape an HTTP front-end framework reports it
    pub fn status(status: reqwest::StatusCode, url: impl Into<String>, body: Value) -> Self {
        let url = url.into();
        let message = format!(
            "Http failure response for {}: {} {}",
            url,
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        );
        Error::Status {
            status: status.as_u16(),
            url,
            message: message.trim_end().to_string(),
            body,
        }
    }

    /// Get HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Status { url, .. } => Some(url),
            Error::Http(e) => e.url().map(|u| u.as_str()),
            _ => None,
        }
    }

    /// Check if this is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        self.status_code()
            .map_or(false, |s| (400..500).contains(&s))
    }

    /// Check if this is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        self.status_code()
            .map_or(false, |s| (500..600).contains(&s))
    }

    /// Check if this failure already went through `handle_error`
    pub fn is_rejected(&self) -> bool {
        matches!(self, Error::Rejected(_))
    }

    /// Render the error as the loosely-typed value `handle_error` inspects.
    ///
    /// Status errors carry the response body under `error`, so a server
    /// supplied `{"message": ...}` ends up at `error.message`.
    pub fn to_failure_value(&self) -> Value {
        match self {
            Error::Status {
                status,
                url,
                message,
                body,
            } => json!({
                "status": status,
                "url": url,
                "message": message,
                "error": body,
            }),
            Error::Rejected(failure) => failure.reason().clone(),
            other => json!({ "message": other.to_string() }),
        }
    }
}

impl From<Error> for Value {
    fn from(error: Error) -> Self {
        error.to_failure_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_error() {
        let err = Error::status(
            StatusCode::FORBIDDEN,
            "https://example.com/api/items",
            Value::Null,
        );

        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.url(), Some("https://example.com/api/items"));
        assert_eq!(
            err.to_string(),
            "Http failure response for https://example.com/api/items: 403 Forbidden"
        );
    }

    #[test]
    fn test_failure_value_nests_body() {
        let err = Error::status(
            StatusCode::INTERNAL_SERVER_ERROR,
            "https://example.com/api",
            json!({ "message": "boom" }),
        );
        let value = err.to_failure_value();

        assert_eq!(value["status"], 500);
        assert_eq!(value["error"]["message"], "boom");
        assert!(err.is_server_error());
    }

    #[test]
    fn test_failure_value_plain_error() {
        let err = Error::config("bad proxy");
        assert_eq!(
            err.to_failure_value(),
            json!({ "message": "Configuration error: bad proxy" })
        );
    }
}
