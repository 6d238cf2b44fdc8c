// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Normalization of failed API calls

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a failed call after normalization.
///
/// Carries the most specific message available: the server supplied
/// `error.message`, then the client side `message`, then the failure value
/// exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFailure {
    reason: Value,
}

impl ApiFailure {
    /// Normalize an arbitrary failure value
    pub fn from_value(error: Value) -> Self {
        let nested = error
            .get("error")
            .filter(|inner| is_truthy(inner))
            .and_then(|inner| inner.get("message"))
            .filter(|message| is_truthy(message))
            .cloned();
        let top_level = error
            .get("message")
            .filter(|message| is_truthy(message))
            .cloned();

        Self {
            reason: nested.or(top_level).unwrap_or(error),
        }
    }

    /// The carried reason, as extracted
    pub fn reason(&self) -> &Value {
        &self.reason
    }

    /// The carried reason as text
    pub fn message(&self) -> String {
        match &self.reason {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<Value> for ApiFailure {
    fn from(value: Value) -> Self {
        ApiFailure::from_value(value)
    }
}

/// Loose truthiness: null, false, zero and the empty string are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_message_wins() {
        let failure = ApiFailure::from_value(json!({
            "error": { "message": "m1" },
            "message": "m2",
        }));
        assert_eq!(failure.message(), "m1");
    }

    #[test]
    fn test_top_level_message() {
        let failure = ApiFailure::from_value(json!({ "message": "m2" }));
        assert_eq!(failure.message(), "m2");
    }

    #[test]
    fn test_raw_value_passes_through() {
        let failure = ApiFailure::from_value(json!("raw"));
        assert_eq!(failure.reason(), &json!("raw"));
        assert_eq!(failure.to_string(), "raw");
    }

    #[test]
    fn test_nested_without_message_falls_back() {
        let failure = ApiFailure::from_value(json!({
            "error": "Not Found",
            "message": "Http failure response for /api/x: 404 Not Found",
        }));
        assert_eq!(
            failure.message(),
            "Http failure response for /api/x: 404 Not Found"
        );
    }

    #[test]
    fn test_empty_messages_are_skipped() {
        let failure = ApiFailure::from_value(json!({
            "error": { "message": "" },
            "message": "client",
        }));
        assert_eq!(failure.message(), "client");

        let value = json!({ "error": null, "message": "" });
        let failure = ApiFailure::from_value(value.clone());
        assert_eq!(failure.reason(), &value);
    }

    #[test]
    fn test_non_string_reason() {
        let failure = ApiFailure::from_value(json!({ "message": 42 }));
        assert_eq!(failure.reason(), &json!(42));
        assert_eq!(failure.message(), "42");
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("x")));
    }
}
