// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Parsing of `document.cookie` style strings

use serde::{Deserialize, Serialize};

/// A single `name=value` pair from a cookie string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Raw (still percent-encoded) value
    pub value: String,
}

impl Cookie {
    /// Create a new cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse one entry of a cookie string.
    ///
    /// Splits on the first `=` only, so values may themselves contain `=`.
    /// Entries without any `=` yield `None`.
    pub fn parse(entry: &str) -> Option<Self> {
        let (name, value) = entry.trim().split_once('=')?;
        Some(Cookie::new(name, value))
    }

    /// Percent-decoded value.
    ///
    /// `None` if an escape is not `%` followed by two hex digits, or if the
    /// decoded bytes are not UTF-8.
    pub fn decoded_value(&self) -> Option<String> {
        if has_malformed_escape(&self.value) {
            return None;
        }
        urlencoding::decode(&self.value)
            .ok()
            .map(|v| v.into_owned())
    }
}

/// Cookies visible to the page, in the order they appear in the cookie string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentCookies {
    cookies: Vec<Cookie>,
}

impl DocumentCookies {
    /// Parse a cookie string (`a=1; b=2`)
    pub fn parse(cookie_string: &str) -> Self {
        Self {
            cookies: cookie_string.split(';').filter_map(Cookie::parse).collect(),
        }
    }

    /// First cookie with the given name
    pub fn get(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }

    /// Percent-decoded value of the first cookie with the given name.
    ///
    /// A value with a malformed escape or one that does not decode to UTF-8
    /// is logged and treated as absent.
    pub fn get_decoded(&self, name: &str) -> Option<String> {
        let cookie = self.get(name)?;
        let decoded = cookie.decoded_value();
        if decoded.is_none() {
            tracing::warn!(cookie = %name, "Ignoring cookie with undecodable value");
        }
        decoded
    }

    /// Get total cookie count
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Check if there are no cookies
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

fn has_malformed_escape(value: &str) -> bool {
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return true,
            }
        } else {
            i += 1;
        }
    }
    false
}
