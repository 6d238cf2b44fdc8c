// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer of the API client
//!
//! Host detection, cookie parsing, the shared header bag and error
//! normalization, plus the `reqwest` based client that ties them together.

mod client;
mod config;
mod cookie;
mod failure;
mod host;
mod options;
mod request;
mod response;

pub use client::{ApiClient, RequestBuilder};
pub use config::{ApiClientConfig, API_KEY_COOKIE, API_PATH, LOCAL_HOSTNAME, LOCAL_PORT};
pub use cookie::{Cookie, DocumentCookies};
pub use failure::ApiFailure;
pub use host::derive_host;
pub use options::RequestOptions;
pub use request::Request;
pub use response::Response;

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("api-base/", env!("CARGO_PKG_VERSION"));

/// Header names and values the client sets itself
pub mod headers {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const API_KEY: &str = "x-api-key";
    pub const APPLICATION_JSON: &str = "application/json";
}
