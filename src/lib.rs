// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # api-base - Base API Client
//!
//! Shared plumbing for the clients of an HTTP API served next to a web
//! front-end.
//!
//! ## Features
//!
//! - Host detection: `localhost` talks to `http://localhost:8080/api`, any
//!   other hostname to `https://{hostname}/api`
//! - API key: picked up from the `x-api-key` cookie and sent as a header
//! - Shared options: one header bag for every request issued by a client
//! - Uniform failures: every failed call is logged and rejected with the most
//!   specific message available
//!
//! ## Example
//!
//! ```rust,no_run
//! use api_base::{ApiClient, StaticEnvironment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let env = StaticEnvironment::new("example.com").cookie("x-api-key=secret");
//!     let api = ApiClient::new(env)?;
//!
//!     api.add_content_type_header();
//!     let items: serde_json::Value = api.get("/items").await?;
//!     println!("{}", items);
//!
//!     Ok(())
//! }
//! ```

pub mod environment;
pub mod error;
pub mod http;

// Re-exports for convenience

// Client
pub use http::{ApiClient, ApiClientConfig, RequestBuilder};

// Options and failures
pub use http::{ApiFailure, RequestOptions};

// Wire types
pub use http::{Cookie, DocumentCookies, Request, Response};

// Page context
pub use environment::{Environment, ProcessEnvironment, StaticEnvironment};

// Errors
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
