// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Base API client

use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use parking_lot::RwLock;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::config::ApiClientConfig;
use super::cookie::DocumentCookies;
use super::failure::ApiFailure;
use super::headers::{APPLICATION_JSON, CONTENT_TYPE};
use super::host::derive_host;
use super::options::RequestOptions;
use super::request::Request;
use super::response::Response;
use crate::environment::Environment;
use crate::error::{Error, Result};

/// Base client for the API.
///
/// Holds the derived host and the header options shared by every request.
/// Clones share the same options: a header set through one clone is sent by
/// requests issued afterwards from any clone. Requests already in flight keep
/// the headers they were sent with.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    host: String,
    options: Arc<RwLock<RequestOptions>>,
}

impl ApiClient {
    /// Create a client for the given page context with default configuration
    pub fn new(env: impl Environment) -> Result<Self> {
        Self::with_config(env, ApiClientConfig::default())
    }

    /// Create a client for the given page context with custom configuration
    pub fn with_config(env: impl Environment, config: ApiClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout);

        if let Some(ref proxy_url) = config.proxy {
            builder = builder.proxy(
                reqwest::Proxy::all(proxy_url)
                    .map_err(|e| Error::Config(format!("Invalid proxy URL: {}", e)))?,
            );
        }

        let client = builder.build()?;
        let host = derive_host(&env.hostname(), &config);

        let mut options = RequestOptions::new();
        match Self::api_key_from_cookie(&env.cookie(), &config.api_key_cookie) {
            Some(key) if !key.is_empty() => {
                options.set_header(config.api_key_cookie.clone(), key);
            }
            _ => tracing::debug!(cookie = %config.api_key_cookie, "No API key cookie"),
        }

        tracing::debug!(host = %host, "API client ready");

        Ok(Self {
            client,
            host,
            options: Arc::new(RwLock::new(options)),
        })
    }

    /// Read the API key cookie from a cookie string
    pub fn api_key_from_cookie(cookie_string: &str, name: &str) -> Option<String> {
        DocumentCookies::parse(cookie_string).get_decoded(name)
    }

    /// The API host requests are sent to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Snapshot of the current options
    pub fn options(&self) -> RequestOptions {
        self.options.read().clone()
    }

    /// Current value of a header
    pub fn header(&self, name: &str) -> Option<String> {
        self.options.read().header(name).map(str::to_string)
    }

    /// Set a header on all subsequent requests
    pub fn set_header(&self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        tracing::debug!(header = %name, "Setting header");
        self.options.write().set_header(name, value);
    }

    /// Stop sending a header
    pub fn remove_header(&self, name: &str) {
        if self.options.write().remove_header(name).is_some() {
            tracing::debug!(header = %name, "Removed header");
        }
    }

    /// Send `Content-Type: application/json` with subsequent requests
    pub fn add_content_type_header(&self) {
        self.set_header(CONTENT_TYPE, APPLICATION_JSON);
    }

    /// Stop sending `Content-Type`
    pub fn remove_content_type_header(&self) {
        self.remove_header(CONTENT_TYPE);
    }

    /// Drop every header, the API key included
    pub fn reset_options(&self) {
        *self.options.write() = RequestOptions::new();
        tracing::debug!("Options reset");
    }

    /// Log a failed call and reject it with its most specific message.
    ///
    /// Always returns `Err(Error::Rejected(_))`.
    pub fn handle_error<T>(&self, error: impl Into<Value>) -> Result<T> {
        let error = error.into();
        tracing::error!(error = %error, "An error occurred");
        Err(Error::Rejected(ApiFailure::from_value(error)))
    }

    /// Resolve a path against the host
    pub fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        let url = if path.is_empty() {
            self.host.clone()
        } else {
            format!("{}/{}", self.host.trim_end_matches('/'), path)
        };
        Ok(Url::parse(&url)?)
    }

    /// Execute a request with the current options, without normalizing failures
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let start = Instant::now();

        let mut headers = self.options.read().to_header_map()?;
        headers.extend(request.headers);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = builder.send().await?;
        let response_time = start.elapsed().as_millis() as u64;

        let final_url = response.url().clone();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        tracing::debug!(status = status.as_u16(), ms = response_time, "Response received");

        Response::new(status, headers, body, final_url, response_time).error_for_status()
    }

    /// Create a request builder for a path under the host
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        Ok(RequestBuilder {
            client: self.clone(),
            request: Request::new(method, self.url(path)?),
        })
    }

    /// GET a path and decode the JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::GET, path, None::<&()>).await
    }

    /// DELETE a path and decode the JSON response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::DELETE, path, None::<&()>).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, Some(body)).await
    }

    /// PUT a JSON body and decode the JSON response
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, path, Some(body)).await
    }

    /// PATCH a JSON body and decode the JSON response
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::PATCH, path, Some(body)).await
    }

    async fn call<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut builder = match self.request(method, path) {
            Ok(builder) => builder,
            Err(e) => return self.handle_error(e),
        };
        if let Some(body) = body {
            builder = match builder.json(body) {
                Ok(builder) => builder,
                Err(e) => return self.handle_error(e),
            };
        }
        builder.send_json().await
    }
}

/// Builder for executing requests with the client
pub struct RequestBuilder {
    client: ApiClient,
    request: Request,
}

impl RequestBuilder {
    /// Set a header for this request only
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Append query parameters
    pub fn query<K, V>(mut self, pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.request = self.request.query(pairs);
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.request = self.request.body(body);
        self
    }

    /// Set JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
        self.request = self.request.json(data)?;
        Ok(self)
    }

    /// Set timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.request = self.request.timeout(timeout);
        self
    }

    /// Execute the request. Failures go through `handle_error`.
    pub async fn send(self) -> Result<Response> {
        match self.client.execute(self.request).await {
            Ok(response) => Ok(response),
            Err(e) => self.client.handle_error(e),
        }
    }

    /// Execute the request and decode the JSON response
    pub async fn send_json<T: DeserializeOwned>(self) -> Result<T> {
        let client = self.client.clone();
        let result = client
            .execute(self.request)
            .await
            .and_then(|response| response.json());
        match result {
            Ok(value) => Ok(value),
            Err(e) => client.handle_error(e),
        }
    }
}
