//! Low-level HTTP client — `RestClient`.
//!
//! Turns an [`ApiRequest`] into exactly one network round trip and returns the
//! raw body bytes. Decoding into typed records happens one layer up.

use crate::error::HttpError;
use crate::http::codec;
use crate::http::request::{ApiRequest, Method};
use crate::http::Transport;
use crate::network::DEFAULT_TIMEOUT_SECS;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// REST transport backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
}

impl RestClient {
    /// A client with the default timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::builder().build()
    }

    pub fn builder() -> RestClientBuilder {
        RestClientBuilder::default()
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Vec<u8>, HttpError> {
        let url = build_url(request)?;
        let headers = build_headers(request)?;

        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut req = self.client.request(method, url.clone()).headers(headers);

        if let Some(body) = request.body() {
            let payload = codec::encode(body)?;
            if !request
                .headers()
                .keys()
                .any(|name| name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()))
            {
                req = req.header(CONTENT_TYPE, "application/json");
            }
            req = req.body(payload);
        }

        tracing::debug!(method = %request.method(), url = %url, "Sending request");

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status != StatusCode::OK {
            tracing::warn!(
                status = status.as_u16(),
                url = %url,
                body = %String::from_utf8_lossy(&bytes),
                "Request rejected"
            );
            return Err(api_error(status, &bytes));
        }

        tracing::debug!(bytes = bytes.len(), url = %url, "Received response");
        Ok(bytes.to_vec())
    }
}

impl Transport for RestClient {
    async fn send(&self, request: &ApiRequest) -> Result<Vec<u8>, HttpError> {
        self.execute(request).await
    }
}

/// Validate `base_url + path` and append the encoded query parameters.
pub fn build_url(request: &ApiRequest) -> Result<Url, HttpError> {
    let raw = request.raw_url();
    let mut url = Url::parse(&raw)
        .map_err(|e| HttpError::InvalidRequest(format!("{}: {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(HttpError::InvalidRequest(format!(
            "{}: not a hierarchical URL",
            raw
        )));
    }

    let pairs = request.query_pairs();
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in &pairs {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// A body that is not valid UTF-8 is reported as empty.
fn api_error(status: StatusCode, bytes: &[u8]) -> HttpError {
    HttpError::Api {
        status: status.as_u16(),
        body: String::from_utf8(bytes.to_vec()).unwrap_or_default(),
    }
}

fn build_headers(request: &ApiRequest) -> Result<HeaderMap, HttpError> {
    let mut headers = HeaderMap::with_capacity(request.headers().len());
    for (name, value) in request.headers() {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HttpError::InvalidRequest(format!("header name {:?}: {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| HttpError::InvalidRequest(format!("header {}: {}", name, e)))?;
        headers.append(name, value);
    }
    Ok(headers)
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct RestClientBuilder {
    timeout: Duration,
    pool_max_idle_per_host: usize,
}

impl Default for RestClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            pool_max_idle_per_host: 10,
        }
    }
}

impl RestClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = max;
        self
    }

    pub fn build(self) -> Result<RestClient, HttpError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build()?;
        Ok(RestClient { client })
    }
}
