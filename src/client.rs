//! High-level client — `TokenListClient` with nested sub-client accessors.
//!
//! The token repository lives in `domain/token/client.rs`.
//! This module keeps the builder, the endpoint configuration, and the accessor.

use crate::domain::token::client::Tokens;
use crate::error::HttpError;
use crate::http::{RestClient, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_CONTENT_TYPE, DEFAULT_TIMEOUT_SECS, TOKENS_PATH};

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::token::client::Tokens as TokensClient;

/// Endpoint configuration shared by every sub-client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub tokens_path: String,
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), DEFAULT_CONTENT_TYPE.to_string());
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            tokens_path: TOKENS_PATH.to_string(),
            headers,
        }
    }
}

/// The primary entry point for the token list API.
///
/// Cheap to clone; clones share the transport and configuration.
pub struct TokenListClient<T: Transport = RestClient> {
    pub(crate) transport: T,
    pub(crate) config: Arc<ClientConfig>,
}

impl TokenListClient {
    pub fn builder() -> TokenListClientBuilder {
        TokenListClientBuilder::default()
    }
}

impl<T: Transport> TokenListClient<T> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_, T> {
        Tokens { client: self }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: Transport + Clone> Clone for TokenListClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct TokenListClientBuilder {
    config: ClientConfig,
    timeout: Duration,
}

impl Default for TokenListClientBuilder {
    fn default() -> Self {
        Self {
            config: ClientConfig::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl TokenListClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn tokens_path(mut self, path: &str) -> Self {
        self.config.tokens_path = path.to_string();
        self
    }

    /// Add or replace a header sent with every request.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.config.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<TokenListClient, HttpError> {
        let transport = RestClient::builder().timeout(self.timeout).build()?;
        Ok(self.build_with_transport(transport))
    }

    /// Build around a caller-supplied transport. The timeout setting is ignored.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> TokenListClient<T> {
        TokenListClient {
            transport,
            config: Arc::new(self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = TokenListClient::builder().build().unwrap();
        let config = client.config();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.tokens_path, TOKENS_PATH);
        assert_eq!(
            config.headers.get("Content-Type").map(String::as_str),
            Some(DEFAULT_CONTENT_TYPE)
        );
    }

    #[test]
    fn test_builder_overrides() {
        let client = TokenListClient::builder()
            .base_url("http://127.0.0.1:8080/")
            .tokens_path("tokens.json")
            .header("Accept", "application/json")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let req = client.tokens().request();
        assert_eq!(req.raw_url(), "http://127.0.0.1:8080/tokens.json");
        assert_eq!(req.headers().get("Accept").unwrap(), "application/json");
        assert_eq!(req.headers().len(), 2);
    }

    #[test]
    fn test_clone_shares_config() {
        let client = TokenListClient::builder().build().unwrap();
        let cloned = client.clone();
        assert!(Arc::ptr_eq(&client.config, &cloned.config));
    }
}
