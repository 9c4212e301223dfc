//! Tokens sub-client — the token list repository.

use crate::client::TokenListClient;
use crate::domain::token::wire::TokensResponse;
use crate::domain::token::{Token, TokenSource};
use crate::error::HttpError;
use crate::http::{codec, ApiRequest, RestClient, Transport};

/// Sub-client for token list operations. Holds no state of its own.
pub struct Tokens<'a, T: Transport = RestClient> {
    pub(crate) client: &'a TokenListClient<T>,
}

impl<'a, T: Transport> Tokens<'a, T> {
    /// The fixed descriptor for the token list endpoint.
    pub fn request(&self) -> ApiRequest {
        let config = &self.client.config;
        ApiRequest::get(config.base_url.as_str(), config.tokens_path.as_str())
            .with_headers(config.headers.clone())
    }

    /// Fetch every listed token, in API order.
    ///
    /// One round trip per call; transport and decode errors surface unchanged.
    pub async fn load_tokens(&self) -> Result<Vec<Token>, HttpError> {
        let request = self.request();
        let bytes = self.client.transport.send(&request).await?;
        let resp: TokensResponse = codec::decode(&bytes)?;
        tracing::debug!(count = resp.tokens.len(), "Decoded token list");
        Ok(resp.into())
    }
}

impl<T: Transport> TokenSource for TokenListClient<T> {
    async fn load_tokens(&self) -> Result<Vec<Token>, HttpError> {
        self.tokens().load_tokens().await
    }
}
