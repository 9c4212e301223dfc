//! HTTP layer — request descriptors, strict codec, and the `Transport` seam.

#[cfg(feature = "http")]
pub mod client;
pub mod codec;
pub mod request;

#[cfg(feature = "http")]
pub use client::{RestClient, RestClientBuilder};
pub use request::{ApiRequest, Method, Params};

use crate::error::HttpError;
use std::future::Future;

/// Executes an [`ApiRequest`] and returns the raw body of a 200 response.
///
/// Implementations send exactly once: no retry, no caching.
pub trait Transport: Send + Sync + 'static {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<Vec<u8>, HttpError>> + Send;
}
