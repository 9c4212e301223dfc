//! # Token List SDK
//!
//! Fetches the token list from the REST API and projects it into an
//! observable, section-based render state for a list UI.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain `Token`, wire types, errors, endpoint constants
//! 2. **HTTP** — `ApiRequest` descriptors, strict JSON codec, `RestClient` transport
//! 3. **Repository** — `TokenListClient` with the `tokens()` sub-client
//! 4. **View Model** — `TokenListViewModel`: render state + loading/error/render signals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use token_list_sdk::prelude::*;
//!
//! let client = TokenListClient::builder().build()?;
//! let view_model = TokenListViewModel::new(client);
//!
//! let mut renders = view_model.outputs().render_changed().stream();
//! view_model.inputs().load_tokens();
//! while renders.next().await.is_some() {
//!     let state = view_model.outputs().state();
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules: types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Endpoint constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request descriptors, codec, and the REST transport.
pub mod http;

// ── Layer 3: Repository ──────────────────────────────────────────────────────

/// `TokenListClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: View Model ──────────────────────────────────────────────────────

/// Render state and observable signals for the token list.
pub mod view_model;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::token::{Token, TokenSource};

    // Errors
    pub use crate::error::{HttpError, HttpResult, GENERIC_ERROR_MESSAGE};

    // Network
    pub use crate::network::{DEFAULT_API_URL, TOKENS_PATH};

    // Request model + transport seam
    pub use crate::http::{ApiRequest, Method, Params, Transport};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{ClientConfig, TokenListClient, TokenListClientBuilder, TokensClient};
    #[cfg(feature = "http")]
    pub use crate::http::{RestClient, RestClientBuilder};

    // View model
    pub use crate::view_model::{
        Item, Section, SectionId, Signal, TokenListInputs, TokenListOutputs, TokenListState,
        TokenListViewModel, TokenRow,
    };
}
