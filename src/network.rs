//! Endpoint constants for the token list API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://spot-labs.github.io/ios-interview-api/";

/// Path of the token list document, relative to the base URL.
pub const TOKENS_PATH: &str = "data.json";

/// Content type sent with every token list request.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
