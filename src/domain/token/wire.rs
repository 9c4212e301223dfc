//! Wire types for the token list response (REST).

use serde::{Deserialize, Serialize};

/// REST envelope for the token list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

/// Raw token record as served by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub address: String,
    pub name: String,
    pub symbol: String,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    pub price: f64,
    pub liquidity: f64,
    pub mc: f64,
    #[serde(rename = "v24hUSD")]
    pub v24h_usd: f64,
    pub v24h_change_percent: f64,
    pub decimals: i64,
    pub last_trade_unix_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ExtensionsResponse>,
}

/// Optional token metadata block.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtensionsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
