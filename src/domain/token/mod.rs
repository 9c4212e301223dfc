//! Token domain — listed tokens with market data.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::error::HttpError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A listed token with its latest market figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub logo_uri: String,
    pub price: f64,
    pub liquidity: f64,
    pub market_cap: f64,
    pub volume_24h_usd: f64,
    pub volume_24h_change_percent: f64,
    pub decimals: i64,
    pub last_trade_unix_time: i64,
    pub description: Option<String>,
}

impl Token {
    /// Time of the last trade, if the unix timestamp is representable.
    pub fn last_trade_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.last_trade_unix_time, 0)
    }

    /// Price with exactly two decimals, as shown in list rows.
    pub fn price_text(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// Anything that can produce the full token list.
///
/// One call is one independent fetch. Errors are returned unchanged.
pub trait TokenSource: Send + Sync + 'static {
    fn load_tokens(&self) -> impl Future<Output = Result<Vec<Token>, HttpError>> + Send;
}

#[cfg(test)]
pub(crate) fn sample_token(address: &str, price: f64) -> Token {
    Token {
        address: address.to_string(),
        name: format!("Token {}", address),
        symbol: address.to_uppercase(),
        logo_uri: format!("https://img.example.com/{}.png", address),
        price,
        liquidity: 100.0,
        market_cap: 1000.0,
        volume_24h_usd: 50.0,
        volume_24h_change_percent: 2.1,
        decimals: 6,
        last_trade_unix_time: 1_700_000_000,
        description: None,
    }
}
