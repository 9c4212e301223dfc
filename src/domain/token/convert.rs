//! Conversions from wire types to domain types for tokens.

use super::wire::{TokenResponse, TokensResponse};
use super::Token;

impl From<TokenResponse> for Token {
    fn from(t: TokenResponse) -> Self {
        Self {
            address: t.address,
            name: t.name,
            symbol: t.symbol,
            logo_uri: t.logo_uri,
            price: t.price,
            liquidity: t.liquidity,
            market_cap: t.mc,
            volume_24h_usd: t.v24h_usd,
            volume_24h_change_percent: t.v24h_change_percent,
            decimals: t.decimals,
            last_trade_unix_time: t.last_trade_unix_time,
            description: t.extensions.and_then(|e| e.description),
        }
    }
}

impl From<TokensResponse> for Vec<Token> {
    fn from(resp: TokensResponse) -> Self {
        resp.tokens.into_iter().map(Token::from).collect()
    }
}
