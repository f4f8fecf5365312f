//! Wire types for the indexing API.

use serde::Deserialize;

/// Response body for the owned-tokens query.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub tokens: Vec<TokenRecord>,
}

/// One owned-token entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRecord {
    pub token: TokenDetails,
}

/// The nested token object carrying the id and standard tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub token_id: String,
    pub kind: String,
}
