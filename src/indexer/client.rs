//! HTTP client for the NFT indexing API.

use alloy::primitives::Address;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use thiserror::Error;

use crate::config::IndexerConfig;
use crate::indexer::types::{TokenRecord, TokensResponse};

/// Errors from the indexer client.
///
/// A non-2xx response is deliberately NOT an error; see
/// [`IndexerClient::owned_tokens`].
#[derive(Debug, Error)]
pub enum IndexerError {
    /// The configured credential is not a valid header value.
    #[error("invalid API credential")]
    InvalidCredential,

    /// Request could not be sent or the body could not be decoded.
    #[error("indexer request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the owned-tokens endpoint of the indexing service.
#[derive(Debug, Clone)]
pub struct IndexerClient {
    http: reqwest::Client,
    headers: HeaderMap,
    base_url: String,
    page_size: u32,
}

impl IndexerClient {
    /// Create a client from configuration.
    pub fn new(config: &IndexerConfig) -> Result<Self, IndexerError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| IndexerError::InvalidCredential)?;
        // Keep the credential out of Debug output
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            http: reqwest::Client::new(),
            headers,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    /// Fetch the tokens `owner` holds within `collection`.
    ///
    /// A non-2xx response is logged and yields an empty list, so a
    /// denied or failed lookup reads the same as a wallet that owns
    /// nothing.
    // TODO: count fetch failures separately in the run summary instead
    // of folding them into "no assets found".
    pub async fn owned_tokens(
        &self,
        owner: Address,
        collection: &str,
    ) -> Result<Vec<TokenRecord>, IndexerError> {
        let url = format!(
            "{}/users/{}/tokens/v7?collection={}&limit={}",
            self.base_url, owner, collection, self.page_size
        );

        let response = self
            .http
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                owner = %owner,
                status = status.as_u16(),
                "Indexer returned non-success, treating as no assets"
            );
            return Ok(Vec::new());
        }

        let body: TokensResponse = response.json().await?;
        Ok(body.tokens)
    }
}
