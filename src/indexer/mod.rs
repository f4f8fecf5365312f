//! NFT indexing API subsystem.
//!
//! One GET per wallet against the external indexing service, returning
//! the owned tokens within a single collection. Responses are capped
//! at the configured page size; there is no pagination.

pub mod client;
pub mod types;

pub use client::{IndexerClient, IndexerError};
pub use types::{TokenRecord, TokensResponse};
