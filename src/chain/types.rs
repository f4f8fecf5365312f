//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// No receipt appeared within the configured deadline.
    #[error("no receipt after {0} seconds")]
    ReceiptTimeout(u64),

    /// Invalid private key format or derivation error.
    #[error("wallet error: {0}")]
    Wallet(String),

    /// Transaction could not be built or signed.
    #[error("signing error: {0}")]
    Signing(String),

    /// Chain configuration mismatch.
    #[error("chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    /// A configured address does not parse.
    #[error("invalid {field} address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Final status of a submitted transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    /// Receipt observed with success status.
    Succeeded { block_number: u64 },
    /// Receipt observed with failure status.
    Reverted,
}

impl TransferStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, TransferStatus::Succeeded { .. })
    }
}

/// Result of one submitted transfer: the hash and its final status.
#[derive(Debug, Clone, Copy)]
pub struct TransferOutcome {
    pub tx_hash: TxHash,
    pub status: TransferStatus,
}
