//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! key file lines
//!     → wallet.rs (key parsing, address derivation, signing)
//!     → client.rs (RPC connection with timeouts)
//!     → transfer.rs (encode, build, sign, broadcast, await receipt)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod transfer;
pub mod types;
pub mod wallet;

pub use client::ChainClient;
pub use transfer::TransferSender;
pub use types::{ChainError, ChainResult, TransferOutcome, TransferStatus};
pub use wallet::Wallet;
