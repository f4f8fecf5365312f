//! Batch NFT sweeper.
//!
//! Moves every NFT held by a list of wallets into one target address
//! on an EVM-compatible chain: load keys, ask an indexing API what
//! each wallet holds, confirm once, then transfer asset by asset.
//!
//! # Architecture Overview
//!
//! ```text
//!   wallets.txt ──▶ keystore ──▶ Vec<Wallet>
//!                                    │
//!                                    ▼
//!                        sweep (planner) ◀────── indexer (HTTP API)
//!                                    │
//!                          SweepPlan │  one yes/no confirmation
//!                                    ▼
//!                        sweep (runner) ──▶ chain ──▶ JSON-RPC endpoint
//! ```
//!
//! Everything is sequential: one wallet at a time, one asset at a
//! time, each transfer awaited to finalization before the next.

pub mod chain;
pub mod config;
pub mod indexer;
pub mod keystore;
pub mod sweep;

pub use chain::{ChainClient, TransferSender, Wallet};
pub use config::SweeperConfig;
pub use indexer::IndexerClient;
