//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! sweeper. All types derive Serde traits for deserialization from
//! config files, and every section has compiled-in defaults so the
//! tool runs without any file at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the sweeper.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SweeperConfig {
    /// RPC endpoint settings.
    pub chain: ChainConfig,

    /// What to move, and where.
    pub transfer: TransferConfig,

    /// Fixed gas parameters applied to every transaction.
    pub gas: GasConfig,

    /// NFT indexing API settings.
    pub indexer: IndexerConfig,
}

/// Chain RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID for EIP-155 replay protection.
    pub chain_id: u64,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://testnet-rpc.monad.xyz".to_string(),
            chain_id: 10143,
            rpc_timeout_secs: 10,
        }
    }
}

/// Transfer target configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// NFT collection (contract) address to sweep.
    pub collection: String,

    /// Address every asset is transferred to.
    pub recipient: String,

    /// Path to the newline-delimited private key file.
    pub keys_file: String,

    /// How long to wait for a transaction receipt before giving up.
    pub receipt_timeout_secs: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            collection: "0x7b4e69bdb04efbd7cdb834b65e3eb6ed6e973056".to_string(),
            recipient: "0xB50Bd0ee3BfaA5ed1684a423005C839B51BdC2be".to_string(),
            keys_file: "wallets.txt".to_string(),
            receipt_timeout_secs: 120,
        }
    }
}

/// Fixed gas parameters.
///
/// No estimation is performed; every transfer is submitted with these
/// exact values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GasConfig {
    /// Gas price in gwei.
    pub price_gwei: u64,

    /// Gas limit per transaction.
    pub limit: u64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            price_gwei: 60,
            limit: 100_000,
        }
    }
}

impl GasConfig {
    /// Gas price in wei.
    pub fn price_wei(&self) -> u128 {
        self.price_gwei as u128 * 1_000_000_000
    }
}

/// NFT indexing API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// Base URL of the indexing service.
    pub base_url: String,

    /// Bearer credential sent with every request.
    pub api_key: String,

    /// Maximum number of tokens fetched per wallet.
    pub page_size: u32,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api-mainnet.magiceden.dev/v3/rtp/monad-testnet".to_string(),
            api_key: String::new(),
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SweeperConfig::default();
        assert_eq!(config.gas.price_gwei, 60);
        assert_eq!(config.gas.limit, 100_000);
        assert_eq!(config.indexer.page_size, 20);
        assert_eq!(config.transfer.receipt_timeout_secs, 120);
    }

    #[test]
    fn test_gas_price_wei() {
        let gas = GasConfig {
            price_gwei: 60,
            limit: 100_000,
        };
        assert_eq!(gas.price_wei(), 60_000_000_000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SweeperConfig = toml::from_str(
            r#"
            [gas]
            price_gwei = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.gas.price_gwei, 5);
        // Unspecified fields fall back to defaults
        assert_eq!(config.gas.limit, 100_000);
        assert_eq!(config.indexer.page_size, 20);
    }
}
