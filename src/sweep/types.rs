//! Sweep domain types.

use alloy::primitives::U256;
use thiserror::Error;

use crate::chain::Wallet;
use crate::indexer::types::TokenRecord;

/// Token interface convention, dispatched when building calldata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStandard {
    /// Non-fungible: three-argument ownership transfer.
    Erc721,
    /// Semi-fungible: five-argument transfer with quantity and payload.
    Erc1155,
}

impl TokenStandard {
    /// Map an indexer `kind` tag to a standard.
    ///
    /// Only `"erc1155"` selects the semi-fungible shape; every other
    /// tag is treated as ERC-721.
    pub fn from_kind(kind: &str) -> Self {
        if kind == "erc1155" {
            TokenStandard::Erc1155
        } else {
            TokenStandard::Erc721
        }
    }
}

impl std::fmt::Display for TokenStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenStandard::Erc721 => write!(f, "erc721"),
            TokenStandard::Erc1155 => write!(f, "erc1155"),
        }
    }
}

/// Indexer record whose token id does not parse as a non-negative integer.
#[derive(Debug, Error)]
#[error("unparsable token id {0:?}")]
pub struct InvalidTokenId(pub String);

/// One owned NFT, normalized from an indexer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Token id within the collection.
    pub token_id: U256,
    /// Interface standard the transfer call must follow.
    pub standard: TokenStandard,
}

impl Asset {
    /// Normalize an indexer record into an asset.
    pub fn from_record(record: &TokenRecord) -> Result<Self, InvalidTokenId> {
        let raw = record.token.token_id.trim();
        let token_id = raw
            .parse::<U256>()
            .map_err(|_| InvalidTokenId(record.token.token_id.clone()))?;
        Ok(Self {
            token_id,
            standard: TokenStandard::from_kind(&record.token.kind),
        })
    }
}

/// Everything one wallet will transfer.
#[derive(Debug, Clone)]
pub struct WalletBatch {
    pub wallet: Wallet,
    pub assets: Vec<Asset>,
}

/// The per-wallet asset lists accumulated during discovery.
#[derive(Debug, Clone, Default)]
pub struct SweepPlan {
    pub batches: Vec<WalletBatch>,
}

impl SweepPlan {
    /// Total asset count across all wallets.
    pub fn total_assets(&self) -> usize {
        self.batches.iter().map(|b| b.assets.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_assets() == 0
    }
}

/// Counts reported at the end of an execution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Assets whose transfer finalized successfully.
    pub transferred: usize,
    /// Assets whose transfer errored, reverted, or timed out.
    pub failed: usize,
    /// Wallets skipped entirely for insufficient balance.
    pub skipped_wallets: usize,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Discovery found nothing; no prompt, no submission.
    NothingToSweep,
    /// The operator declined the confirmation prompt.
    Aborted,
    /// The execution pass ran to completion.
    Completed(SweepStats),
}
