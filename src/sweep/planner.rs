//! Discovery pass: query the indexer per wallet and build the plan.

use crate::chain::Wallet;
use crate::indexer::IndexerClient;
use crate::sweep::types::{Asset, SweepPlan, WalletBatch};

/// Builds a [`SweepPlan`] by walking the wallet list once.
pub struct SweepPlanner<'a> {
    indexer: &'a IndexerClient,
    collection: &'a str,
}

impl<'a> SweepPlanner<'a> {
    pub fn new(indexer: &'a IndexerClient, collection: &'a str) -> Self {
        Self { indexer, collection }
    }

    /// Fetch, normalize, and accumulate owned assets per wallet.
    ///
    /// An indexer failure for one wallet is logged and treated as an
    /// empty result; the pass never aborts.
    pub async fn build_plan(&self, wallets: Vec<Wallet>) -> SweepPlan {
        let mut batches = Vec::with_capacity(wallets.len());

        for wallet in wallets {
            let owner = wallet.address();
            println!("Fetching NFTs for {owner}");

            let records = match self.indexer.owned_tokens(owner, self.collection).await {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(
                        owner = %owner,
                        error = %e,
                        "Indexer query failed, treating as no assets"
                    );
                    Vec::new()
                }
            };

            let mut assets = Vec::with_capacity(records.len());
            for record in &records {
                match Asset::from_record(record) {
                    Ok(asset) => assets.push(asset),
                    Err(e) => {
                        tracing::warn!(owner = %owner, error = %e, "Dropping malformed token record");
                    }
                }
            }

            println!("Found {} NFTs for {owner}", assets.len());
            batches.push(WalletBatch { wallet, assets });
        }

        SweepPlan { batches }
    }
}
