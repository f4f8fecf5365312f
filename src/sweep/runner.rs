//! Execution pass: balance gate, per-asset transfer loop, recovery.
//!
//! Failure semantics: a failed balance read or insufficient funds
//! skips the whole wallet; any per-asset error skips that asset. The
//! loop never retries and never aborts the remaining batch.

use alloy::primitives::{Address, U256};
use std::future::Future;

use crate::chain::{ChainError, TransferOutcome, Wallet};
use crate::sweep::types::{Asset, SweepPlan, SweepStats};

/// Chain-facing operations the execution pass needs.
///
/// Implemented by [`crate::chain::TransferSender`]; tests drive the
/// pass with a recording stub instead of a live endpoint.
pub trait TransferBackend {
    /// Native-currency balance of `owner`.
    fn native_balance(
        &self,
        owner: Address,
    ) -> impl Future<Output = Result<U256, ChainError>> + Send;

    /// Transfer one asset from `wallet` to the configured recipient,
    /// blocking until finalization or the receipt deadline.
    fn transfer_asset(
        &self,
        wallet: &Wallet,
        asset: &Asset,
    ) -> impl Future<Output = Result<TransferOutcome, ChainError>> + Send;
}

/// Run every transfer in the plan, one wallet at a time, one asset at
/// a time. `gas_cost` is the fixed per-transaction cost estimate a
/// wallet must be able to cover before any of its transfers are
/// attempted.
pub async fn execute<B: TransferBackend>(
    plan: &SweepPlan,
    backend: &B,
    gas_cost: U256,
) -> SweepStats {
    let mut stats = SweepStats::default();

    for batch in &plan.batches {
        if batch.assets.is_empty() {
            continue;
        }
        let owner = batch.wallet.address();

        let balance = match backend.native_balance(owner).await {
            Ok(balance) => balance,
            Err(e) => {
                println!("Skipping {owner}: balance check failed: {e}");
                tracing::warn!(owner = %owner, error = %e, "Balance check failed, skipping wallet");
                stats.skipped_wallets += 1;
                continue;
            }
        };

        if balance < gas_cost {
            println!(
                "Insufficient funds for gas on {owner}. Required: {gas_cost}, available: {balance}"
            );
            stats.skipped_wallets += 1;
            continue;
        }

        for asset in &batch.assets {
            match backend.transfer_asset(&batch.wallet, asset).await {
                Ok(outcome) if outcome.status.is_success() => {
                    println!("Token {} transferred ({}).", asset.token_id, outcome.tx_hash);
                    stats.transferred += 1;
                }
                Ok(outcome) => {
                    println!(
                        "Transfer of token {} failed ({}).",
                        asset.token_id, outcome.tx_hash
                    );
                    stats.failed += 1;
                }
                Err(e) => {
                    println!("Transfer of token {} failed: {e}", asset.token_id);
                    tracing::warn!(
                        owner = %owner,
                        token_id = %asset.token_id,
                        error = %e,
                        "Transfer error"
                    );
                    stats.failed += 1;
                }
            }
        }
    }

    stats
}
