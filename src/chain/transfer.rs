//! Transfer building, signing, and finalization monitoring.
//!
//! # Responsibilities
//! - Encode the standard-specific `safeTransferFrom` calldata
//! - Build legacy gas-priced transactions with the configured limits
//! - Sign with the sending wallet, broadcast, and poll for the receipt

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, TransferOutcome, TransferStatus};
use crate::chain::wallet::Wallet;
use crate::config::SweeperConfig;
use crate::sweep::runner::TransferBackend;
use crate::sweep::types::{Asset, TokenStandard};

sol! {
    interface IErc721 {
        function safeTransferFrom(address from, address to, uint256 tokenId);
    }

    interface IErc1155 {
        function safeTransferFrom(address from, address to, uint256 id, uint256 amount, bytes data);
    }
}

/// Encode the transfer calldata for one asset.
///
/// ERC-1155 transfers always move a quantity of one with an empty
/// payload.
pub fn transfer_calldata(asset: &Asset, from: Address, to: Address) -> Bytes {
    match asset.standard {
        TokenStandard::Erc721 => IErc721::safeTransferFromCall {
            from,
            to,
            tokenId: asset.token_id,
        }
        .abi_encode()
        .into(),
        TokenStandard::Erc1155 => IErc1155::safeTransferFromCall {
            from,
            to,
            id: asset.token_id,
            amount: U256::from(1),
            data: Bytes::new(),
        }
        .abi_encode()
        .into(),
    }
}

/// Submits transfers for a fixed collection and recipient.
pub struct TransferSender {
    client: ChainClient,
    collection: Address,
    recipient: Address,
    gas_price_wei: u128,
    gas_limit: u64,
    receipt_timeout_secs: u64,
}

impl TransferSender {
    /// Create a sender from validated configuration.
    pub fn new(client: ChainClient, config: &SweeperConfig) -> ChainResult<Self> {
        let collection: Address =
            config
                .transfer
                .collection
                .parse()
                .map_err(|_| ChainError::InvalidAddress {
                    field: "collection",
                    value: config.transfer.collection.clone(),
                })?;
        let recipient: Address =
            config
                .transfer
                .recipient
                .parse()
                .map_err(|_| ChainError::InvalidAddress {
                    field: "recipient",
                    value: config.transfer.recipient.clone(),
                })?;

        Ok(Self {
            client,
            collection,
            recipient,
            gas_price_wei: config.gas.price_wei(),
            gas_limit: config.gas.limit,
            receipt_timeout_secs: config.transfer.receipt_timeout_secs,
        })
    }

    /// The address every asset is transferred to.
    pub fn recipient(&self) -> Address {
        self.recipient
    }

    /// Run the full transfer sequence for one asset: fetch the nonce,
    /// build, sign, submit, then block until the receipt appears or
    /// the deadline elapses.
    pub async fn send(&self, wallet: &Wallet, asset: &Asset) -> ChainResult<TransferOutcome> {
        let from = wallet.address();
        let nonce = self.client.get_transaction_count(from).await?;
        let input = transfer_calldata(asset, from, self.recipient);

        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(self.collection)
            .with_input(input)
            .with_nonce(nonce)
            .with_gas_price(self.gas_price_wei)
            .with_gas_limit(self.gas_limit)
            .with_chain_id(wallet.chain_id());

        let envelope = tx
            .build(&wallet.network_wallet())
            .await
            .map_err(|e| ChainError::Signing(e.to_string()))?;

        let tx_hash = self.client.send_transaction(envelope).await?;
        tracing::info!(
            %tx_hash,
            from = %from,
            token_id = %asset.token_id,
            standard = %asset.standard,
            "Transfer submitted"
        );

        let status = self.wait_for_receipt(tx_hash).await?;
        Ok(TransferOutcome { tx_hash, status })
    }

    /// Poll for the receipt until it appears or the deadline elapses.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> ChainResult<TransferStatus> {
        let deadline = Duration::from_secs(self.receipt_timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(deadline, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Ok(TransferStatus::Reverted);
                }

                return Ok(TransferStatus::Succeeded {
                    block_number: receipt.block_number.unwrap_or_default(),
                });
            }
        })
        .await;

        match result {
            Ok(status) => status,
            Err(_) => Err(ChainError::ReceiptTimeout(self.receipt_timeout_secs)),
        }
    }
}

impl TransferBackend for TransferSender {
    async fn native_balance(&self, owner: Address) -> ChainResult<U256> {
        self.client.get_balance(owner).await
    }

    async fn transfer_asset(&self, wallet: &Wallet, asset: &Asset) -> ChainResult<TransferOutcome> {
        self.send(wallet, asset).await
    }
}
