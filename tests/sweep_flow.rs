//! Sweep flow tests driven through a recording transfer backend.

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Mutex;

use alloy::primitives::{Address, TxHash, U256};
use nft_sweeper::chain::{ChainResult, TransferOutcome, TransferStatus, Wallet};
use nft_sweeper::indexer::types::{TokenDetails, TokenRecord};
use nft_sweeper::sweep::{
    self, Asset, SweepOutcome, SweepPlan, TokenStandard, TransferBackend, WalletBatch,
};

// Anvil's first two accounts
const KEY_A: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const KEY_B: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

const GAS_COST: u64 = 6_000_000;

struct StubBackend {
    balances: HashMap<Address, U256>,
    calls: Mutex<Vec<(Address, U256, TokenStandard)>>,
}

impl StubBackend {
    fn new() -> Self {
        Self {
            balances: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn with_balance(mut self, owner: Address, balance: u64) -> Self {
        self.balances.insert(owner, U256::from(balance));
        self
    }

    fn calls(&self) -> Vec<(Address, U256, TokenStandard)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TransferBackend for StubBackend {
    async fn native_balance(&self, owner: Address) -> ChainResult<U256> {
        Ok(self.balances.get(&owner).copied().unwrap_or(U256::ZERO))
    }

    async fn transfer_asset(&self, wallet: &Wallet, asset: &Asset) -> ChainResult<TransferOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push((wallet.address(), asset.token_id, asset.standard));
        Ok(TransferOutcome {
            tx_hash: TxHash::ZERO,
            status: TransferStatus::Succeeded { block_number: 1 },
        })
    }
}

fn wallet(key: &str) -> Wallet {
    Wallet::from_private_key(key, 1).unwrap()
}

fn asset(token_id: u64, standard: TokenStandard) -> Asset {
    Asset {
        token_id: U256::from(token_id),
        standard,
    }
}

async fn run_with_input(
    plan: &SweepPlan,
    backend: &StubBackend,
    input: &str,
) -> (SweepOutcome, String) {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    let outcome = sweep::run(plan, backend, U256::from(GAS_COST), &mut input, &mut output)
        .await
        .unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn test_empty_plan_never_prompts() {
    let plan = SweepPlan {
        batches: vec![WalletBatch {
            wallet: wallet(KEY_A),
            assets: vec![],
        }],
    };
    let backend = StubBackend::new();

    let (outcome, shown) = run_with_input(&plan, &backend, "yes\n").await;

    assert_eq!(outcome, SweepOutcome::NothingToSweep);
    assert!(!shown.contains("(yes/no)"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_negative_answer_aborts() {
    let plan = SweepPlan {
        batches: vec![WalletBatch {
            wallet: wallet(KEY_A),
            assets: vec![asset(1, TokenStandard::Erc721)],
        }],
    };
    let backend = StubBackend::new().with_balance(wallet(KEY_A).address(), GAS_COST);

    let (outcome, shown) = run_with_input(&plan, &backend, "no\n").await;

    assert_eq!(outcome, SweepOutcome::Aborted);
    assert!(shown.contains("(yes/no)"));
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn test_underfunded_wallet_skipped_others_proceed() {
    let broke = wallet(KEY_A);
    let funded = wallet(KEY_B);
    let plan = SweepPlan {
        batches: vec![
            WalletBatch {
                wallet: broke.clone(),
                assets: vec![asset(1, TokenStandard::Erc721), asset(2, TokenStandard::Erc721)],
            },
            WalletBatch {
                wallet: funded.clone(),
                assets: vec![asset(3, TokenStandard::Erc721)],
            },
        ],
    };
    let backend = StubBackend::new()
        .with_balance(broke.address(), GAS_COST - 1)
        .with_balance(funded.address(), GAS_COST);

    let (outcome, _) = run_with_input(&plan, &backend, "yes\n").await;

    match outcome {
        SweepOutcome::Completed(stats) => {
            assert_eq!(stats.transferred, 1);
            assert_eq!(stats.failed, 0);
            assert_eq!(stats.skipped_wallets, 1);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, funded.address());
    assert_eq!(calls[0].1, U256::from(3));
}

#[tokio::test]
async fn test_standard_dispatch_per_asset() {
    let w = wallet(KEY_A);
    let plan = SweepPlan {
        batches: vec![WalletBatch {
            wallet: w.clone(),
            assets: vec![asset(10, TokenStandard::Erc721), asset(11, TokenStandard::Erc1155)],
        }],
    };
    let backend = StubBackend::new().with_balance(w.address(), GAS_COST);

    let (_, _) = run_with_input(&plan, &backend, "yes\n").await;

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].2, TokenStandard::Erc721);
    assert_eq!(calls[1].2, TokenStandard::Erc1155);
}

#[tokio::test]
async fn test_indexer_record_to_single_transfer() {
    // The full path from one indexer record to exactly one transfer
    // call: {tokenId: "5", kind: "erc721"} held by wallet A.
    let record = TokenRecord {
        token: TokenDetails {
            token_id: "5".to_string(),
            kind: "erc721".to_string(),
        },
    };
    let normalized = Asset::from_record(&record).unwrap();
    assert_eq!(normalized.token_id, U256::from(5));
    assert_eq!(normalized.standard, TokenStandard::Erc721);

    let w = wallet(KEY_A);
    let plan = SweepPlan {
        batches: vec![WalletBatch {
            wallet: w.clone(),
            assets: vec![normalized],
        }],
    };
    let backend = StubBackend::new().with_balance(w.address(), GAS_COST);

    let (outcome, _) = run_with_input(&plan, &backend, "yes\n").await;

    assert_eq!(outcome, SweepOutcome::Completed(sweep::SweepStats {
        transferred: 1,
        failed: 0,
        skipped_wallets: 0,
    }));
    let calls = backend.calls();
    assert_eq!(calls, vec![(w.address(), U256::from(5), TokenStandard::Erc721)]);
}
