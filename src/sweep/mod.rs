//! Transfer orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<Wallet>
//!     → planner.rs (indexer query + normalization, one pass)
//!     → SweepPlan (per-wallet asset lists)
//!     → one yes/no confirmation
//!     → runner.rs (balance gate, sequential transfers)
//!     → SweepStats
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: one wallet at a time, one asset at a time
//! - Discovery and execution are separate passes; nothing is
//!   submitted before the single confirmation
//! - No retries, no checkpoints, no resumption across runs

pub mod planner;
pub mod runner;
pub mod types;

pub use planner::SweepPlanner;
pub use runner::TransferBackend;
pub use types::{Asset, SweepOutcome, SweepPlan, SweepStats, TokenStandard, WalletBatch};

use alloy::primitives::U256;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question; only an affirmative `yes` answers true.
pub fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{} (yes/no): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

/// Drive one full sweep: report the plan, confirm once, execute.
///
/// An empty plan stops before the prompt is ever shown; anything but
/// an affirmative answer aborts before any submission.
pub async fn run<B: TransferBackend>(
    plan: &SweepPlan,
    backend: &B,
    gas_cost: U256,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<SweepOutcome> {
    if plan.is_empty() {
        writeln!(output, "No NFTs to transfer.")?;
        return Ok(SweepOutcome::NothingToSweep);
    }

    writeln!(
        output,
        "Found {} NFTs across {} wallets.",
        plan.total_assets(),
        plan.batches.len()
    )?;

    if !confirm("Transfer all NFTs to the target address?", input, output)? {
        writeln!(output, "Transfer cancelled.")?;
        return Ok(SweepOutcome::Aborted);
    }

    let stats = runner::execute(plan, backend, gas_cost).await;
    writeln!(
        output,
        "Done. {} transferred, {} failed, {} wallets skipped.",
        stats.transferred, stats.failed, stats.skipped_wallets
    )?;
    Ok(SweepOutcome::Completed(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> (bool, String) {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut output = Vec::new();
        let confirmed = confirm("Proceed?", &mut input, &mut output).unwrap();
        (confirmed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_confirm_affirmative() {
        assert!(answer("yes\n").0);
        assert!(answer("YES\n").0);
        assert!(answer("  yes  \n").0);
    }

    #[test]
    fn test_confirm_everything_else_declines() {
        assert!(!answer("no\n").0);
        assert!(!answer("y\n").0);
        assert!(!answer("\n").0);
        assert!(!answer("").0);
        assert!(!answer("yes please\n").0);
    }

    #[test]
    fn test_confirm_prompts_once() {
        let (_, shown) = answer("no\n");
        assert_eq!(shown, "Proceed? (yes/no): ");
    }
}
