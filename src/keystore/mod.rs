//! Key file loading.
//!
//! The key file is plain text: one hex secret key per line, blank
//! lines ignored. A missing file or a malformed key aborts the run;
//! a wrong file should fail loudly before anything is submitted.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chain::Wallet;

/// Errors from key file loading.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// The key file could not be read.
    #[error("failed to read key file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not parse as a secret key.
    #[error("invalid key on line {line}: {reason}")]
    InvalidKey { line: usize, reason: String },
}

/// Read the key file into its non-empty trimmed lines, order preserved.
pub fn load_keys(path: &Path) -> Result<Vec<String>, KeystoreError> {
    let content = fs::read_to_string(path).map_err(|source| KeystoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Load every key in the file as a signing wallet.
///
/// Line numbers in errors refer to the file, counting blank lines.
pub fn load_wallets(path: &Path, chain_id: u64) -> Result<Vec<Wallet>, KeystoreError> {
    let content = fs::read_to_string(path).map_err(|source| KeystoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wallets = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let wallet = Wallet::from_private_key(line, chain_id).map_err(|e| {
            KeystoreError::InvalidKey {
                line: idx + 1,
                reason: e.to_string(),
            }
        })?;
        wallets.push(wallet);
    }

    Ok(wallets)
}
