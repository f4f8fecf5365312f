//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that addresses and URLs actually parse
//! - Validate value ranges (gas values, page size, timeouts)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SweeperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::SweeperConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field that must hold an EVM address does not parse as one.
    #[error("{field} is not a valid address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    /// A field that must hold a URL does not parse as one.
    #[error("{field} is not a valid URL: {value:?}")]
    InvalidUrl { field: &'static str, value: String },

    /// A numeric field that must be positive is zero.
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    /// A required path or string field is empty.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

fn check_nonzero(field: &'static str, value: u64, errors: &mut Vec<ValidationError>) {
    if value == 0 {
        errors.push(ValidationError::Zero { field });
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &SweeperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url("chain.rpc_url", &config.chain.rpc_url, &mut errors);
    check_nonzero("chain.rpc_timeout_secs", config.chain.rpc_timeout_secs, &mut errors);

    check_address("transfer.collection", &config.transfer.collection, &mut errors);
    check_address("transfer.recipient", &config.transfer.recipient, &mut errors);
    check_nonzero(
        "transfer.receipt_timeout_secs",
        config.transfer.receipt_timeout_secs,
        &mut errors,
    );
    if config.transfer.keys_file.is_empty() {
        errors.push(ValidationError::Empty {
            field: "transfer.keys_file",
        });
    }

    check_nonzero("gas.price_gwei", config.gas.price_gwei, &mut errors);
    check_nonzero("gas.limit", config.gas.limit, &mut errors);

    check_url("indexer.base_url", &config.indexer.base_url, &mut errors);
    check_nonzero("indexer.page_size", config.indexer.page_size as u64, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
