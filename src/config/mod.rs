//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! compiled-in defaults ──────────────┐
//!                                    ▼
//! config file (TOML, optional)       SweeperConfig (validated, immutable)
//!     → loader.rs (parse & deserialize)   → passed to each component
//!     → validation.rs (semantic checks)     at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults so the tool runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ChainConfig, GasConfig, IndexerConfig, SweeperConfig, TransferConfig};
