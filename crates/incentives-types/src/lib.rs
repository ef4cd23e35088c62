//! Data structures for the incentives query service.
//!
//! This crate provides the value types exchanged between the CLI and the
//! remote query service. It contains no I/O, only type definitions with
//! validation and serialization support.
//!
//! # Module Organization
//!
//! - [`address`] - Hex account addresses and their validation
//! - [`pagination`] - Paging controls for list-style queries
//! - [`query`] - Query request and response variants
//!
//! # Type Conventions
//!
//! - Derive `Debug`, `Clone`, `PartialEq` where appropriate
//! - Derive `Serialize`, `Deserialize` for wire format
//! - Optional wire fields are omitted when absent, so the remote service
//!   applies its own defaults

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod address;
pub mod pagination;
pub mod query;

// Re-export all public types at the crate root for convenience

pub use address::{Address, InvalidAddress, ADDRESS_LEN};
pub use pagination::PageRequest;
pub use query::{
    GasMeterRequest, GasMetersRequest, IncentiveRequest, IncentivesRequest, ParamsRequest,
    QueryRequest, QueryResponse,
};
