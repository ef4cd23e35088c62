//! Command-line interface for the incentives query service.
//!
//! This crate provides the `incq` binary, a read-only query surface for
//! the incentives subsystem of a node. It includes commands for:
//!
//! - **Listing**: All registered incentives, with pagination
//! - **Lookups**: One incentive, or one gas meter by contract and participant
//! - **Gas Meters**: All gas meters of an incentivized contract
//! - **Parameters**: The incentives module parameters
//!
//! # Quick Start
//!
//! ```bash
//! # List every registered incentive
//! incq incentives
//!
//! # Look up one contract's incentive
//! incq incentive 0x5dCA2483280D9727c80b5518faC4556617fb19F4
//!
//! # Page through a contract's gas meters
//! incq gas-meters 0x5dCA2483280D9727c80b5518faC4556617fb19F4 --limit 50
//! ```
//!
//! # Output Formats
//!
//! All commands support `--output` for output control:
//!
//! - `text` (default): pretty-printed JSON
//! - `json`: compact JSON for scripting
//!
//! # Configuration
//!
//! Configuration is loaded from the platform config directory
//! (`config.toml` under the `incq` project directory). Override the
//! path with `--config` and the endpoint with `--node` or `INCQ_NODE`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod output;

// Re-export main types
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg, PageArgs};
pub use config::{default_config_path, CliConfig};
pub use context::QueryContext;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
