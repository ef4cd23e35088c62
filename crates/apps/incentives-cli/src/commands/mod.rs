//! CLI command implementations.
//!
//! Each submodule implements one query subcommand as a linear pipeline:
//! validate arguments, build the request, dispatch it, render the
//! response. The first failing stage ends the invocation.

pub mod completions;
pub mod gas_meter;
pub mod gas_meters;
pub mod incentive;
pub mod incentives;
pub mod params;

// Re-export command handlers
pub use completions::completions;
pub use gas_meter::gas_meter;
pub use gas_meters::gas_meters;
pub use incentive::incentive;
pub use incentives::incentives;
pub use params::params;

use incentives_types::Address;

use crate::error::{CliError, CliResult};

/// Validate an address-typed argument, naming its role on failure.
pub(crate) fn parse_address(role: &'static str, s: &str) -> CliResult<Address> {
    Address::parse(s).map_err(|e| CliError::InvalidAddress { role, addr: e.0 })
}
