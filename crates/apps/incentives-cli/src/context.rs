//! Query context for CLI invocations.

use std::time::Duration;

use incentives_client::QueryClient;

use crate::config::CliConfig;
use crate::error::CliResult;

/// Per-invocation query context.
///
/// Created after argument validation and dropped when the command
/// returns; it owns the client for the single round trip a command
/// performs.
#[derive(Debug)]
pub struct QueryContext {
    /// The query client.
    pub client: QueryClient,
}

impl QueryContext {
    /// Build the query client from the resolved configuration.
    pub fn connect(config: &CliConfig) -> CliResult<Self> {
        tracing::debug!(node = %config.node, height = ?config.height, "connecting query client");
        let client =
            QueryClient::connect(&config.node, Duration::from_secs(config.timeout_secs))?;
        Ok(Self {
            client: client.at_height(config.height),
        })
    }
}
