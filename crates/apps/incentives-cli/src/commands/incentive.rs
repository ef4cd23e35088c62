//! Query a single contract incentive.

use incentives_types::{IncentiveRequest, QueryRequest};

use crate::commands::parse_address;
use crate::config::CliConfig;
use crate::context::QueryContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the incentive command.
pub async fn incentive(
    config: CliConfig,
    format: OutputFormat,
    contract: &str,
) -> CliResult<String> {
    let contract = parse_address("contract", contract)?;
    let req = QueryRequest::Incentive(IncentiveRequest { contract });

    let ctx = QueryContext::connect(&config)?;
    let res = ctx.client.query(&req).await?;

    Ok(res.render(format)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    const ZERO: &str = "0x0000000000000000000000000000000000000000";

    fn unreachable_config() -> CliConfig {
        CliConfig {
            node: "not a url".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_invalid_address_fails_before_client_setup() {
        let err = incentive(unreachable_config(), OutputFormat::Text, "0x1234")
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::InvalidAddress { .. }));
        assert!(err.to_string().contains("0x1234"));
    }

    #[tokio::test]
    async fn test_valid_address_reaches_client_setup() {
        // Validation passed; the next stage (client setup) is what fails.
        let err = incentive(unreachable_config(), OutputFormat::Text, ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ClientSetup(_)));
    }
}
