//! Query one gas meter by contract and participant.

use incentives_types::{GasMeterRequest, QueryRequest};

use crate::commands::parse_address;
use crate::config::CliConfig;
use crate::context::QueryContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the gas-meter command.
///
/// The two addresses are validated in argument order, each under its
/// own role, so a failure message always names the argument that
/// actually failed.
pub async fn gas_meter(
    config: CliConfig,
    format: OutputFormat,
    contract: &str,
    participant: &str,
) -> CliResult<String> {
    let contract = parse_address("contract", contract)?;
    let participant = parse_address("participant", participant)?;
    let req = QueryRequest::GasMeter(GasMeterRequest {
        contract,
        participant,
    });

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
    async fn test_bad_contract_reported_as_contract() {
        let err = gas_meter(unreachable_config(), OutputFormat::Text, "bad", ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid contract address: bad");
    }

    #[tokio::test]
    async fn test_bad_participant_reported_as_participant() {
        // The error must carry the participant's text, not the contract's.
        let err = gas_meter(unreachable_config(), OutputFormat::Text, ZERO, "bad")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid participant address: bad");
    }

    #[tokio::test]
    async fn test_both_bad_reports_contract_first() {
        let err = gas_meter(unreachable_config(), OutputFormat::Text, "first", "second")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid contract address: first");
    }

    #[tokio::test]
    async fn test_valid_addresses_reach_client_setup() {
        let err = gas_meter(unreachable_config(), OutputFormat::Text, ZERO, ZERO)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::ClientSetup(_)));
    }
}
