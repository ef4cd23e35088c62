//! List gas meters for an incentivized contract.

use incentives_types::{GasMetersRequest, QueryRequest};

use crate::cli::PageArgs;
use crate::commands::parse_address;
use crate::config::CliConfig;
use crate::context::QueryContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the gas-meters command.
pub async fn gas_meters(
    config: CliConfig,
    format: OutputFormat,
    contract: &str,
    page: &PageArgs,
) -> CliResult<String> {
    let contract = parse_address("contract", contract)?;
    let pagination = page.to_request()?;
    let req = QueryRequest::GasMeters(GasMetersRequest {
        contract,
        pagination,
    });

    let ctx = QueryContext::connect(&config)?;
    let res = ctx.client.query(&req).await?;

    Ok(res.render(format)?)
}
