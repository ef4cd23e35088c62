//! Query the incentives module parameters.

use incentives_types::{ParamsRequest, QueryRequest};

use crate::config::CliConfig;
use crate::context::QueryContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the params command.
pub async fn params(config: CliConfig, format: OutputFormat) -> CliResult<String> {
    let req = QueryRequest::Params(ParamsRequest {});

    let ctx = QueryContext::connect(&config)?;
    let res = ctx.client.query(&req).await?;

    Ok(res.render(format)?)
}
