//! List registered incentives.

use incentives_types::{IncentivesRequest, QueryRequest};

use crate::cli::PageArgs;
use crate::config::CliConfig;
use crate::context::QueryContext;
use crate::error::CliResult;
use crate::output::{OutputFormat, Render};

/// Execute the incentives command.
pub async fn incentives(
    config: CliConfig,
    format: OutputFormat,
    page: &PageArgs,
) -> CliResult<String> {
    let pagination = page.to_request()?;
    let req = QueryRequest::Incentives(IncentivesRequest { pagination });

    let ctx = QueryContext::connect(&config)?;
    let res = ctx.client.query(&req).await?;

    Ok(res.render(format)?)
}
