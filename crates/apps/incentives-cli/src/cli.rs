//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use incentives_types::PageRequest;

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Incentives query CLI.
#[derive(Parser, Debug)]
#[command(name = "incq")]
#[command(author = "Incq Contributors")]
#[command(version)]
#[command(about = "Read-only query interface for the incentives subsystem of a node")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Node JSON-RPC endpoint.
    #[arg(short, long, global = true, env = "INCQ_NODE")]
    pub node: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json).
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormatArg,

    /// Query state as of this block height instead of the latest.
    #[arg(long, global = true)]
    pub height: Option<u64>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Pretty-printed JSON.
    #[default]
    Text,
    /// Compact JSON.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all registered incentives.
    Incentives {
        #[command(flatten)]
        page: PageArgs,
    },

    /// Get the incentive for a contract.
    Incentive {
        /// Contract address (hex, optional 0x prefix).
        contract: String,
    },

    /// List gas meters for an incentivized contract.
    GasMeters {
        /// Contract address (hex, optional 0x prefix).
        contract: String,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Get the gas meter for a contract and participant pair.
    GasMeter {
        /// Contract address (hex, optional 0x prefix).
        contract: String,

        /// Participant account address (hex, optional 0x prefix).
        participant: String,
    },

    /// Show the incentives module parameters.
    Params,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Pagination flags shared by list-style queries.
#[derive(Args, Debug, Default, Clone)]
pub struct PageArgs {
    /// Page number to fetch (1-based; translated to an offset).
    #[arg(long, conflicts_with = "offset")]
    pub page: Option<u64>,

    /// Opaque key of the page to fetch, from a previous response.
    #[arg(long = "page-key", conflicts_with_all = ["offset", "page"])]
    pub key: Option<String>,

    /// Number of records to skip.
    #[arg(long)]
    pub offset: Option<u64>,

    /// Maximum records per page.
    #[arg(long)]
    pub limit: Option<u64>,

    /// Ask the service to report the total record count.
    #[arg(long)]
    pub count_total: bool,

    /// Return records in reverse order.
    #[arg(long)]
    pub reverse: bool,
}

impl PageArgs {
    /// Read the pagination flag group into a request spec.
    ///
    /// All flags absent yields `None`, letting the remote service apply
    /// its own default paging. The conflict checks are repeated here so
    /// the rules hold even when the struct is built directly.
    pub fn to_request(&self) -> CliResult<Option<PageRequest>> {
        if self.page.is_none()
            && self.key.is_none()
            && self.offset.is_none()
            && self.limit.is_none()
            && !self.count_total
            && !self.reverse
        {
            return Ok(None);
        }

        let offset = match (self.page, self.offset) {
            (Some(_), Some(_)) => {
                return Err(CliError::Pagination(
                    "--page and --offset cannot be used together".to_string(),
                ))
            }
            (Some(0), None) => {
                return Err(CliError::Pagination(
                    "page numbering starts at 1".to_string(),
                ))
            }
            (Some(page), None) => {
                let limit = self
                    .limit
                    .ok_or_else(|| CliError::Pagination("--page requires --limit".to_string()))?;
                let offset = page
                    .checked_sub(1)
                    .and_then(|p| p.checked_mul(limit))
                    .ok_or_else(|| {
                        CliError::Pagination("--page is out of range for this --limit".to_string())
                    })?;
                Some(offset)
            }
            (None, offset) => offset,
        };

        if self.key.is_some() && offset.is_some() {
            return Err(CliError::Pagination(
                "--page-key and --offset cannot be used together".to_string(),
            ));
        }

        Ok(Some(PageRequest {
            key: self.key.clone(),
            offset,
            limit: self.limit,
            count_total: self.count_total,
            reverse: self.reverse,
        }))
    }
}

/// Shell types for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// PowerShell.
    PowerShell,
}

impl From<CompletionShell> for clap_complete::Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
            CompletionShell::Fish => clap_complete::Shell::Fish,
            CompletionShell::PowerShell => clap_complete::Shell::PowerShell,
        }
    }
}
