//! CLI error types.

use incentives_client::ClientError;
use thiserror::Error;

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error enum covering every pipeline stage.
///
/// Every stage fails fast: the first error ends the invocation and is
/// reported as a single message on stderr.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed address argument.
    #[error("invalid {role} address: {addr}")]
    InvalidAddress {
        /// Which argument the address was supplied for.
        role: &'static str,
        /// The offending string.
        addr: String,
    },

    /// Conflicting or malformed paging controls.
    #[error("invalid pagination: {0}")]
    Pagination(String),

    /// The query client could not be constructed.
    #[error("cannot set up query client: {0}")]
    ClientSetup(String),

    /// The remote call failed; the underlying cause is surfaced verbatim.
    #[error("{0}")]
    Remote(ClientError),

    /// The response could not be serialized for output.
    #[error("cannot render response: {0}")]
    Render(#[from] serde_json::Error),

    /// IO error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<ClientError> for CliError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Setup(msg) => Self::ClientSetup(msg),
            other => Self::Remote(other),
        }
    }
}

impl CliError {
    /// Get the exit code for this error.
    ///
    /// Argument arity and flag parsing failures exit with clap's own
    /// code (2) before any of these are reachable.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Bad user input: 1
            Self::InvalidAddress { .. } | Self::Pagination(_) => 1,
            // Config errors: 3
            Self::Config(_) | Self::Toml(_) => 3,
            // Client setup: 4
            Self::ClientSetup(_) => 4,
            // Remote query failures: 5
            Self::Remote(_) => 5,
            // Render/serialization: 6
            Self::Render(_) => 6,
            // IO errors: 7
            Self::Io(_) => 7,
        }
    }
}
