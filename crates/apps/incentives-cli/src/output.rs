//! Output rendering for query responses.

use incentives_types::QueryResponse;

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON for operators.
    #[default]
    Text,
    /// Compact single-line JSON for scripting.
    Json,
}

/// Render a value for the selected output format.
pub trait Render {
    /// Produce the textual representation, preserving field names and
    /// nesting exactly as the remote service returned them.
    ///
    /// A serialization failure here is a contract violation, not a
    /// user error.
    fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error>;
}

impl Render for QueryResponse {
    fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => serde_json::to_string_pretty(self.payload()),
            OutputFormat::Json => serde_json::to_string(self.payload()),
        }
    }
}
