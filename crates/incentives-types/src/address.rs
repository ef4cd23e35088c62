//! Hex account addresses and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of bytes in an account or contract address.
pub const ADDRESS_LEN: usize = 20;

/// Error returned when a string is not a well-formed address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid address: {0}")]
pub struct InvalidAddress(pub String);

/// A syntactically valid account or contract address.
///
/// An address is 20 bytes of hex, case-insensitive, with an optional
/// `0x`/`0X` prefix. The original text is preserved exactly as supplied;
/// validation checks syntax only and never rewrites the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Validate `s` as a hex address.
    ///
    /// Returns `InvalidAddress` carrying the offending string if the
    /// body is not exactly 40 hex digits after stripping the optional
    /// prefix.
    pub fn parse(s: &str) -> Result<Self, InvalidAddress> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if body.len() != ADDRESS_LEN * 2 || !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidAddress(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The address text as supplied by the user.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
