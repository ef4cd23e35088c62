//! Paging controls for list-style queries.

use serde::{Deserialize, Serialize};

/// Paging controls sent with list-style queries.
///
/// Every field is optional on the wire; an all-default request is
/// normally not sent at all (the CLI sends `None` instead), letting the
/// remote service apply its own default paging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    /// Opaque key of the page to fetch, as returned by a previous query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Number of records to skip before the first result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Maximum number of records in the result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Ask the service to count the total number of records.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub count_total: bool,
    /// Return records in reverse order.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reverse: bool,
}

impl PageRequest {
    /// True if no paging control is set.
    pub fn is_empty(&self) -> bool {
        self.key.is_none()
            && self.offset.is_none()
            && self.limit.is_none()
            && !self.count_total
            && !self.reverse
    }
}
