//! JSON-RPC query client for the incentives service.
//!
//! This crate implements the dispatch side of the query pipeline: given
//! a [`QueryRequest`](incentives_types::QueryRequest), it selects the
//! matching remote method, performs a single HTTP round trip, and
//! returns the raw response or a propagated error. It never interprets
//! response payloads and applies no retry policy.

pub mod client;
pub mod error;

pub use client::QueryClient;
pub use error::{ClientError, ClientResult};
