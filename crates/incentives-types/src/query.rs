//! Query request and response variants for the incentives service.
//!
//! One request variant per remote method. Address-typed fields hold
//! [`Address`] values, so a request cannot be constructed from an
//! unvalidated string. Response payloads are opaque JSON: this layer
//! forwards them to the renderer without interpreting their contents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::Address;
use crate::pagination::PageRequest;

/// Request payload for the `incentives` list query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncentivesRequest {
    /// Optional paging controls; absent means remote default paging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

/// Request payload for a single contract incentive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveRequest {
    /// Incentivized contract address.
    pub contract: Address,
}

/// Request payload for the gas meters of an incentivized contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasMetersRequest {
    /// Incentivized contract address.
    pub contract: Address,
    /// Optional paging controls; absent means remote default paging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageRequest>,
}

/// Request payload for a single (contract, participant) gas meter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasMeterRequest {
    /// Incentivized contract address.
    pub contract: Address,
    /// Participant account address.
    pub participant: Address,
}

/// Request payload for the module parameters. Always empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamsRequest {}

/// A query to the incentives service, one variant per remote method.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryRequest {
    /// List all registered incentives.
    Incentives(IncentivesRequest),
    /// Get the incentive for a contract.
    Incentive(IncentiveRequest),
    /// List gas meters for an incentivized contract.
    GasMeters(GasMetersRequest),
    /// Get the gas meter for a (contract, participant) pair.
    GasMeter(GasMeterRequest),
    /// Get the module parameters.
    Params(ParamsRequest),
}

impl QueryRequest {
    /// Remote method this request dispatches to.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Incentives(_) => "incentives_incentives",
            Self::Incentive(_) => "incentives_incentive",
            Self::GasMeters(_) => "incentives_gasMeters",
            Self::GasMeter(_) => "incentives_gasMeter",
            Self::Params(_) => "incentives_params",
        }
    }

    /// Serialize the request payload to its wire object.
    pub fn to_wire(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Incentives(r) => serde_json::to_value(r),
            Self::Incentive(r) => serde_json::to_value(r),
            Self::GasMeters(r) => serde_json::to_value(r),
            Self::GasMeter(r) => serde_json::to_value(r),
            Self::Params(r) => serde_json::to_value(r),
        }
    }
}

/// Response from the incentives service, mirroring the request kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryResponse {
    /// Response to [`QueryRequest::Incentives`].
    Incentives(Value),
    /// Response to [`QueryRequest::Incentive`].
    Incentive(Value),
    /// Response to [`QueryRequest::GasMeters`].
    GasMeters(Value),
    /// Response to [`QueryRequest::GasMeter`].
    GasMeter(Value),
    /// Response to [`QueryRequest::Params`].
    Params(Value),
}

impl QueryResponse {
    /// The opaque payload returned by the remote service.
    pub fn payload(&self) -> &Value {
        match self {
            Self::Incentives(v)
            | Self::Incentive(v)
            | Self::GasMeters(v)
            | Self::GasMeter(v)
            | Self::Params(v) => v,
        }
    }
}
