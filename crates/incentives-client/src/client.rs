//! The query client: one synchronous round trip per invocation.

use std::time::Duration;

use incentives_types::{QueryRequest, QueryResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ClientResult};

/// JSON-RPC protocol version sent in every envelope.
const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

/// Error object inside a response envelope.
#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Client for the read-only incentives query service.
///
/// A client is built once per CLI invocation and performs exactly one
/// request/response round trip: no retries, no caching, no batching.
/// Dropping the client releases the underlying connection.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    height: Option<u64>,
}

impl QueryClient {
    /// Build a client for `endpoint` with a per-call `timeout`.
    ///
    /// Fails with [`ClientError::Setup`] if the endpoint is not a valid
    /// URL or the HTTP client cannot be constructed.
    pub fn connect(endpoint: &str, timeout: Duration) -> ClientResult<Self> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            ClientError::Setup(format!("invalid node endpoint '{}': {}", endpoint, e))
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Setup(e.to_string()))?;
        Ok(Self {
            http,
            endpoint,
            height: None,
        })
    }

    /// Pin all queries from this client to a block height.
    pub fn at_height(mut self, height: Option<u64>) -> Self {
        self.height = height;
        self
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Dispatch a query and return the response variant mirroring it.
    ///
    /// The call either fully succeeds or fully fails; remote error text
    /// is propagated verbatim.
    pub async fn query(&self, req: &QueryRequest) -> ClientResult<QueryResponse> {
        let params = request_params(req, self.height)?;
        let payload = self.call(req.method(), params).await?;
        Ok(match req {
            QueryRequest::Incentives(_) => QueryResponse::Incentives(payload),
            QueryRequest::Incentive(_) => QueryResponse::Incentive(payload),
            QueryRequest::GasMeters(_) => QueryResponse::GasMeters(payload),
            QueryRequest::GasMeter(_) => QueryResponse::GasMeter(payload),
            QueryRequest::Params(_) => QueryResponse::Params(payload),
        })
    }

    /// Perform the single HTTP POST for `method`.
    async fn call(&self, method: &str, params: Vec<Value>) -> ClientResult<Value> {
        let envelope = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method,
            params,
        };
        tracing::debug!(method, endpoint = %self.endpoint, "dispatching query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&envelope)
            .send()
            .await?
            .error_for_status()?;

        let body: RpcResponse = serde_json::from_slice(&response.bytes().await?)?;
        match (body.result, body.error) {
            (_, Some(err)) => Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ClientError::MissingResult),
        }
    }
}

/// Build the positional params for a request, folding in the pinned
/// height when one is set.
fn request_params(req: &QueryRequest, height: Option<u64>) -> ClientResult<Vec<Value>> {
    let mut wire = req.to_wire()?;
    if let (Some(height), Value::Object(map)) = (height, &mut wire) {
        map.insert("height".to_string(), Value::from(height));
    }
    Ok(vec![wire])
}

#[cfg(test)]
mod tests {
    use super::*;
    use incentives_types::{Address, GasMetersRequest, IncentivesRequest, ParamsRequest};
    use serde_json::json;

    const CONTRACT: &str = "0x0000000000000000000000000000000000000000";

    #[test]
    fn test_request_params_plain() {
        let req = QueryRequest::Params(ParamsRequest::default());
        let params = request_params(&req, None).unwrap();
        assert_eq!(params, vec![json!({})]);
    }

    #[test]
    fn test_request_params_with_height() {
        let req = QueryRequest::GasMeters(GasMetersRequest {
            contract: Address::parse(CONTRACT).unwrap(),
            pagination: None,
        });
        let params = request_params(&req, Some(1_234_567)).unwrap();
        assert_eq!(
            params,
            vec![json!({ "contract": CONTRACT, "height": 1_234_567 })]
        );
    }

    #[test]
    fn test_envelope_shape() {
        let req = QueryRequest::Incentives(IncentivesRequest::default());
        let envelope = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: 1,
            method: req.method(),
            params: request_params(&req, None).unwrap(),
        };
        let wire = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            wire,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "incentives_incentives",
                "params": [{}],
            })
        );
    }

    #[test]
    fn test_parse_result_envelope() {
        let body: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":{"incentives":[]}}"#)
                .unwrap();
        assert_eq!(body.result, Some(json!({ "incentives": [] })));
        assert!(body.error.is_none());
    }

    #[test]
    fn test_parse_error_envelope() {
        let body: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"contract not incentivized"}}"#,
        )
        .unwrap();
        let err = body.error.unwrap();
        assert_eq!(err.code, -32000);
        assert_eq!(err.message, "contract not incentivized");
    }

    #[test]
    fn test_connect_rejects_bad_endpoint() {
        let err = QueryClient::connect("not a url", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, ClientError::Setup(_)));
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn test_connect_and_pin_height() {
        let client = QueryClient::connect("http://127.0.0.1:8545", Duration::from_secs(5))
            .unwrap()
            .at_height(Some(42));
        assert_eq!(client.height, Some(42));
        assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8545/");
    }
}
