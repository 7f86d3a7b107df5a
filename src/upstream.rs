use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, error};

use crate::error::RelayError;
use crate::rpc::{RpcRequest, RpcResponse};

/// Client wrapper for the upstream JSON-RPC node.
///
/// Holds a reusable `reqwest::Client`; safe to share across handlers
/// without synchronization.
#[derive(Clone)]
pub struct NodeClient {
    http_client: Client,
    rpc_url: String,
}

impl NodeClient {
    /// Create a new upstream client.
    pub fn new(rpc_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            rpc_url: rpc_url.to_string(),
        }
    }

    /// Get the upstream endpoint URL.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Send a JSON-RPC request to the upstream node and decode the
    /// response shape.
    ///
    /// The exchange is a single POST with no retries and no timeout beyond
    /// the transport default. Any HTTP response whose body decodes as a
    /// JSON-RPC response counts as success — a JSON-RPC `error` member is
    /// the caller's business, not ours, and the HTTP status is not
    /// inspected either.
    pub async fn call(&self, request: &RpcRequest) -> Result<RpcResponse, RelayError> {
        let body = serde_json::to_vec(request)
            .map_err(|e| RelayError::InternalError(e.to_string()))?;

        debug!("sending upstream request: method={}", request.method);

        let response = self
            .http_client
            .post(&self.rpc_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("upstream request failed: {}", e);
                RelayError::UpstreamUnreachable(e.to_string())
            })?;

        let bytes = response.bytes().await.map_err(|e| {
            error!("failed reading upstream response: {}", e);
            RelayError::UpstreamUnreachable(e.to_string())
        })?;

        let rpc_response: RpcResponse = serde_json::from_slice(&bytes).map_err(|e| {
            error!("upstream returned a non-JSON-RPC body: {}", e);
            RelayError::UpstreamProtocolError(e.to_string())
        })?;

        debug!(
            "upstream response: method={} error={}",
            request.method,
            !rpc_response.error.is_null()
        );

        Ok(rpc_response)
    }
}
