use tracing::debug;

use crate::error::RelayError;
use crate::rpc::{Envelope, RpcRequest, PROTOCOL_VERSION};

/// Fixed request id every envelope must carry.
///
/// Callers must send `id: 2` and the outbound request carries the same id
/// rather than echoing the caller's own. TODO: echo the caller's id once
/// existing clients stop pinning it.
pub const EXPECTED_ID: i64 = 2;

/// Static description of one relayed RPC method.
///
/// Adding a route means adding one of these and wiring it to a path; the
/// validation and forwarding logic is shared.
#[derive(Debug, Clone, Copy)]
pub struct MethodSpec {
    /// Method name the inbound envelope must carry.
    pub method: &'static str,
    /// Request id the inbound envelope must carry.
    pub expected_id: i64,
    /// Exact positional parameter count, if the method takes params.
    pub params_arity: Option<usize>,
    /// Method name sent to the upstream node.
    pub upstream_method: &'static str,
}

/// eth_blockNumber takes no parameters.
pub const BLOCK_NUMBER: MethodSpec = MethodSpec {
    method: "eth_blockNumber",
    expected_id: EXPECTED_ID,
    params_arity: None,
    upstream_method: "eth_blockNumber",
};

/// eth_getBlockByNumber takes the block tag and the full-transactions flag.
pub const BLOCK_BY_NUMBER: MethodSpec = MethodSpec {
    method: "eth_getBlockByNumber",
    expected_id: EXPECTED_ID,
    params_arity: Some(2),
    upstream_method: "eth_getBlockByNumber",
};

impl MethodSpec {
    /// Check an inbound envelope against this method's expected shape.
    ///
    /// Checks run in order and stop at the first mismatch. Every mismatch
    /// maps to the same wire-level error; the specific check only shows up
    /// in the debug log.
    pub fn validate(&self, envelope: &Envelope) -> Result<(), RelayError> {
        if envelope.jsonrpc != PROTOCOL_VERSION {
            debug!(
                "rejected {}: jsonrpc was {:?}, expected {:?}",
                self.method, envelope.jsonrpc, PROTOCOL_VERSION
            );
            return Err(RelayError::SchemaViolation);
        }
        if envelope.method != self.method {
            debug!(
                "rejected {}: method was {:?}",
                self.method, envelope.method
            );
            return Err(RelayError::SchemaViolation);
        }
        if envelope.id != self.expected_id {
            debug!(
                "rejected {}: id was {}, expected {}",
                self.method, envelope.id, self.expected_id
            );
            return Err(RelayError::SchemaViolation);
        }
        if let Some(arity) = self.params_arity {
            let got = envelope.params.as_ref().map_or(0, Vec::len);
            if got != arity {
                debug!(
                    "rejected {}: {} params, expected {}",
                    self.method, got, arity
                );
                return Err(RelayError::SchemaViolation);
            }
        }
        Ok(())
    }

    /// Build the outbound request from a validated envelope.
    ///
    /// Only the validated params are reused; method, id, and protocol
    /// version come from this table entry, so the outbound shape never
    /// depends on unchecked inbound fields.
    pub fn outbound_request(&self, envelope: Envelope) -> RpcRequest {
        let params = match self.params_arity {
            Some(_) => envelope.params,
            None => None,
        };
        RpcRequest::new(self.upstream_method, params, self.expected_id)
    }
}
