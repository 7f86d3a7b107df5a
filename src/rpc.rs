use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Protocol version every envelope and outbound request must carry.
pub const PROTOCOL_VERSION: &str = "2.0";

/// Inbound request envelope accepted by the relay routes.
///
/// Missing fields decode to their defaults (empty string, `None`, `0`) so
/// that shape problems surface through validation rather than the decoder;
/// unknown extra fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub jsonrpc: String,
    pub method: String,
    pub params: Option<Vec<Value>>,
    pub id: i64,
}

/// JSON-RPC request sent to the upstream node.
///
/// Always constructed fresh from validated envelope fields, never passed
/// through, so the outbound shape is well-formed even when the inbound
/// envelope carried extra fields.
#[derive(Debug, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<Value>>,
    pub id: i64,
}

impl RpcRequest {
    pub fn new(method: &str, params: Option<Vec<Value>>, id: i64) -> Self {
        Self {
            jsonrpc: PROTOCOL_VERSION.to_string(),
            method: method.to_string(),
            params,
            id,
        }
    }
}

/// JSON-RPC response from the upstream node.
///
/// Decoded only far enough to re-encode: `result` and `error` stay opaque
/// JSON values, defaulting to `null` when absent, and both are always
/// re-serialized so the caller sees the full response shape.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Value,
    pub error: Value,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_params() {
        let request = RpcRequest::new("eth_blockNumber", None, 2);
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "method": "eth_blockNumber", "id": 2})
        );
    }

    #[test]
    fn test_request_keeps_params_order() {
        let params = vec![json!("0x1b4"), json!(true)];
        let request = RpcRequest::new("eth_getBlockByNumber", Some(params), 2);
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["params"], json!(["0x1b4", true]));
    }

    #[test]
    fn test_envelope_missing_fields_default() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.jsonrpc, "");
        assert_eq!(envelope.method, "");
        assert_eq!(envelope.id, 0);
        assert!(envelope.params.is_none());
    }

    #[test]
    fn test_envelope_rejects_wrong_field_types() {
        let result: Result<Envelope, _> =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "id": "two"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_absent_members_reencode_as_null() {
        let response: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "result": "0x1b4", "id": 2}"#).unwrap();
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(
            encoded,
            json!({"jsonrpc": "2.0", "result": "0x1b4", "error": null, "id": 2})
        );
    }

    #[test]
    fn test_response_error_preserved() {
        let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"invalid params"},"id":2}"#;
        let response: RpcResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error["code"], json!(-32602));
        assert!(response.result.is_null());
    }
}
