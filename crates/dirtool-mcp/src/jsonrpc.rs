//! JSON-RPC 2.0 message shapes for the line-oriented stdio transport.
//!
//! Only the subset the MCP server speaks: single requests and responses.
//! Batches are rejected at the transport level before parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const JSONRPC_VERSION: &str = "2.0";

// Standard error codes from the JSON-RPC 2.0 spec
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;

/// Request id. Untagged so `"abc"`, `42` and `null` all round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
    Null,
}

impl RequestId {
    /// Fresh id for responses to messages whose own id never parsed.
    pub fn new_uuid() -> Self {
        RequestId::String(Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    /// Absent for notifications. `null` is a present id (`RequestId::Null`),
    /// so deserialization must distinguish a missing key from an explicit null.
    #[serde(
        default,
        deserialize_with = "deserialize_present_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RequestId>,
}

fn deserialize_present_id<'de, D>(deserializer: D) -> Result<Option<RequestId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    RequestId::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<RequestId>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RequestId>, result: Value) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), result: Some(result), error: None, id }
    }

    pub fn error(id: Option<RequestId>, error: JsonRpcError) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_string(), result: None, error: Some(error), id }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    fn new(code: i32, message: &str) -> Self {
        Self { code, message: message.to_string(), data: None }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn parse_error() -> Self {
        Self::new(PARSE_ERROR, "Parse error")
    }

    pub fn invalid_request() -> Self {
        Self::new(INVALID_REQUEST, "Invalid Request")
    }

    pub fn method_not_found() -> Self {
        Self::new(METHOD_NOT_FOUND, "Method not found")
    }

    pub fn invalid_params() -> Self {
        Self::new(INVALID_PARAMS, "Invalid params")
    }

    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR, "Internal error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_id_accepts_string_number_and_null() {
        let req: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": "abc", "method": "ping"}))
                .unwrap();
        assert!(matches!(req.id, Some(RequestId::String(ref s)) if s == "abc"));

        let req: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 42, "method": "ping"})).unwrap();
        assert!(matches!(req.id, Some(RequestId::Number(42))));

        let req: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": null, "method": "ping"}))
                .unwrap();
        assert!(matches!(req.id, Some(RequestId::Null)));
    }

    #[test]
    fn test_success_response_omits_error_field() {
        let response = JsonRpcResponse::success(Some(RequestId::Number(1)), json!({"ok": true}));
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire, json!({"jsonrpc": "2.0", "result": {"ok": true}, "id": 1}));
    }

    #[test]
    fn test_error_response_carries_code_and_data() {
        let response = JsonRpcResponse::error(
            None,
            JsonRpcError::method_not_found().with_data(json!({"method": "resources/list"})),
        );
        let wire = serde_json::to_value(&response).unwrap();
        assert_eq!(wire["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(wire["error"]["message"], "Method not found");
        assert_eq!(wire["error"]["data"]["method"], "resources/list");
        assert_eq!(wire["id"], Value::Null);
    }
}
