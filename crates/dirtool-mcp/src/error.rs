//! Error handling for the MCP server.

use thiserror::Error;

use crate::jsonrpc::JsonRpcError;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

#[derive(Debug, Error)]
pub enum McpError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error
    pub fn to_jsonrpc_error(&self) -> JsonRpcError {
        match self {
            McpError::Parse(e) => JsonRpcError::parse_error().with_data(serde_json::json!({
                "message": e.to_string()
            })),
            McpError::InvalidArguments(msg) => {
                JsonRpcError::invalid_params().with_data(serde_json::json!({
                    "message": msg
                }))
            }
            McpError::ToolNotFound(msg) => {
                JsonRpcError::method_not_found().with_data(serde_json::json!({
                    "message": msg
                }))
            }
            McpError::Io(e) => JsonRpcError::internal_error().with_data(serde_json::json!({
                "message": e.to_string()
            })),
        }
    }
}
