//! MCP server: JSON-RPC over stdio, one tool per catalog endpoint.

use std::io::{BufRead, BufReader, Write};

use serde_json::{json, Map, Value};
use tracing::{debug, error, info};

use dirtool_catalog::{all_endpoints, catalog};
use dirtool_core::{ApiConfig, Endpoint, ParamSpec};
use dirtool_dispatch::Dispatcher;

use crate::jsonrpc::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestId, JSONRPC_VERSION,
};
use crate::protocol::{
    Implementation, InitializeRequest, InitializeResponse, ServerCapabilities, Tool,
    ToolInputSchema, ToolsCallRequest, ToolsCallResponse, ToolsCapability, ToolsListResponse,
    LATEST_PROTOCOL_VERSION, METHOD_INITIALIZE, METHOD_PING, METHOD_TOOLS_CALL, METHOD_TOOLS_LIST,
    SUPPORTED_PROTOCOL_VERSIONS,
};
use crate::{McpError, McpResult};

pub struct McpServer {
    dispatcher: Dispatcher,
}

impl McpServer {
    pub fn new(config: ApiConfig) -> Self {
        Self { dispatcher: Dispatcher::new(config) }
    }

    /// Process a single MCP message; `None` for notifications.
    pub async fn process_message(&self, body: &[u8]) -> McpResult<Option<JsonRpcResponse>> {
        let request: JsonRpcRequest = serde_json::from_slice(body).map_err(|e| {
            error!("Failed to parse JSON-RPC request: {}", e);
            McpError::Parse(e)
        })?;

        debug!("Processing method: {}", request.method);

        if request.jsonrpc != JSONRPC_VERSION {
            return Ok(Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request()
                    .with_data(json!({"message": "Invalid JSON-RPC version"})),
            )));
        }

        // Notifications get no response
        if request.id.is_none() {
            debug!("Received notification, ignoring");
            return Ok(None);
        }

        let response = match request.method.as_str() {
            METHOD_INITIALIZE => self.handle_initialize(&request)?,
            METHOD_PING => JsonRpcResponse::success(request.id.clone(), json!({})),
            METHOD_TOOLS_LIST => self.handle_tools_list(&request)?,
            METHOD_TOOLS_CALL => self.handle_tools_call(&request).await?,
            _ => JsonRpcResponse::error(
                request.id,
                JsonRpcError::method_not_found().with_data(json!({"method": request.method})),
            ),
        };

        Ok(Some(response))
    }

    fn handle_initialize(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let params = request.params.as_ref().ok_or_else(|| {
            McpError::InvalidArguments("Missing params for initialize".to_string())
        })?;

        let init_request: InitializeRequest = serde_json::from_value(params.clone())?;

        // Echo a supported version back, otherwise offer the latest
        let protocol_version =
            if SUPPORTED_PROTOCOL_VERSIONS.contains(&init_request.protocol_version.as_str()) {
                init_request.protocol_version
            } else {
                LATEST_PROTOCOL_VERSION.to_string()
            };

        let response = InitializeResponse {
            protocol_version,
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: None },
            },
            server_info: Implementation {
                name: "Admin SDK Directory MCP Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Tools for managing Google Workspace users, groups, devices and resources"
                    .to_string(),
            ),
        };

        Ok(JsonRpcResponse::success(request.id.clone(), serde_json::to_value(response)?))
    }

    fn handle_tools_list(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let tools: Vec<Tool> = all_endpoints().map(tool_definition).collect();
        debug!("Listing {} tools", tools.len());

        let response = ToolsListResponse { tools, next_cursor: None };
        Ok(JsonRpcResponse::success(request.id.clone(), serde_json::to_value(response)?))
    }

    async fn handle_tools_call(&self, request: &JsonRpcRequest) -> McpResult<JsonRpcResponse> {
        let params = request.params.as_ref().ok_or_else(|| {
            McpError::InvalidArguments("Missing params for tools/call".to_string())
        })?;

        let call_request: ToolsCallRequest = serde_json::from_value(params.clone())?;
        debug!("Calling tool: {}", call_request.name);

        let endpoint = catalog()
            .get(&call_request.name)
            .ok_or_else(|| McpError::ToolNotFound(format!("Tool not found: {}", call_request.name)))?;

        let args = match call_request.arguments {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(_) => {
                return Err(McpError::InvalidArguments("Arguments must be an object".to_string()))
            }
        };

        // Dispatch failures are tool results, not protocol errors
        let result = match self.dispatcher.dispatch(endpoint, &args).await {
            Ok(text) => ToolsCallResponse::text(text),
            Err(e) => ToolsCallResponse::error(e.to_string()),
        };

        Ok(JsonRpcResponse::success(request.id.clone(), serde_json::to_value(result)?))
    }
}

/// Build the published tool for an endpoint: path parameters (required),
/// then query parameters, then body fields. A body field that shares its
/// name with a path parameter keeps the path parameter's schema entry.
fn tool_definition(endpoint: &Endpoint) -> Tool {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for param in endpoint.path_params {
        properties.insert(param.name.to_string(), property(param));
        required.push(param.name.to_string());
    }
    for param in endpoint.query_params {
        properties.entry(param.name.to_string()).or_insert_with(|| property(param));
    }
    if let Some(codec) = endpoint.body {
        for field in codec.fields {
            properties.entry(field.name.to_string()).or_insert_with(|| property(field));
        }
    }

    Tool {
        name: endpoint.tool_name(),
        description: endpoint.description.to_string(),
        input_schema: ToolInputSchema {
            schema_type: "object".to_string(),
            properties,
            required,
        },
    }
}

fn property(param: &ParamSpec) -> Value {
    let mut prop = Map::new();
    prop.insert("type".to_string(), Value::String(param.ty.json_type().to_string()));
    if !param.description.is_empty() {
        prop.insert("description".to_string(), Value::String(param.description.to_string()));
    }
    Value::Object(prop)
}

/// Serve MCP over stdio: one JSON-RPC message per line.
pub async fn serve_stdio(config: ApiConfig) -> McpResult<()> {
    info!("Starting Directory MCP server (stdio mode)");
    info!(base_url = %config.base_url, "API configuration loaded");

    let server = McpServer::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    for line in BufReader::new(stdin).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        debug!("Processing line: {}", line);

        // MCP does not support JSON-RPC batches
        let trimmed_line = line.trim();
        if trimmed_line.starts_with('[') {
            error!("Batch requests are not supported");
            let response = JsonRpcResponse::error(
                None,
                JsonRpcError::invalid_request()
                    .with_data(json!({"message": "Batch requests are not supported"})),
            );
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
            continue;
        }

        match server.process_message(line.as_bytes()).await {
            Ok(Some(response)) => {
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
            }
            Ok(None) => {
                // Notification - no response needed
            }
            Err(e) => {
                error!("Error processing message: {}", e);
                let response = JsonRpcResponse::error(Some(RequestId::new_uuid()), e.to_jsonrpc_error());
                writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                stdout.flush()?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> McpServer {
        McpServer::new(ApiConfig::default())
    }

    async fn process(server: &McpServer, message: Value) -> Option<JsonRpcResponse> {
        server.process_message(message.to_string().as_bytes()).await.unwrap()
    }

    #[tokio::test]
    async fn test_initialize_echoes_supported_version() {
        let response = process(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {"protocolVersion": "2024-11-05", "capabilities": {}, "clientInfo": {}}
            }),
        )
        .await
        .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_initialize_falls_back_to_latest_version() {
        let response = process(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {"protocolVersion": "1999-01-01"}
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.result.unwrap()["protocolVersion"], LATEST_PROTOCOL_VERSION);
    }

    #[tokio::test]
    async fn test_ping() {
        let response =
            process(&server(), json!({"jsonrpc": "2.0", "id": 7, "method": "ping"})).await.unwrap();
        assert_eq!(response.result.unwrap(), json!({}));
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version_is_rejected() {
        let response =
            process(&server(), json!({"jsonrpc": "1.0", "id": 1, "method": "ping"})).await.unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, crate::jsonrpc::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_notification_gets_no_response() {
        let response = process(
            &server(),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
        )
        .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response =
            process(&server(), json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"}))
                .await
                .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, crate::jsonrpc::METHOD_NOT_FOUND);
        assert_eq!(error.data.unwrap()["method"], "resources/list");
    }

    #[tokio::test]
    async fn test_tools_list_publishes_the_whole_catalog() {
        let response =
            process(&server(), json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}))
                .await
                .unwrap();
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 123);

        let get_user = tools
            .iter()
            .find(|t| t["name"] == "get_admin_directory_v1_users_userKey")
            .unwrap();
        assert_eq!(get_user["inputSchema"]["type"], "object");
        assert_eq!(get_user["inputSchema"]["required"], json!(["userKey"]));
        assert_eq!(get_user["inputSchema"]["properties"]["userKey"]["type"], "string");
        assert_eq!(get_user["inputSchema"]["properties"]["projection"]["type"], "string");
    }

    #[tokio::test]
    async fn test_tools_list_merges_body_fields_into_schema() {
        let response =
            process(&server(), json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}))
                .await
                .unwrap();
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();

        let insert_member = tools
            .iter()
            .find(|t| t["name"] == "post_admin_directory_v1_groups_groupKey_members")
            .unwrap();
        let properties = insert_member["inputSchema"]["properties"].as_object().unwrap();
        assert!(properties.contains_key("groupKey"));
        assert!(properties.contains_key("email"));
        assert!(properties.contains_key("delivery_settings"));
        assert_eq!(insert_member["inputSchema"]["required"], json!(["groupKey"]));
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let err = server()
            .process_message(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "method": "tools/call",
                    "params": {"name": "no_such_tool", "arguments": {}}
                })
                .to_string()
                .as_bytes(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::ToolNotFound(_)));
    }

    #[tokio::test]
    async fn test_tools_call_non_object_arguments() {
        let err = server()
            .process_message(
                json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "method": "tools/call",
                    "params": {"name": "get_admin_directory_v1_users", "arguments": [1, 2]}
                })
                .to_string()
                .as_bytes(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_tools_call_dispatch_failure_is_a_tool_error() {
        // A missing path parameter fails locally, before any request is made
        let response = process(
            &server(),
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "tools/call",
                "params": {"name": "get_admin_directory_v1_users_userKey", "arguments": {}}
            }),
        )
        .await
        .unwrap();

        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["content"][0]["text"],
            "Missing required path parameter: userKey"
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_a_parse_error() {
        let err = server().process_message(b"{not json").await.unwrap_err();
        assert!(matches!(err, McpError::Parse(_)));
        assert_eq!(err.to_jsonrpc_error().code, crate::jsonrpc::PARSE_ERROR);
    }
}
