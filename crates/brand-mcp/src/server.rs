//! MCP request handling

use brand_tools::ToolRegistry;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::protocol::{
    JSONRPC_VERSION, MCP_PROTOCOL_VERSION, RpcError, ToolCallResult, ToolDefinition,
    error_response, success_response,
};

const SERVER_NAME: &str = "brandcheck";

const INSTRUCTIONS: &str = "Check whether a brand name is free to use. Start with check_all \
     for a scored overview or assess_safety for a go/no-go view, then use the check_* tools \
     to drill into a single channel. Use compare_brands or batch_check for several candidates. \
     Brand names are lowercase letters, digits and hyphens. Results marked 'Unknown (check \
     manually)' could not be determined and are neither available nor taken.";

/// Answers MCP requests from a tool registry
///
/// Holds no per-request state, so one instance serves every in-flight request.
pub struct BrandServer {
    registry: ToolRegistry,
}

impl BrandServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Handle one raw transport line
    ///
    /// Returns `None` when nothing should be written back (notifications and
    /// stray responses).
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        match serde_json::from_str::<Value>(line) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => Some(error_response(
                Value::Null,
                RpcError::parse_error(format!("Parse error: {e}")),
            )),
        }
    }

    /// Handle one decoded JSON-RPC message
    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        let Some(obj) = message.as_object() else {
            return Some(error_response(
                Value::Null,
                RpcError::invalid_request("Request must be a JSON object"),
            ));
        };

        if obj.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
            let id = obj.get("id").cloned().unwrap_or(Value::Null);
            return Some(error_response(
                id,
                RpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        let Some(method) = obj.get("method").and_then(Value::as_str) else {
            // A response to something we never sent
            return None;
        };

        let params = obj.get("params").cloned().unwrap_or(Value::Null);
        match obj.get("id").cloned() {
            Some(id) => Some(match self.handle_request(method, params).await {
                Ok(result) => success_response(id, result),
                Err(err) => error_response(id, err),
            }),
            None => {
                debug!(method, "Ignoring notification");
                None
            }
        }
    }

    async fn handle_request(&self, method: &str, params: Value) -> Result<Value, RpcError> {
        match method {
            "initialize" => Ok(self.initialize_payload(&params)),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.tools_list_payload()),
            "tools/call" => self.handle_tools_call(params).await,
            _ => Err(RpcError::method_not_found(method)),
        }
    }

    fn initialize_payload(&self, params: &Value) -> Value {
        if let Some(client) = params.pointer("/clientInfo/name").and_then(Value::as_str) {
            info!(client, "Client connected");
        }

        json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": {
                "tools": {
                    "listChanged": false
                }
            },
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "instructions": INSTRUCTIONS
        })
    }

    fn tools_list_payload(&self) -> Value {
        let tools: Vec<ToolDefinition> = self
            .registry
            .list_tools()
            .iter()
            .map(|tool| ToolDefinition::from_tool(tool.as_ref()))
            .collect();
        json!({ "tools": tools })
    }

    async fn handle_tools_call(&self, params: Value) -> Result<Value, RpcError> {
        let params = params
            .as_object()
            .ok_or_else(|| RpcError::invalid_params("tools/call params must be an object"))?;

        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_params("tools/call requires string field 'name'"))?;

        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| RpcError::invalid_params(format!("Unknown tool: {name}")))?;

        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        debug!(tool = name, endpoint = %tool.endpoint(), "Calling tool");
        let result = match tool.execute(arguments).await {
            Ok(output) => ToolCallResult::success(output.into_text()),
            Err(err) => {
                if err.is_validation() {
                    debug!(tool = name, error = %err, "Rejected tool arguments");
                } else {
                    warn!(tool = name, error = %err, "Tool call failed");
                }
                ToolCallResult::failure(err.to_string())
            }
        };

        serde_json::to_value(result).map_err(|e| RpcError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brand_api::{BrandApi, Endpoint, MockBrandApi};
    use brand_core::{BrandName, CheckMode, Error};
    use std::sync::Arc;

    fn server_with(api: MockBrandApi) -> BrandServer {
        let api: Arc<dyn BrandApi> = Arc::new(api);
        BrandServer::new(ToolRegistry::with_brand_tools(api))
    }

    fn idle_server() -> BrandServer {
        server_with(MockBrandApi::new())
    }

    fn call(id: u64, name: &str, arguments: Value) -> Value {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        })
    }

    #[tokio::test]
    async fn test_initialize() {
        let response = idle_server()
            .handle_message(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2025-06-18",
                    "capabilities": {},
                    "clientInfo": { "name": "test-client", "version": "1.0" }
                }
            }))
            .await
            .unwrap();

        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "brandcheck");
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = idle_server()
            .handle_message(json!({"jsonrpc": "2.0", "id": "list", "method": "tools/list"}))
            .await
            .unwrap();

        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 12);

        let domains = tools
            .iter()
            .find(|t| t["name"] == "check_domains")
            .unwrap();
        assert_eq!(domains["title"], "Check domains");
        assert_eq!(domains["inputSchema"]["required"], json!(["name"]));
        assert_eq!(domains["annotations"]["readOnlyHint"], true);
        assert_eq!(domains["annotations"]["openWorldHint"], true);
    }

    #[tokio::test]
    async fn test_tools_call_text_tool() {
        let mut api = MockBrandApi::new();
        api.expect_get()
            .withf(|e: &Endpoint, name: &BrandName, mode: &Option<CheckMode>| {
                *e == Endpoint::CheckSocial && name.as_str() == "acme" && mode.is_none()
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(json!({
                    "results": [
                        { "platform": "GitHub", "available": null, "url": "https://github.com/acme" }
                    ]
                }))
            });

        let response = server_with(api)
            .handle_message(call(3, "check_social", json!({"name": "acme"})))
            .await
            .unwrap();

        let result = &response["result"];
        assert!(result.get("isError").is_none());
        assert_eq!(
            result["content"][0]["text"],
            "Social handles for \"acme\":\n- GitHub: Unknown (check manually) — https://github.com/acme"
        );
    }

    #[tokio::test]
    async fn test_tools_call_passthrough_tool() {
        let mut api = MockBrandApi::new();
        api.expect_post()
            .times(1)
            .returning(|_, _| Ok(json!({"ranking": ["globex", "acme"]})));

        let response = server_with(api)
            .handle_message(call(4, "compare_brands", json!({"names": ["acme", "globex"]})))
            .await
            .unwrap();

        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let body: Value = serde_json::from_str(text).unwrap();
        assert_eq!(body, json!({"ranking": ["globex", "acme"]}));
    }

    #[tokio::test]
    async fn test_validation_failure_is_tool_error() {
        let response = idle_server()
            .handle_message(call(5, "check_all", json!({"name": "-acme"})))
            .await
            .unwrap();

        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Invalid name"), "{text}");
    }

    #[tokio::test]
    async fn test_api_failure_is_tool_error() {
        let mut api = MockBrandApi::new();
        api.expect_get().times(1).returning(|_, _, _| {
            Err(Error::Api {
                status: 429,
                body: "rate limited".to_string(),
            })
        });

        let response = server_with(api)
            .handle_message(call(6, "check_trademarks", json!({"name": "acme"})))
            .await
            .unwrap();

        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("429"), "{text}");
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let server = idle_server();

        let unknown_tool = server
            .handle_message(call(7, "check_everything", json!({"name": "acme"})))
            .await
            .unwrap();
        assert_eq!(unknown_tool["error"]["code"], RpcError::INVALID_PARAMS);

        let unknown_method = server
            .handle_message(json!({"jsonrpc": "2.0", "id": 8, "method": "resources/list"}))
            .await
            .unwrap();
        assert_eq!(unknown_method["error"]["code"], RpcError::METHOD_NOT_FOUND);

        let bad_version = server
            .handle_message(json!({"jsonrpc": "1.0", "id": 9, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(bad_version["error"]["code"], RpcError::INVALID_REQUEST);
        assert_eq!(bad_version["id"], 9);

        let not_object = server.handle_message(json!([1, 2])).await.unwrap();
        assert_eq!(not_object["error"]["code"], RpcError::INVALID_REQUEST);

        let garbage = server.handle_line("{not json").await.unwrap();
        assert_eq!(garbage["error"]["code"], RpcError::PARSE_ERROR);
        assert_eq!(garbage["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let server = idle_server();
        assert!(
            server
                .handle_message(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .await
                .is_none()
        );
        assert!(
            server
                .handle_message(json!({"jsonrpc": "2.0", "id": 1, "result": {}}))
                .await
                .is_none()
        );

        let pong = server
            .handle_message(json!({"jsonrpc": "2.0", "id": 2, "method": "ping"}))
            .await
            .unwrap();
        assert_eq!(pong["result"], json!({}));
    }
}
