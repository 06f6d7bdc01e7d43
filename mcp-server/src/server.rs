//! MCP Server implementation
use crate::capabilities::CapabilitiesRegistry;
use crate::claim_tool::FetchClaimHealthRecordTool;
use crate::error::{McpError, McpResult};
use crate::protocol::{
    error_codes, methods, McpProtocolError, McpRequest, McpResponse, ToolInput, PROTOCOL_VERSION,
};
use crate::tools::ToolsRegistry;
use claims_service::ClaimsService;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "claims-mcp-server";

/// MCP Server
pub struct Server {
    capabilities: CapabilitiesRegistry,
    tools: ToolsRegistry,
}

impl Server {
    /// Create a server exposing the given tools
    pub fn new(tools: ToolsRegistry) -> Self {
        info!(tools = tools.len(), "Initializing MCP Server");

        Self {
            capabilities: CapabilitiesRegistry::new(),
            tools,
        }
    }

    /// Server exposing `fetch_claim_health_record` over `service`
    pub fn for_claims(service: ClaimsService) -> Self {
        let mut tools = ToolsRegistry::new();
        tools.register(Box::new(FetchClaimHealthRecordTool::new(service)));
        Self::new(tools)
    }

    /// Handle one raw JSON-RPC message.
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_message(&self, message: &str) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(message) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparseable MCP message");
                return Some(Self::parse_error(e));
            }
        };

        // Echo the id when there is one, even if the rest of the request is unusable
        let id = value.get("id").cloned();
        let request: McpRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Malformed MCP request");
                return Some(McpResponse::failure(
                    id,
                    McpProtocolError {
                        code: error_codes::INVALID_REQUEST,
                        message: format!("Invalid Request: {}", e),
                        data: None,
                    },
                ));
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "Ignoring MCP notification");
            return None;
        }

        Some(self.handle_request(request).await)
    }

    /// Response for input that is not JSON at all
    pub fn parse_error(detail: impl std::fmt::Display) -> McpResponse {
        McpResponse::failure(
            None,
            McpProtocolError {
                code: error_codes::PARSE_ERROR,
                message: format!("Parse error: {}", detail),
                data: None,
            },
        )
    }

    /// Handle an MCP request, turning failures into JSON-RPC errors
    pub async fn handle_request(&self, request: McpRequest) -> McpResponse {
        debug!(method = %request.method, "Handling MCP request");

        let id = request.id.clone();
        match self.dispatch(request).await {
            Ok(result) => McpResponse::success(id, result),
            Err(error) => {
                debug!(code = error.code(), error = %error, "MCP request failed");
                McpResponse::failure(id, error.to_protocol_error())
            }
        }
    }

    async fn dispatch(&self, request: McpRequest) -> McpResult<Value> {
        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(),
            methods::LIST_CAPABILITIES => serde_json::to_value(self.capabilities.list())?,
            methods::LIST_TOOLS => json!({ "tools": self.tools.list() }),
            methods::CALL_TOOL => {
                let tool_input: ToolInput = serde_json::from_value(request.params)
                    .map_err(|e| McpError::InvalidParams(e.to_string()))?;
                serde_json::to_value(self.tools.execute(tool_input).await?)?
            }
            _ => {
                return Err(McpError::MethodNotFound(request.method));
            }
        };

        Ok(result)
    }

    fn handle_initialize(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        })
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::for_claims(ClaimsService::default())
    }
}
