//! MCP Tools implementation
use crate::error::{McpError, McpResult};
use crate::protocol::{Tool, ToolInput, ToolResult};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Trait for MCP tool implementations
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Get tool name
    fn name(&self) -> &str;

    /// Get tool description
    fn description(&self) -> &str;

    /// Get input schema (JSON Schema)
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool
    async fn execute(&self, input: ToolInput) -> McpResult<ToolResult>;
}

/// Registry of available tools
#[derive(Default)]
pub struct ToolsRegistry {
    tools: BTreeMap<String, Box<dyn McpTool>>,
}

impl ToolsRegistry {
    /// Create an empty tools registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tool, replacing any tool of the same name
    pub fn register(&mut self, tool: Box<dyn McpTool>) {
        tracing::debug!(tool = tool.name(), "Registering MCP tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// List all available tools, ordered by name
    pub fn list(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|t| Tool {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.input_schema(),
            })
            .collect()
    }

    /// Execute a tool by name
    pub async fn execute(&self, input: ToolInput) -> McpResult<ToolResult> {
        match self.tools.get(&input.name) {
            Some(tool) => tool.execute(input).await,
            None => Err(McpError::Tool(format!("Tool '{}' not found", input.name))),
        }
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
