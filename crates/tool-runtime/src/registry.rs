use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};
use crate::tools::{
    AccountBalanceTool, CheckInventoryTool, CreateSalesOrderTool, CustomerDocumentTool,
    PurchaseOrdersTool, SalesOrdersTool,
};
use sapsim_connector::MockConnector;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::Instrument;

/// Manages available tools, their schemas, and lookup.
/// Thread-safe via Arc wrapping of individual tools; listed in name order.
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
        }
    }

    /// Registry holding the six SAP tools, all sharing one connector.
    pub fn with_sap_tools(connector: Arc<MockConnector>) -> Self {
        let tools: Vec<Arc<dyn Tool>> = vec![
            Arc::new(SalesOrdersTool::new(connector.clone())),
            Arc::new(CreateSalesOrderTool::new(connector.clone())),
            Arc::new(PurchaseOrdersTool::new(connector.clone())),
            Arc::new(CheckInventoryTool::new(connector.clone())),
            Arc::new(AccountBalanceTool::new(connector)),
            Arc::new(CustomerDocumentTool),
        ];
        let tools = tools
            .into_iter()
            .map(|tool| (tool.definition().name, tool))
            .collect();
        Self { tools }
    }

    /// Register a tool. Returns error if name already registered.
    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), RegistryError> {
        let def = tool.definition();
        if self.tools.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        self.tools.insert(def.name, Arc::new(tool));
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all registered tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Run a tool by name inside a span carrying the tool name and request id.
    pub async fn execute(
        &self,
        name: &str,
        input: Value,
        context: &ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let span = tracing::info_span!("tool", tool = %name, request_id = %context.request_id);
        async move {
            tracing::debug!(input = %input, "executing tool");
            let mut result = tool.execute(input, context).await.inspect_err(|e| {
                tracing::warn!(error = %e, "tool failed");
            })?;
            result.tool_call_id = context.request_id.clone();
            Ok(result)
        }
        .instrument(span)
        .await
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Tool with name '{0}' is already registered")]
    DuplicateName(String),
}
