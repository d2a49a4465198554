//! The SAP tools exposed to MCP clients.
//!
//! Each tool deserializes its arguments into a typed struct, forwards them to
//! the [`MockConnector`](sapsim_connector::MockConnector) (or, for documents,
//! the local extractor) and renders the reply as indented JSON text.

pub mod account_balance;
pub mod create_sales_order;
pub mod customer_document;
pub mod inventory;
pub mod purchase_orders;
pub mod sales_orders;

pub use account_balance::AccountBalanceTool;
pub use create_sales_order::CreateSalesOrderTool;
pub use customer_document::CustomerDocumentTool;
pub use inventory::CheckInventoryTool;
pub use purchase_orders::PurchaseOrdersTool;
pub use sales_orders::SalesOrdersTool;

use sapsim_core::Params;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::tool::{ToolError, ToolResult};

/// Deserialize tool arguments, reporting shape problems as invalid input.
pub(crate) fn parse_args<T: DeserializeOwned>(input: Value) -> Result<T, ToolError> {
    serde_json::from_value(input).map_err(|e| ToolError::InvalidInput(e.to_string()))
}

/// Turn typed arguments into the parameter map the connector expects.
/// Absent optionals stay in the map as `null`.
pub(crate) fn to_params<T: Serialize>(args: &T) -> Result<Params, ToolError> {
    match serde_json::to_value(args) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ToolError::ExecutionFailed(format!(
            "arguments serialized to {other}, expected an object"
        ))),
        Err(e) => Err(ToolError::ExecutionFailed(format!("JSON serialization failed: {e}"))),
    }
}

/// Render a reply as 2-space indented JSON. Non-ASCII text is kept as is.
pub(crate) fn render<T: Serialize>(reply: &T) -> Result<ToolResult, ToolError> {
    let content = serde_json::to_string_pretty(reply)
        .map_err(|e| ToolError::ExecutionFailed(format!("JSON serialization failed: {e}")))?;
    Ok(ToolResult::text(content))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use sapsim_connector::MockConnector;
    use sapsim_core::{ConnectorConfig, LatencyConfig};
    use serde_json::Value;

    use crate::tool::ToolContext;

    pub fn instant_connector() -> Arc<MockConnector> {
        Arc::new(MockConnector::new(ConnectorConfig::default(), LatencyConfig::NONE))
    }

    pub fn ctx() -> ToolContext {
        ToolContext::new("test")
    }

    pub fn parse(content: &str) -> Value {
        serde_json::from_str(content).unwrap()
    }
}
