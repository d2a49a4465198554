//! `get_purchase_orders`: purchase orders of a vendor from the MM module.

use std::sync::Arc;

use async_trait::async_trait;
use sapsim_connector::{MockConnector, SapModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_args, render, to_params};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

pub struct PurchaseOrdersTool {
    connector: Arc<MockConnector>,
}

impl PurchaseOrdersTool {
    pub fn new(connector: Arc<MockConnector>) -> Self {
        Self { connector }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PurchaseOrdersArgs {
    vendor_number: String,
    /// Passed through; the demo dataset is not filtered by it.
    #[serde(default)]
    status: Option<String>,
}

#[async_trait]
impl Tool for PurchaseOrdersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_purchase_orders".to_string(),
            description: "Get purchase orders for a vendor.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "vendor_number": {
                        "type": "string",
                        "description": "The SAP vendor number (e.g., V-001)"
                    },
                    "status": {
                        "type": "string",
                        "description": "Purchase order status"
                    }
                },
                "required": ["vendor_number"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: PurchaseOrdersArgs = parse_args(input)?;
        let reply = self
            .connector
            .fetch_module(SapModule::MaterialsManagement, &to_params(&args)?)
            .await;
        render(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx, instant_connector, parse};

    #[tokio::test]
    async fn test_lists_vendor_orders() {
        let tool = PurchaseOrdersTool::new(instant_connector());
        let result = tool
            .execute(serde_json::json!({"vendor_number": "V-100", "status": "Open"}), &ctx())
            .await
            .unwrap();

        let parsed = parse(&result.content);
        assert_eq!(parsed["vendor"], "V-100");
        assert_eq!(parsed["orders"][0]["po_id"], "PO-88001");
        assert_eq!(parsed["orders"][0]["amount"], 3000);
        assert_eq!(parsed["orders"][1]["status"], "Approved");
    }

    #[tokio::test]
    async fn test_repeated_calls_are_byte_identical() {
        let tool = PurchaseOrdersTool::new(instant_connector());
        let input = serde_json::json!({"vendor_number": "V-001"});
        let first = tool.execute(input.clone(), &ctx()).await.unwrap();
        let second = tool.execute(input, &ctx()).await.unwrap();
        assert_eq!(first.content, second.content);
    }
}
