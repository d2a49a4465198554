//! `create_sales_order`: books a sales order via BAPI_SALESORDER_CREATEFROMDAT2.

use std::sync::Arc;

use async_trait::async_trait;
use sapsim_connector::{MockConnector, RfcFunction};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_args, render, to_params};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

pub struct CreateSalesOrderTool {
    connector: Arc<MockConnector>,
}

impl CreateSalesOrderTool {
    pub fn new(connector: Arc<MockConnector>) -> Self {
        Self { connector }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CreateSalesOrderArgs {
    customer_id: String,
    material_number: String,
    quantity: i64,
    price: f64,
}

#[async_trait]
impl Tool for CreateSalesOrderTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "create_sales_order".to_string(),
            description: "Create a new sales order.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "Customer ID"
                    },
                    "material_number": {
                        "type": "string",
                        "description": "Material SKU"
                    },
                    "quantity": {
                        "type": "integer",
                        "description": "Order quantity"
                    },
                    "price": {
                        "type": "number",
                        "description": "Unit price"
                    }
                },
                "required": ["customer_id", "material_number", "quantity", "price"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: CreateSalesOrderArgs = parse_args(input)?;
        let reply = self
            .connector
            .invoke_function(RfcFunction::CreateSalesOrderFromData2, &to_params(&args)?)
            .await?;
        render(&reply)
    }
}
