//! `check_inventory`: stock lookup via BAPI_MATERIAL_GET_ALL.

use std::sync::Arc;

use async_trait::async_trait;
use sapsim_connector::{MockConnector, RfcFunction};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_args, render, to_params};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

pub struct CheckInventoryTool {
    connector: Arc<MockConnector>,
}

impl CheckInventoryTool {
    pub fn new(connector: Arc<MockConnector>) -> Self {
        Self { connector }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CheckInventoryArgs {
    material_number: String,
    plant: String,
}

#[async_trait]
impl Tool for CheckInventoryTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "check_inventory".to_string(),
            description: "Check inventory stock for a material at a specific plant.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "material_number": {
                        "type": "string",
                        "description": "Material SKU (e.g., M-100)"
                    },
                    "plant": {
                        "type": "string",
                        "description": "Plant code (e.g., 1000)"
                    }
                },
                "required": ["material_number", "plant"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: CheckInventoryArgs = parse_args(input)?;
        let reply = self
            .connector
            .invoke_function(RfcFunction::MaterialGetAll, &to_params(&args)?)
            .await?;
        render(&reply)
    }
}
