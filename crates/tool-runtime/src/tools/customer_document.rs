//! `process_customer_document`: simulated document intelligence.
//!
//! Runs locally; never touches the connector and never waits.

use async_trait::async_trait;
use sapsim_connector::document;
use serde::Deserialize;
use serde_json::Value;

use super::{parse_args, render};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

pub struct CustomerDocumentTool;

#[derive(Debug, Deserialize)]
struct CustomerDocumentArgs {
    document_type: String,
    document_content: String,
    customer_id: String,
}

#[async_trait]
impl Tool for CustomerDocumentTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "process_customer_document".to_string(),
            description:
                "Simulate processing a document (OCR/Intelligence) and converting to SAP data."
                    .to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "document_type": {
                        "type": "string",
                        "description": "Kind of document (e.g., invoice, order)"
                    },
                    "document_content": {
                        "type": "string",
                        "description": "Raw document text"
                    },
                    "customer_id": {
                        "type": "string",
                        "description": "Customer ID the document belongs to"
                    }
                },
                "required": ["document_type", "document_content", "customer_id"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: CustomerDocumentArgs = parse_args(input)?;
        let extraction =
            document::extract(&args.document_type, &args.document_content, &args.customer_id);
        render(&extraction)
    }
}
