//! `get_sales_orders`: sales orders of a customer from the SD module.

use std::sync::Arc;

use async_trait::async_trait;
use sapsim_connector::{MockConnector, SapModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{parse_args, render, to_params};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

/// List sales orders for a customer, optionally within a date range.
pub struct SalesOrdersTool {
    connector: Arc<MockConnector>,
}

impl SalesOrdersTool {
    pub fn new(connector: Arc<MockConnector>) -> Self {
        Self { connector }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SalesOrdersArgs {
    customer_number: String,
    #[serde(default)]
    date_from: Option<String>,
    #[serde(default)]
    date_to: Option<String>,
}

#[async_trait]
impl Tool for SalesOrdersTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_sales_orders".to_string(),
            description: "Get sales orders list for a customer.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "customer_number": {
                        "type": "string",
                        "description": "The SAP customer number (e.g., C1001)"
                    },
                    "date_from": {
                        "type": "string",
                        "description": "Start date (YYYYMMDD)"
                    },
                    "date_to": {
                        "type": "string",
                        "description": "End date (YYYYMMDD)"
                    }
                },
                "required": ["customer_number"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: SalesOrdersArgs = parse_args(input)?;

        debug!(customer = %args.customer_number, "fetching sales orders");
        let reply = self
            .connector
            .fetch_module(SapModule::SalesAndDistribution, &to_params(&args)?)
            .await;
        render(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx, instant_connector, parse};

    #[tokio::test]
    async fn test_returns_two_orders_for_customer() {
        let tool = SalesOrdersTool::new(instant_connector());
        let result = tool
            .execute(
                serde_json::json!({
                    "customer_number": "C1001",
                    "date_from": "20240101",
                    "date_to": "20240131"
                }),
                &ctx(),
            )
            .await
            .unwrap();

        let parsed = parse(&result.content);
        assert_eq!(parsed["count"], 2);
        let orders = parsed["orders"].as_array().unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o["customer"] == "C1001"));
        assert_eq!(orders[0]["order_id"], "SO-2024001");
        assert_eq!(orders[1]["total_value"], 12000.5);
    }

    #[tokio::test]
    async fn test_dates_are_optional() {
        let tool = SalesOrdersTool::new(instant_connector());
        let result = tool
            .execute(serde_json::json!({"customer_number": "C2002"}), &ctx())
            .await
            .unwrap();
        assert_eq!(parse(&result.content)["orders"][1]["customer"], "C2002");
    }

    #[tokio::test]
    async fn test_missing_customer_is_invalid() {
        let tool = SalesOrdersTool::new(instant_connector());
        let err = tool.execute(serde_json::json!({}), &ctx()).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_free_form_dates_pass_through() {
        let tool = SalesOrdersTool::new(instant_connector());
        for (from, to) in [("2024/01/01", "2024/01/31"), ("20240301", "20240101"), ("Q1", "Q2")] {
            let result = tool
                .execute(
                    serde_json::json!({
                        "customer_number": "C1001",
                        "date_from": from,
                        "date_to": to
                    }),
                    &ctx(),
                )
                .await
                .unwrap();
            assert!(!result.is_error, "{from}..{to}");
            assert_eq!(parse(&result.content)["count"], 2, "{from}..{to}");
        }
    }
}
