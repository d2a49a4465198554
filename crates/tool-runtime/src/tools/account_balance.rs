//! `get_account_balance`: G/L balance from the FI module.

use std::sync::Arc;

use async_trait::async_trait;
use sapsim_connector::{MockConnector, SapModule};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{parse_args, render, to_params};
use crate::tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

pub struct AccountBalanceTool {
    connector: Arc<MockConnector>,
}

impl AccountBalanceTool {
    pub fn new(connector: Arc<MockConnector>) -> Self {
        Self { connector }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AccountBalanceArgs {
    company_code: String,
    fiscal_year: String,
}

#[async_trait]
impl Tool for AccountBalanceTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: "get_account_balance".to_string(),
            description: "Get G/L account balance for a company.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "company_code": {
                        "type": "string",
                        "description": "Company code (e.g., 1000)"
                    },
                    "fiscal_year": {
                        "type": "string",
                        "description": "Fiscal year (e.g., 2024)"
                    }
                },
                "required": ["company_code", "fiscal_year"]
            }),
        }
    }

    async fn execute(&self, input: Value, _context: &ToolContext) -> Result<ToolResult, ToolError> {
        let args: AccountBalanceArgs = parse_args(input)?;
        let reply = self
            .connector
            .fetch_module(SapModule::FinancialAccounting, &to_params(&args)?)
            .await;
        render(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx, instant_connector};

    #[tokio::test]
    async fn test_balance_text() {
        let tool = AccountBalanceTool::new(instant_connector());
        let result = tool
            .execute(serde_json::json!({"company_code": "1000", "fiscal_year": "2024"}), &ctx())
            .await
            .unwrap();

        let expected = r#"{
  "company_code": "1000",
  "fiscal_year": "2024",
  "balance": 1500000.0,
  "currency": "CNY",
  "as_of_date": "2024-02-06"
}"#;
        assert_eq!(result.content, expected);
    }

    #[tokio::test]
    async fn test_repeated_calls_are_byte_identical() {
        let tool = AccountBalanceTool::new(instant_connector());
        let input = serde_json::json!({"company_code": "2000", "fiscal_year": "2023"});
        let first = tool.execute(input.clone(), &ctx()).await.unwrap();
        let second = tool.execute(input, &ctx()).await.unwrap();
        assert_eq!(first.content, second.content);
    }
}
