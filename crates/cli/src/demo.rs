//! Smoke run of the most common tools, printed the way an operator would
//! check a fresh install.

use anyhow::{Context, Result};
use serde_json::{json, Value};

use sapsim_tool_runtime::{ToolContext, ToolRegistry};

/// Calls made by `sapsim demo`, in order.
pub fn calls() -> Vec<(&'static str, Value)> {
    vec![
        (
            "get_sales_orders",
            json!({"customer_number": "C1001", "date_from": "20240101", "date_to": "20240131"}),
        ),
        (
            "create_sales_order",
            json!({"customer_id": "C1001", "material_number": "M-100", "quantity": 10, "price": 99.9}),
        ),
        (
            "check_inventory",
            json!({"material_number": "M-100", "plant": "1000"}),
        ),
    ]
}

pub async fn run(registry: &ToolRegistry) -> Result<()> {
    for (i, (tool, input)) in calls().into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Testing {tool}...");
        let result = registry
            .execute(tool, input, &ToolContext::new(format!("demo-{}", i + 1)))
            .await
            .with_context(|| format!("demo call to {tool} failed"))?;
        println!("{}", result.content);
    }
    Ok(())
}
