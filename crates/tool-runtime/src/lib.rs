pub mod tool;
pub mod tools;
pub mod registry;

pub use tool::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};
pub use registry::{RegistryError, ToolRegistry};
pub use tools::{
    AccountBalanceTool, CheckInventoryTool, CreateSalesOrderTool, CustomerDocumentTool,
    PurchaseOrdersTool, SalesOrdersTool,
};
