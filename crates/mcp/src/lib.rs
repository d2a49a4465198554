//! MCP (Model Context Protocol) server for the SAP demo tools.
//!
//! Implements the server side of MCP over JSON-RPC 2.0 so that LLM hosts
//! can list and call the tools in a `ToolRegistry`.
//!
//! # Architecture
//!
//! - **types**: JSON-RPC 2.0 and MCP-specific protocol types
//! - **transport**: Pluggable transport layer (stdio, channels)
//! - **server**: MCP server wrapping a `ToolRegistry`
//! - **error**: Unified error types
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use sapsim_mcp::server::McpServer;
//! use sapsim_mcp::transport::StdioTransport;
//! use sapsim_tool_runtime::ToolRegistry;
//!
//! # async fn example() {
//! let registry = ToolRegistry::new();
//! let mut server = McpServer::new(Arc::new(registry));
//! let mut transport = StdioTransport::new();
//! server.run(&mut transport).await.unwrap();
//! # }
//! ```

pub mod types;
pub mod transport;
pub mod server;
pub mod error;

pub use types::*;
pub use transport::{McpTransport, StdioTransport, ChannelTransport};
pub use server::McpServer;
pub use error::McpError;
