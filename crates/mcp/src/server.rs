//! MCP server implementation.
//!
//! Wraps a `ToolRegistry` and exposes its tools over the MCP protocol.
//! `tools/call` requests run as independent tasks so a slow call never holds
//! up the ones behind it; every other method is answered inline.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use sapsim_tool_runtime::{ToolContext, ToolError, ToolRegistry};

use crate::error::McpError;
use crate::transport::McpTransport;
use crate::types::*;

/// MCP server that bridges a `ToolRegistry` to MCP clients.
pub struct McpServer {
    registry: Arc<ToolRegistry>,
    server_name: String,
    server_version: String,
    initialized: bool,
    /// Tool calls still running, keyed by request id.
    in_flight: HashMap<RpcId, AbortHandle>,
}

impl McpServer {
    /// Create a new MCP server wrapping the given tool registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            server_name: "SAP Agent AI Demo".to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            initialized: false,
            in_flight: HashMap::new(),
        }
    }

    /// Set the server name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.server_name = name.into();
        self
    }

    /// Whether a client has completed `initialize`.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the server loop, reading from and writing to the transport.
    ///
    /// Processes JSON-RPC messages until the transport is closed, then waits
    /// for tool calls still in flight and sends their responses.
    pub async fn run<T: McpTransport>(&mut self, transport: &mut T) -> Result<(), McpError> {
        tracing::info!(server = %self.server_name, "MCP server starting");
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        loop {
            tokio::select! {
                line = transport.receive() => {
                    let Some(line) = line? else {
                        tracing::info!("Transport closed, shutting down");
                        break;
                    };
                    tracing::debug!(message = %line, "Received message");
                    if let Some(response) = self.handle_message(&line, &done_tx).await {
                        Self::send(transport, &response).await?;
                    }
                }
                Some(response) = done_rx.recv() => {
                    self.deliver(transport, response).await?;
                }
            }
        }

        if !self.in_flight.is_empty() {
            tracing::info!(pending = self.in_flight.len(), "Waiting for in-flight tool calls");
        }
        // Each task holds a sender; the channel closes once every task has
        // finished, panicked or been aborted.
        drop(done_tx);
        while !self.in_flight.is_empty() {
            match done_rx.recv().await {
                Some(response) => self.deliver(transport, response).await?,
                None => break,
            }
        }
        if !self.in_flight.is_empty() {
            tracing::warn!(lost = self.in_flight.len(), "Tool calls ended without a response");
            self.in_flight.clear();
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request and produce a response.
    ///
    /// Tool calls are awaited in place here; `run` spawns them instead.
    pub async fn handle_request(&mut self, request: &JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id, &request.params),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_list_tools(id),
            "tools/call" => call_tool(&self.registry, id, request.params.clone()).await,
            method => {
                tracing::warn!(method = %method, "Unknown method");
                McpError::MethodNotFound(method.to_string()).into_response(id)
            }
        }
    }

    /// Parse one line and dispatch it. Returns the response to write now, if any.
    async fn handle_message(
        &mut self,
        line: &str,
        done_tx: &mpsc::UnboundedSender<JsonRpcResponse>,
    ) -> Option<JsonRpcResponse> {
        // Distinguish requests (have "id") from notifications (no "id")
        // by parsing as generic Value first.
        let raw: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse JSON");
                return Some(McpError::JsonParse(e).into_response(RpcId::Number(0)));
            }
        };

        if raw.get("id").is_none() {
            match serde_json::from_value::<JsonRpcNotification>(raw) {
                Ok(notif) => self.handle_notification(&notif),
                Err(e) => tracing::warn!(error = %e, "Malformed notification, ignoring"),
            }
            return None;
        }

        let request: JsonRpcRequest = match serde_json::from_value(raw) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse JSON-RPC request");
                return Some(McpError::InvalidRequest(e.to_string()).into_response(RpcId::Number(0)));
            }
        };

        if request.method != "tools/call" {
            return Some(self.handle_request(&request).await);
        }

        let id = request.id.clone();
        if self.in_flight.contains_key(&id) {
            tracing::warn!(id = %id, "Duplicate id for in-flight request");
            let err = McpError::InvalidRequest(format!("request id {id} is already in flight"));
            return Some(err.into_response(id));
        }

        let registry = self.registry.clone();
        let done_tx = done_tx.clone();
        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            let response = call_tool(&registry, task_id, request.params).await;
            // The receiver only goes away when the server loop has exited.
            let _ = done_tx.send(response);
        });
        self.in_flight.insert(id, handle.abort_handle());
        None
    }

    /// Send a finished call's response unless the call was cancelled meanwhile.
    async fn deliver<T: McpTransport>(
        &mut self,
        transport: &mut T,
        response: JsonRpcResponse,
    ) -> Result<(), McpError> {
        if self.in_flight.remove(&response.id).is_none() {
            tracing::debug!(id = %response.id, "Dropping response of cancelled request");
            return Ok(());
        }
        Self::send(transport, &response).await
    }

    async fn send<T: McpTransport>(transport: &mut T, response: &JsonRpcResponse) -> Result<(), McpError> {
        let json = serde_json::to_string(response)?;
        tracing::debug!(response = %json, "Sending response");
        transport.send(&json).await
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        match notif.method.as_str() {
            "notifications/initialized" => {
                tracing::info!("Client confirmed initialization");
            }
            "notifications/cancelled" => {
                let params = notif
                    .params
                    .clone()
                    .and_then(|p| serde_json::from_value::<CancelledParams>(p).ok());
                let Some(params) = params else {
                    tracing::warn!("Cancellation without a valid requestId, ignoring");
                    return;
                };
                match self.in_flight.remove(&params.request_id) {
                    Some(handle) => {
                        handle.abort();
                        tracing::info!(
                            id = %params.request_id,
                            reason = params.reason.as_deref().unwrap_or("none"),
                            "Cancelled tool call"
                        );
                    }
                    None => {
                        tracing::debug!(id = %params.request_id, "Cancellation for unknown or finished request");
                    }
                }
            }
            method => {
                tracing::debug!(method = %method, "Unknown notification, ignoring");
            }
        }
    }

    fn handle_initialize(&mut self, id: RpcId, params: &Option<Value>) -> JsonRpcResponse {
        match params
            .clone()
            .map(serde_json::from_value::<InitializeParams>)
        {
            Some(Ok(p)) => tracing::info!(
                client = %p.client_info.name,
                protocol = %p.protocol_version,
                "Handling initialize"
            ),
            _ => tracing::info!("Handling initialize (no client info)"),
        }
        self.initialized = true;

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: false }),
            },
            server_info: Implementation {
                name: self.server_name.clone(),
                version: Some(self.server_version.clone()),
            },
        };
        to_response(id, result)
    }

    fn handle_list_tools(&self, id: RpcId) -> JsonRpcResponse {
        tracing::debug!("Handling tools/list");

        let tools: Vec<ToolInfo> = self.registry.list().into_iter().map(ToolInfo::from).collect();
        to_response(id, ListToolsResult { tools })
    }
}

/// Execute a `tools/call`. Tool failures become `isError` results; only
/// malformed params and unknown tools are JSON-RPC errors.
async fn call_tool(registry: &ToolRegistry, id: RpcId, params: Option<Value>) -> JsonRpcResponse {
    let Some(params) = params else {
        return McpError::InvalidParams("missing params".to_string()).into_response(id);
    };

    let call_params: CallToolParams = match serde_json::from_value(params) {
        Ok(p) => p,
        Err(e) => return McpError::InvalidParams(e.to_string()).into_response(id),
    };

    tracing::debug!(tool = %call_params.name, id = %id, "Handling tools/call");

    let ctx = ToolContext::new(id.to_string());
    let result = match registry.execute(&call_params.name, call_params.arguments, &ctx).await {
        Ok(tool_result) => CallToolResult::text(tool_result.content, tool_result.is_error),
        Err(ToolError::UnknownTool(name)) => return McpError::ToolNotFound(name).into_response(id),
        Err(e) => CallToolResult::text(e.to_string(), true),
    };

    to_response(id, result)
}

fn to_response<R: serde::Serialize>(id: RpcId, result: R) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(val) => JsonRpcResponse::success(id, val),
        Err(e) => McpError::JsonParse(e).into_response(id),
    }
}
