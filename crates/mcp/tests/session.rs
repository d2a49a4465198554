//! End-to-end MCP sessions over an in-memory transport, with the connector's
//! real latencies on a paused tokio clock.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{json, Value};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use sapsim_connector::MockConnector;
use sapsim_core::{ConnectorConfig, LatencyConfig};
use sapsim_mcp::{
    CallToolResult, ChannelTransport, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, McpError, McpServer, McpTransport, RpcId, ToolContent, PROTOCOL_VERSION,
};
use sapsim_tool_runtime::ToolRegistry;

fn start_server() -> (ChannelTransport, JoinHandle<Result<(), McpError>>) {
    let connector = Arc::new(MockConnector::new(ConnectorConfig::default(), LatencyConfig::default()));
    let mut server = McpServer::new(Arc::new(ToolRegistry::with_sap_tools(connector)));
    let (client, mut server_side) = ChannelTransport::pair();
    let handle = tokio::spawn(async move { server.run(&mut server_side).await });
    (client, handle)
}

async fn send_request(client: &mut ChannelTransport, id: i64, method: &str, params: Option<Value>) {
    let req = JsonRpcRequest::new(RpcId::Number(id), method, params);
    client.send(&serde_json::to_string(&req).unwrap()).await.unwrap();
}

async fn send_call(client: &mut ChannelTransport, id: i64, tool: &str, arguments: Value) {
    send_request(client, id, "tools/call", Some(json!({"name": tool, "arguments": arguments}))).await;
}

async fn next_response(client: &mut ChannelTransport) -> JsonRpcResponse {
    let line = client.receive().await.unwrap().unwrap();
    serde_json::from_str(&line).unwrap()
}

fn tool_text(resp: &JsonRpcResponse) -> Value {
    let result: CallToolResult = serde_json::from_value(resp.result.clone().unwrap()).unwrap();
    assert!(!result.is_error, "unexpected tool error: {:?}", result.content);
    match &result.content[0] {
        ToolContent::Text { text } => serde_json::from_str(text).unwrap(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_handshake_and_tool_listing() {
    let (mut client, server) = start_server();

    send_request(
        &mut client,
        1,
        "initialize",
        Some(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {},
            "clientInfo": {"name": "session-test"}
        })),
    )
    .await;
    let init = next_response(&mut client).await;
    assert_eq!(init.id, RpcId::Number(1));
    assert_eq!(init.result.unwrap()["serverInfo"]["name"], "SAP Agent AI Demo");

    let initialized = JsonRpcNotification::new("notifications/initialized", None);
    client.send(&serde_json::to_string(&initialized).unwrap()).await.unwrap();

    send_request(&mut client, 2, "tools/list", None).await;
    let list: ListToolsResult =
        serde_json::from_value(next_response(&mut client).await.result.unwrap()).unwrap();
    assert_eq!(list.tools.len(), 6);
    for tool in &list.tools {
        assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
    }

    drop(client);
    server.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_smoke_calls() {
    let (mut client, server) = start_server();

    send_call(
        &mut client,
        1,
        "get_sales_orders",
        json!({"customer_number": "C1001", "date_from": "20240101", "date_to": "20240131"}),
    )
    .await;
    let orders = tool_text(&next_response(&mut client).await);
    assert_eq!(orders["count"], 2);
    assert_eq!(orders["orders"][0]["customer"], "C1001");
    assert_eq!(orders["orders"][1]["customer"], "C1001");

    send_call(
        &mut client,
        2,
        "create_sales_order",
        json!({"customer_id": "C1001", "material_number": "M-100", "quantity": 10, "price": 99.9}),
    )
    .await;
    let created = tool_text(&next_response(&mut client).await);
    assert_eq!(created["sales_order_id"], "SO-91001");

    send_call(&mut client, 3, "check_inventory", json!({"material_number": "M-100", "plant": "1000"})).await;
    let stock = tool_text(&next_response(&mut client).await);
    assert_eq!(stock["unrestricted_stock"], 150);

    drop(client);
    server.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_calls_overlap() {
    let (mut client, server) = start_server();
    let start = Instant::now();

    // 500 ms RFC followed by a 300 ms fetch
    send_call(&mut client, 1, "check_inventory", json!({"material_number": "M-999", "plant": "1000"})).await;
    send_call(&mut client, 2, "get_account_balance", json!({"company_code": "1000", "fiscal_year": "2024"})).await;

    let first = next_response(&mut client).await;
    let second = next_response(&mut client).await;
    let elapsed = start.elapsed();

    assert_eq!(first.id, RpcId::Number(2), "shorter call answers first");
    assert_eq!(second.id, RpcId::Number(1));
    assert_eq!(tool_text(&second)["unrestricted_stock"], 0);
    assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(800), "{elapsed:?}");

    drop(client);
    server.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_call_gets_no_response() {
    let (mut client, server) = start_server();

    send_call(&mut client, 5, "check_inventory", json!({"material_number": "M-100", "plant": "1000"})).await;
    let cancel = JsonRpcNotification::new(
        "notifications/cancelled",
        Some(json!({"requestId": 5, "reason": "user aborted"})),
    );
    client.send(&serde_json::to_string(&cancel).unwrap()).await.unwrap();

    tokio::time::sleep(Duration::from_secs(2)).await;
    send_request(&mut client, 6, "ping", None).await;

    let resp = next_response(&mut client).await;
    assert_eq!(resp.id, RpcId::Number(6), "no response for the cancelled call");

    drop(client);
    server.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_malformed_lines() {
    let (mut client, server) = start_server();

    client.send("{not json").await.unwrap();
    let resp = next_response(&mut client).await;
    assert_eq!(resp.error.unwrap().code, sapsim_mcp::error_codes::PARSE_ERROR);

    client.send(r#"{"jsonrpc":"2.0","id":3}"#).await.unwrap();
    let resp = next_response(&mut client).await;
    assert_eq!(resp.error.unwrap().code, sapsim_mcp::error_codes::INVALID_REQUEST);

    drop(client);
    server.await.unwrap().unwrap();
}
