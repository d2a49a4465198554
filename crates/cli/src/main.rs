mod cli;
mod demo;

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use sapsim_connector::MockConnector;
use sapsim_core::config::{load_dotenv, Config};
use sapsim_mcp::{McpServer, StdioTransport};
use sapsim_tool_runtime::{ToolContext, ToolRegistry};

use crate::cli::{CliArgs, Command};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    let args = CliArgs::parse();

    // stdout carries the MCP stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::for_profile(args.profile.as_deref().unwrap_or_default());
    config.log_summary();

    let connector = Arc::new(MockConnector::new(config.connector.clone(), config.latency));
    let registry = Arc::new(ToolRegistry::with_sap_tools(connector));

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(registry, &config).await,
        Command::Tools => {
            let defs = registry.list();
            println!("{}", serde_json::to_string_pretty(&defs)?);
            Ok(())
        }
        Command::Call { tool, args } => call(&registry, &tool, &args).await,
        Command::Demo => demo::run(&registry).await,
    }
}

async fn serve(registry: Arc<ToolRegistry>, config: &Config) -> Result<()> {
    let mut server = McpServer::new(registry).with_name(config.server.name.clone());
    let mut transport = StdioTransport::new();

    tokio::select! {
        result = server.run(&mut transport) => result.context("MCP server failed")?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, shutting down"),
    }
    Ok(())
}

async fn call(registry: &ToolRegistry, tool: &str, raw_args: &str) -> Result<()> {
    let input: serde_json::Value = serde_json::from_str(raw_args)
        .with_context(|| format!("--args is not valid JSON: {raw_args}"))?;
    if !input.is_object() {
        bail!("--args must be a JSON object");
    }

    let result = registry
        .execute(tool, input, &ToolContext::new("cli"))
        .await
        .with_context(|| format!("tool '{tool}' failed"))?;
    println!("{}", result.content);
    Ok(())
}
