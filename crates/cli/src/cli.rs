use clap::{Parser, Subcommand};

/// Mock SAP backend exposed as MCP tools.
///
/// Serves sales, purchasing, inventory, accounting and document tools
/// backed by fixed demo data. Nothing connects to a real SAP system.
#[derive(Parser, Debug)]
#[command(name = "sapsim", version, about = "Mock SAP tools served over MCP")]
pub struct CliArgs {
    /// Config profile; keys are read as {PROFILE}_{KEY} before {KEY}
    #[arg(long, env = "SAPSIM_PROFILE")]
    pub profile: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "SAPSIM_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the tools over MCP on stdin/stdout (default)
    Serve,
    /// Print the tool definitions as JSON
    Tools,
    /// Run one tool and print its output
    Call {
        /// Tool name, e.g. check_inventory
        tool: String,
        /// Tool arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Run the canned smoke-test calls
    Demo,
}
