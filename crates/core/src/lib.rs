pub mod config;
pub mod model;

pub use config::{Config, ConnectorConfig, LatencyConfig, ServerConfig};
pub use model::*;
