use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u64(profile: &str, key: &str, default: u64) -> u64 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub connector: ConnectorConfig,
    pub latency: LatencyConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SAPSIM_PROFILE`. When set (e.g. `QA`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SAPSIM_PROFILE", "");
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            connector: ConnectorConfig::from_env_profiled(p),
            latency: LatencyConfig::from_env_profiled(p),
            server: ServerConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  connector:   ashost={}, sysnr={}, client={}, user={}, lang={}",
            self.connector.ashost,
            self.connector.sysnr,
            self.connector.client,
            self.connector.user,
            self.connector.lang
        );
        tracing::info!(
            "  latency:     rfc={}ms, fetch={}ms",
            self.latency.rfc_ms,
            self.latency.fetch_ms
        );
        tracing::info!("  server:      name={}", self.server.name);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: String::new(),
            connector: ConnectorConfig::default(),
            latency: LatencyConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

// ── Connector ─────────────────────────────────────────────────

/// Logon parameters for the backend connection.
///
/// The mock connector never opens a connection; these are descriptive only.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectorConfig {
    pub ashost: String,
    pub sysnr: String,
    pub client: String,
    pub user: String,
    pub passwd: String,
    pub lang: String,
}

impl ConnectorConfig {
    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            ashost: profiled_env_or(p, "SAP_ASHOST", &d.ashost),
            sysnr: profiled_env_or(p, "SAP_SYSNR", &d.sysnr),
            client: profiled_env_or(p, "SAP_CLIENT", &d.client),
            user: profiled_env_or(p, "SAP_USER", &d.user),
            passwd: profiled_env_or(p, "SAP_PASSWD", &d.passwd),
            lang: profiled_env_or(p, "SAP_LANG", &d.lang),
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            ashost: "mock_host".to_string(),
            sysnr: "00".to_string(),
            client: "100".to_string(),
            user: "demo".to_string(),
            passwd: "demo".to_string(),
            lang: "ZH".to_string(),
        }
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for ConnectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectorConfig")
            .field("ashost", &self.ashost)
            .field("sysnr", &self.sysnr)
            .field("client", &self.client)
            .field("user", &self.user)
            .field("passwd", &"***")
            .field("lang", &self.lang)
            .finish()
    }
}

// ── Simulated latency ─────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatencyConfig {
    /// Delay applied to every RFC invocation.
    pub rfc_ms: u64,
    /// Delay applied to every module data fetch.
    pub fetch_ms: u64,
}

impl LatencyConfig {
    /// No artificial delay at all.
    pub const NONE: Self = Self { rfc_ms: 0, fetch_ms: 0 };

    fn from_env_profiled(p: &str) -> Self {
        let d = Self::default();
        Self {
            rfc_ms: profiled_env_u64(p, "SAP_RFC_LATENCY_MS", d.rfc_ms),
            fetch_ms: profiled_env_u64(p, "SAP_FETCH_LATENCY_MS", d.fetch_ms),
        }
    }

    pub fn rfc(&self) -> Duration {
        Duration::from_millis(self.rfc_ms)
    }

    pub fn fetch(&self) -> Duration {
        Duration::from_millis(self.fetch_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { rfc_ms: 500, fetch_ms: 300 }
    }
}

// ── MCP server ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Name reported in the MCP `initialize` handshake.
    pub name: String,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            name: profiled_env_or(p, "MCP_SERVER_NAME", &Self::default().name),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { name: "SAP Agent AI Demo".to_string() }
    }
}
