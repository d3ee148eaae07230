use serde::Deserialize;

use crate::formatter::ArgumentOrder;
use crate::session::DEFAULT_MAX_SESSIONS;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Remote status endpoint over HTTP.
    Http,
    /// This host, via sysinfo.
    Local,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Base URL of the remote server; required for `kind = "http"`.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Argument order for sessions that never toggled.
    #[serde(default)]
    pub default_order: ArgumentOrder,
    /// Live sessions kept before the longest-idle one is evicted.
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_order: ArgumentOrder::default(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_max_sessions() -> usize {
    DEFAULT_MAX_SESSIONS
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.source.timeout_ms > 0,
            "source.timeout_ms must be > 0, got {}",
            self.source.timeout_ms
        );
        anyhow::ensure!(
            self.session.max_sessions > 0,
            "session.max_sessions must be > 0, got {}",
            self.session.max_sessions
        );
        if self.source.kind == SourceKind::Http {
            let base_url = self.source.base_url.as_deref().unwrap_or_default();
            anyhow::ensure!(
                base_url.starts_with("http://") || base_url.starts_with("https://"),
                "source.base_url must be an http(s) URL when source.kind = \"http\", got {:?}",
                base_url
            );
        }
        Ok(())
    }
}
