use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level service configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DevExcuseConfig {
    pub server: ServerConfig,
    pub selection: SelectionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub logging: RequestLoggingConfig,
    pub visitors: VisitorsConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    /// Internal fault details are included in 500 responses.
    Development,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// e.g. "0.0.0.0:5500"
    pub listen: String,

    /// Optional number of worker threads - default is decided by Pingora.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    pub environment: Environment,

    /// Print the startup banner when the server boots.
    pub banner: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:5500".to_string(),
            threads: None,
            environment: Environment::Production,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectionConfig {
    /// Upper bound for `/excuse?count=`.
    pub max_count: usize,

    /// Fixed RNG seed. Unset means thread-local randomness.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_count: 10,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub window_secs: u64,
    /// Per-client cap applied to every route except `/health`.
    pub general_max: usize,
    /// Additional per-client cap for `/search`.
    pub search_max: usize,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_secs: 15 * 60,
            general_max: 100,
            search_max: 30,
        }
    }
}

impl RateLimitConfig {
    /// Human-readable window, e.g. "15 minutes" or "90 seconds".
    pub fn window_label(&self) -> String {
        match self.window_secs {
            60 => "1 minute".to_string(),
            secs if secs % 60 == 0 => format!("{} minutes", secs / 60),
            1 => "1 second".to_string(),
            secs => format!("{secs} seconds"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub enabled: bool,
    pub allow_credentials: bool,
    pub max_age_secs: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_credentials: true,
            max_age_secs: 60 * 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestLoggingConfig {
    /// Emit one event per request and one per response.
    pub requests: bool,
}

impl Default for RequestLoggingConfig {
    fn default() -> Self {
        Self { requests: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisitorsConfig {
    /// JSON document holding the visitor count. Unset keeps the count in memory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
