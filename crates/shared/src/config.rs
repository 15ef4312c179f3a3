//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    pub jwt: JwtSettings,
    /// Session cookie configuration.
    #[serde(default)]
    pub session: SessionConfig,
    /// Ledger listing options.
    #[serde(default)]
    pub ledger: LedgerConfig,
    /// Analytics options.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Logging options.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Seconds to wait for a connection before giving up.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    5
}

/// JWT configuration as read from config files.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Session lifetime in seconds.
    #[serde(default = "default_session_expiry")]
    pub session_expiry_secs: u64,
}

fn default_session_expiry() -> u64 {
    86_400 // 1 day
}

/// Session cookie configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Only send the cookie over HTTPS.
    #[serde(default)]
    pub secure_cookie: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure_cookie: false,
        }
    }
}

fn default_cookie_name() -> String {
    "pocketbook_session".to_string()
}

/// Ledger listing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Records returned by a listing without an explicit limit. `0` means unbounded.
    #[serde(default = "default_list_limit")]
    pub default_limit: u64,
    /// Upper bound applied to any requested limit.
    #[serde(default = "default_max_list_limit")]
    pub max_limit: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_limit: default_list_limit(),
            max_limit: default_max_list_limit(),
        }
    }
}

fn default_list_limit() -> u64 {
    50
}

fn default_max_list_limit() -> u64 {
    500
}

/// Sort direction for monthly buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthOrder {
    /// Oldest month first (chronological, suited for charts).
    #[default]
    Ascending,
    /// Newest month first.
    Descending,
}

/// Analytics options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct AnalyticsConfig {
    /// Ordering of `monthly_totals` buckets.
    #[serde(default)]
    pub month_order: MonthOrder,
}

/// Logging options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, `POCKETBOOK__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("POCKETBOOK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
