//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
    /// Lifetime of the token handed out when a QQ account still needs binding
    #[serde(default = "default_bind_token_expires")]
    pub bind_token_expires_secs: i64,
}

fn default_bind_token_expires() -> i64 {
    600
}

/// QQ OAuth application credentials
#[derive(Debug, Clone, Deserialize)]
pub struct QqConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    #[serde(default = "default_qq_api_base")]
    pub api_base: String,
}

fn default_qq_api_base() -> String {
    "https://graph.qq.com".to_string()
}

/// E-mail verification settings
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub verify_url: String,
    #[serde(default = "default_email_token_expires")]
    pub token_expires_secs: i64,
}

fn default_email_token_expires() -> i64 {
    24 * 60 * 60
}

/// Static home page generation
#[derive(Debug, Clone, Deserialize)]
pub struct StaticPagesConfig {
    pub output_dir: PathBuf,
    /// Regenerate from the server every N seconds; 0 disables
    #[serde(default)]
    pub interval_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub qq: QqConfig,
    pub email: EmailConfig,
    pub static_pages: StaticPagesConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `config/default` is missing or a value does not deserialize.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__REDIS__URL)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
