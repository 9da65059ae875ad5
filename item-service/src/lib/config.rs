use std::env;

use auth::HashingParams;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Absent selects the in-memory store.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: HashingParams,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_expiration_hours() -> i64 {
    12
}

impl JwtConfig {
    /// Lifetime of issued access tokens.
    ///
    /// # Errors
    /// * `Message` - `expiration_hours` is not positive or overflows a duration
    pub fn token_ttl(&self) -> Result<chrono::Duration, ConfigError> {
        if self.expiration_hours <= 0 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be positive, got {}",
                self.expiration_hours
            )));
        }

        chrono::Duration::try_hours(self.expiration_hours).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_hours out of range: {}",
                self.expiration_hours
            ))
        })
    }
}

// Connection strings and secrets stay out of logs.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[redacted]")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        Self::validate(configuration.try_deserialize()?)
    }

    fn validate(config: Self) -> Result<Self, ConfigError> {
        config.jwt.token_ttl()?;
        Ok(config)
    }
}
