//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Database configuration (PostgreSQL)
    pub database: DatabaseSettings,

    /// Token signing settings
    pub jwt: JwtSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// PostgreSQL database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Database connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

/// Access and refresh token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Key for signing access tokens
    pub access_token_key: String,

    /// Key for signing refresh tokens
    pub refresh_token_key: String,

    /// Access token lifetime in seconds
    pub access_token_age_seconds: i64,

    /// Refresh token lifetime in days
    pub refresh_token_age_days: i64,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

/// Minimum required length for token keys (256 bits = 32 bytes)
pub const MIN_TOKEN_KEY_LENGTH: usize = 32;

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. `APP__`-prefixed environment variables
    /// 4. Plain variables (`HOST`, `PORT`, `DATABASE_URL`, `ACCESS_TOKEN_KEY`,
    ///    `REFRESH_TOKEN_KEY`, `ACCESS_TOKEN_AGE`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if a token key is too short.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.access_token_age_seconds", 3000)?
            .set_default("jwt.refresh_token_age_days", 7)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?
            // Load from config files
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=5000 -> server.port = 5000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            // Map simple environment variables
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.access_token_key", std::env::var("ACCESS_TOKEN_KEY").ok())?
            .set_override_option(
                "jwt.refresh_token_key",
                std::env::var("REFRESH_TOKEN_KEY").ok(),
            )?
            .set_override_option(
                "jwt.access_token_age_seconds",
                std::env::var("ACCESS_TOKEN_AGE").ok(),
            )?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| {
                settings.jwt.validate()?;
                Ok(settings)
            })
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl JwtSettings {
    /// Reject keys too short to sign HS256 tokens safely.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, key) in [
            ("access token key", &self.access_token_key),
            ("refresh token key", &self.refresh_token_key),
        ] {
            if key.len() < MIN_TOKEN_KEY_LENGTH {
                return Err(ConfigError::Message(format!(
                    "The {} must be at least {} characters. Current length: {}",
                    name,
                    MIN_TOKEN_KEY_LENGTH,
                    key.len()
                )));
            }
        }

        Ok(())
    }
}
