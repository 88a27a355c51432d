//! Configuration management

use std::fmt;
use std::time::Duration;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES, DEFAULT_RETRIEVAL_DEADLINE_MS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
    pub retrieval: RetrievalSettings,
    pub seed: SeedSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

#[derive(Deserialize, Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub access_token_expiry_minutes: u64,
}

impl JwtSettings {
    pub fn access_token_ttl(&self) -> Duration {
        Duration::from_secs(self.access_token_expiry_minutes.saturating_mul(60))
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[redacted]")
            .field("access_token_expiry_minutes", &self.access_token_expiry_minutes)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalSettings {
    /// Hard wall-clock budget for one prompt page read.
    pub deadline_ms: u64,
}

impl RetrievalSettings {
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedSettings {
    pub enabled: bool,
    pub admin_password: String,
    pub user_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
    /// When set, logs go to a daily-rolling file in this directory instead of stdout.
    pub directory: Option<String>,
}

impl AppConfig {
    /// Load `.env`, then defaults, `config/default`, `config/{APP_ENV}` and
    /// `PROMPTDESK__*` environment variables, in increasing priority.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PROMPTDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Builder pre-populated with every default. Sources added after this override them.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>, AppError> {
        let builder = Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "promptdesk-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_secs", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("jwt.access_token_expiry_minutes", DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES)?
            .set_default("retrieval.deadline_ms", DEFAULT_RETRIEVAL_DEADLINE_MS)?
            .set_default("seed.enabled", false)?
            .set_default("seed.admin_password", "adminpassword")?
            .set_default("seed.user_password", "userpassword")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", true)?;
        Ok(builder)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let settings: AppConfig = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.jwt.secret.trim().is_empty() {
            return Err(AppError::InvalidConfig("jwt.secret must not be empty".into()));
        }
        if self.jwt.access_token_expiry_minutes == 0 {
            return Err(AppError::InvalidConfig(
                "jwt.access_token_expiry_minutes must be at least 1".into(),
            ));
        }
        if self.retrieval.deadline_ms == 0 {
            return Err(AppError::InvalidConfig("retrieval.deadline_ms must be at least 1".into()));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::InvalidConfig(
                "database.min_connections exceeds database.max_connections".into(),
            ));
        }
        Ok(())
    }
}
