//! Layered configuration: built-in defaults, an optional file, then
//! `CLAIMS__`-prefixed environment variables (`CLAIMS__SERVER__PORT=9000`).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use logger_redacted::LoggerConfig;
use serde::Deserialize;

pub const ENV_PREFIX: &str = "CLAIMS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerSettings,
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub claims: ClaimsSettings,
    #[serde(default)]
    pub logging: LoggerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Postgres URL for the code reference tables; built-in tables when unset
    pub url: Option<String>,
    pub max_connections: u32,
    /// Create the reference tables and seed the standard codes at startup
    pub run_migrations: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
            run_migrations: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimsSettings {
    /// JSON file with claim Bundles to serve
    pub fixture_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, reading `path` if given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, environment: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("database.max_connections", 5)?
            .set_default("database.run_migrations", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("logging.redaction_enabled", true)?
            .set_default("logging.stderr", false)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                environment
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
