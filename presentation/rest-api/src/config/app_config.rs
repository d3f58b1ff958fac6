use super::{cors_config, database_config::DatabaseSettings, server_config::ServerConfig};
use poem::middleware::Cors;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    MissingVariable(&'static str),
    #[error("config.invalid_variable: {0}={1}")]
    InvalidVariable(&'static str, String),
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
        })
    }
}
