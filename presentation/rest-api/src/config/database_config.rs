use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::app_config::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding the sqlx migrations
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("DATABASE_MAX_CONNECTIONS").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        url: Option<String>,
        max_connections: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;

        let max_connections = match max_connections {
            None => 5,
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidVariable("DATABASE_MAX_CONNECTIONS", raw))?,
        };

        Ok(Self {
            url,
            max_connections,
            migrations_path: migrations_path.unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
        })
    }
}

/// Opens the connection pool and brings the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(
        "database ready, migrations applied from {}",
        settings.migrations_path
    );
    Ok(pool)
}
