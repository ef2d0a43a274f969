// Shared PostgreSQL pool used by the repositories and the /health endpoint

use crate::config::DatabaseConfig;
use crate::errors::DatabaseError;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct DbPool {
    pool: PgPool,
}

impl DbPool {
    /// Connect to the database named by `config.url`.
    ///
    /// The URL is parsed before any connection is attempted, so a malformed
    /// URL and an unreachable server both surface as
    /// `DatabaseError::ConnectionFailed`. Credentials never reach the logs.
    #[instrument(skip(config), fields(max_connections = config.max_connections))]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| DatabaseError::ConnectionFailed(format!("invalid database url: {}", e)))?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or("<default>"),
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "PostgreSQL is unreachable");
                DatabaseError::ConnectionFailed(e.to_string())
            })?;

        Ok(Self { pool })
    }

    /// Wrap a pool built elsewhere, e.g. one bound to a per-test schema
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// `SELECT 1` round trip backing `GET /health`
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::HealthCheckFailed(e.to_string()))?;

        tracing::debug!(
            size = self.pool.size(),
            idle = self.pool.num_idle(),
            "Database reachable"
        );
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
