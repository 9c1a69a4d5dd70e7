//! PostgreSQL pool setup and schema migrations.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use storekeep_core::config::database::DatabaseConfig;
use storekeep_core::error::{AppError, ErrorKind};
use storekeep_core::result::AppResult;

/// Owns the sqlx pool during startup: connects, applies migrations, then
/// hands the pool over to the repositories.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized from configuration.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        info!(database = %redact_credentials(&config.url), "Connecting to PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Could not open database pool", e)
            })?;

        Ok(Self { pool })
    }

    /// Apply any pending schema migrations embedded at compile time.
    pub async fn run_migrations(&self) -> AppResult<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration failed", e))?;

        info!("Schema is up to date");
        Ok(())
    }

    /// Hand over the pool for repository construction.
    pub fn into_pool(self) -> PgPool {
        self.pool
    }
}

/// Drop the credential section of a connection URL before logging it.
fn redact_credentials(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    let rest = &url[scheme_end + 3..];
    match rest.find('@') {
        Some(at) => format!("{}://{}", &url[..scheme_end], &rest[at + 1..]),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_credentials() {
        assert_eq!(
            redact_credentials("postgres://app:secret@db:5432/storekeep"),
            "postgres://db:5432/storekeep"
        );
        assert_eq!(
            redact_credentials("postgres://localhost/storekeep"),
            "postgres://localhost/storekeep"
        );
    }
}
