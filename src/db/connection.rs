use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::db::errors::{DatabaseError, Result};

/// Translate the configured connection settings into sqlx options
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    match config {
        DatabaseConfig::Url(url) => PgConnectOptions::from_str(url).map_err(|e| {
            DatabaseError::ConnectionError(format!("Invalid database URL: {}", e))
        }),
        DatabaseConfig::Parts {
            host,
            port,
            database,
            user,
            password,
            ssl,
        } => {
            let options = PgConnectOptions::new()
                .host(host)
                .port(*port)
                .database(database)
                .username(user)
                .password(password);

            Ok(if *ssl {
                options.ssl_mode(PgSslMode::Require)
            } else {
                options
            })
        }
    }
}

/// Create the shared connection pool.
///
/// The pool is created lazily so the process can start while the database is
/// still coming up; the first query pays the connection cost.
pub fn create_pool(config: &DatabaseConfig, max_connections: u32) -> Result<PgPool> {
    let options = connect_options(config)?;

    info!(max_connections = max_connections, "Creating database connection pool");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(0)
        .acquire_timeout(Duration::from_secs(3))
        .idle_timeout(Duration::from_secs(60))
        .test_before_acquire(true)
        .connect_lazy_with(options);

    Ok(pool)
}

/// Apply the bundled schema migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Health check for the database connection
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::QueryError)?;

    Ok(())
}
