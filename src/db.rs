use crate::config::AppConfig;
use crate::errors::ServiceError;
use metrics::{counter, gauge};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Convenience alias used throughout handlers and services.
pub type DbPool = DatabaseConnection;

/// Connection-pool settings for the database layer.
///
/// Defaults are tuned for local development; production values come from
/// [`AppConfig`] via the `From` impl below.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(300),
            sqlx_logging: false,
        }
    }
}

impl From<&AppConfig> for DbConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.db_max_connections,
            min_connections: config.db_min_connections,
            connect_timeout: Duration::from_secs(config.db_connect_timeout_secs),
            acquire_timeout: Duration::from_secs(config.db_acquire_timeout_secs),
            idle_timeout: Duration::from_secs(config.db_idle_timeout_secs),
            sqlx_logging: config.is_development(),
        }
    }
}

/// Establishes a database connection pool with default settings.
pub async fn establish_connection(database_url: &str) -> Result<DbPool, ServiceError> {
    let config = DbConfig {
        url: database_url.to_string(),
        ..Default::default()
    };
    establish_connection_with_config(&config).await
}

/// Establishes a database connection pool from explicit settings.
pub async fn establish_connection_with_config(config: &DbConfig) -> Result<DbPool, ServiceError> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to database"
    );

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(config.sqlx_logging);

    let pool = Database::connect(options).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        counter!("db.connection_failures_total", 1);
        ServiceError::DatabaseError(e)
    })?;

    gauge!("db.pool_max_connections", config.max_connections as f64);
    info!("Database connection established");
    Ok(pool)
}

/// Establishes a connection pool using the application configuration.
pub async fn establish_connection_from_app_config(
    config: &AppConfig,
) -> Result<DbPool, ServiceError> {
    establish_connection_with_config(&DbConfig::from(config)).await
}

/// Runs all pending migrations against the given pool.
pub async fn run_migrations(pool: &DbPool) -> Result<(), ServiceError> {
    info!("Running database migrations");
    let start = Instant::now();

    let result = migrations::Migrator::up(pool, None).await;

    let elapsed = start.elapsed();
    match &result {
        Ok(_) => info!("Database migrations completed in {:?}", elapsed),
        Err(e) => error!("Database migrations failed after {:?}: {}", elapsed, e),
    }

    result.map_err(ServiceError::DatabaseError)
}

/// Verifies that the database is reachable.
pub async fn check_connection(pool: &DbPool) -> Result<(), ServiceError> {
    match pool.ping().await {
        Ok(_) => {
            gauge!("db.reachable", 1.0);
            Ok(())
        }
        Err(e) => {
            gauge!("db.reachable", 0.0);
            error!("Database ping failed: {}", e);
            Err(ServiceError::DatabaseError(e))
        }
    }
}

/// Closes the connection pool, releasing all connections.
pub async fn close_pool(pool: DbPool) -> Result<(), ServiceError> {
    info!("Closing database connection pool");
    pool.close().await.map_err(ServiceError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connects_to_in_memory_sqlite() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        assert!(check_connection(&pool).await.is_ok());
        close_pool(pool).await.unwrap();
    }

    #[tokio::test]
    async fn runs_migrations_on_fresh_database() {
        let pool = establish_connection("sqlite::memory:").await.unwrap();
        assert!(run_migrations(&pool).await.is_ok());
    }

    #[test]
    fn db_config_follows_app_config() {
        let app = AppConfig::new(
            "sqlite::memory:".into(),
            "127.0.0.1".into(),
            5000,
            "development".into(),
        );
        let db = DbConfig::from(&app);
        assert_eq!(db.max_connections, app.db_max_connections);
        assert!(db.sqlx_logging);
    }
}
