//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created once
//! at process start, shared by every gateway through [`PgDatabase`], and closed
//! explicitly at shutdown.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPoolOptions};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

use crate::config::DatabaseConfig;
use crate::db::database::{Database, DbError, JsonRow, SqlParam};
use crate::error::CatalogError;

/// Default maximum connections for the pool.
/// Kept low for single-user tooling.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/catalog").await?;
/// ```
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
/// * `acquire_timeout` - How long a query waits for a free connection
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

/// [`Database`] backed by a shared `PgPool`.
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open the process-wide pool described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Database`] if the URL is malformed or
    /// no connection can be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, CatalogError> {
        let pool = create_pool_with_options(
            &config.url,
            config.max_connections,
            Duration::from_secs(config.acquire_timeout_secs),
        )
        .await?;

        tracing::debug!(max_connections = config.max_connections, "database pool ready");
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close every connection; in-flight queries finish first.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("database pool closed");
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Float(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
            SqlParam::Bool(v) => query.bind(*v),
        };
    }
    query
}

#[async_trait]
impl Database for PgDatabase {
    async fn fetch_rows(
        &self,
        sql: &str,
        params: &[SqlParam],
    ) -> Result<Vec<JsonRow>, DbError> {
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<JsonRow, _>(0).map_err(DbError::from))
            .collect()
    }

    async fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<u64, DbError> {
        let done = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;

        Ok(done.rows_affected())
    }
}
