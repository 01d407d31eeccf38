//! Shared SQLite connection management

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use crate::infrastructure::ports::{ConnectionError, ConnectionFactory};

/// Opens a pool from a connection string.
pub struct SqliteConnectionFactory {
    url: String,
    max_connections: u32,
}

impl SqliteConnectionFactory {
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
        }
    }
}

#[async_trait]
impl ConnectionFactory for SqliteConnectionFactory {
    async fn connect(&self) -> Result<SqlitePool, ConnectionError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .connect(&self.url)
            .await
            .map_err(ConnectionError::open)?;

        tracing::info!(url = %self.url, "Connected to SQLite");
        Ok(pool)
    }
}

/// Lazily opened, process-wide pool.
///
/// The first caller of [`SqliteConnector::acquire`] opens the pool through the
/// injected factory and creates the schema; concurrent first callers wait on
/// that single attempt. A failed attempt leaves the cell empty, so the next
/// caller tries again.
pub struct SqliteConnector {
    factory: Arc<dyn ConnectionFactory>,
    pool: OnceCell<SqlitePool>,
    timeout: Duration,
}

impl SqliteConnector {
    pub fn new(factory: Arc<dyn ConnectionFactory>, timeout: Duration) -> Self {
        Self {
            factory,
            pool: OnceCell::new(),
            timeout,
        }
    }

    /// Get the shared pool, opening it on first use.
    pub async fn acquire(&self) -> Result<SqlitePool, ConnectionError> {
        let pool = self.pool.get_or_try_init(|| self.open()).await?;
        Ok(pool.clone())
    }

    /// Whether the pool has been opened.
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    async fn open(&self) -> Result<SqlitePool, ConnectionError> {
        let attempt = async {
            let pool = self.factory.connect().await?;
            ensure_schema(&pool).await?;
            Ok::<_, ConnectionError>(pool)
        };

        match tokio::time::timeout(self.timeout, attempt).await {
            Ok(Ok(pool)) => {
                tracing::info!("Person store connection established");
                Ok(pool)
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Failed to open person store connection");
                Err(e)
            }
            Err(_) => {
                let e = ConnectionError::timeout(self.timeout);
                tracing::error!(error = %e, "Failed to open person store connection");
                Err(e)
            }
        }
    }
}

/// Create the `person` table if it does not exist yet.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), ConnectionError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS person (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            fullname TEXT NOT NULL,
            phone TEXT NOT NULL,
            currency TEXT NOT NULL,
            price REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .map_err(ConnectionError::schema)?;

    Ok(())
}
