//! SQLite implementation of the person store.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use personstore_domain::{Person, PersonId};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tokio::time::Instant;

use super::connection::SqliteConnector;
use crate::infrastructure::ports::{ConnectionError, ConnectionFactory, PersonRepo, StoreError};

const SQL_INSERT: &str = "INSERT INTO person(fullname, phone, currency, price) VALUES (?, ?, ?, ?)";
const SQL_LOAD_ALL: &str = "SELECT id, fullname, phone, currency, price FROM person";
const SQL_LOAD_BY_ID: &str =
    "SELECT id, fullname, phone, currency, price FROM person WHERE id = ? LIMIT 1";

/// Person storage over a lazily opened SQLite pool.
///
/// Every operation is a single statement run under the configured deadline.
pub struct SqlitePersonRepo {
    connector: SqliteConnector,
    timeout: Duration,
}

impl SqlitePersonRepo {
    pub fn new(factory: Arc<dyn ConnectionFactory>, timeout: Duration) -> Self {
        Self {
            connector: SqliteConnector::new(factory, timeout),
            timeout,
        }
    }

    /// Shared pool for this store, opened on first use.
    pub async fn acquire_connection(&self) -> Result<SqlitePool, ConnectionError> {
        self.connector.acquire().await
    }

    /// Run a statement with whatever is left of the operation's budget.
    ///
    /// The connection step is bounded by the connector's own timer only, so a
    /// slow open always surfaces as a connection failure and never as a
    /// statement timeout.
    async fn with_deadline<T>(
        &self,
        operation: &'static str,
        started: Instant,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout_at(started + self.timeout, fut)
            .await
            .map_err(|_| {
                tracing::warn!(operation, timeout = ?self.timeout, "Person store deadline exceeded");
                StoreError::timeout(operation, self.timeout)
            })?
    }

    fn row_to_person(row: &SqliteRow, operation: &'static str) -> Result<Person, StoreError> {
        let read = |e: sqlx::Error| StoreError::read(operation, e);

        let id: i64 = row.try_get("id").map_err(read)?;
        let id = PersonId::new(id).map_err(|e| StoreError::read(operation, e))?;

        Ok(Person {
            id: Some(id),
            full_name: row.try_get("fullname").map_err(read)?,
            phone: row.try_get("phone").map_err(read)?,
            currency: row.try_get("currency").map_err(read)?,
            price: row.try_get("price").map_err(read)?,
        })
    }
}

#[async_trait]
impl PersonRepo for SqlitePersonRepo {
    async fn save(&self, person: &Person) -> Result<PersonId, StoreError> {
        if let Some(id) = person.id {
            return Err(StoreError::write(
                "save",
                format!("person already persisted with id {id}"),
            ));
        }

        let started = Instant::now();
        let pool = self.acquire_connection().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to get DB connection");
            StoreError::write("save", e)
        })?;

        self.with_deadline("save", started, async {
            let result = sqlx::query(SQL_INSERT)
                .bind(&person.full_name)
                .bind(&person.phone)
                .bind(&person.currency)
                .bind(person.price)
                .execute(&pool)
                .await
                .map_err(|e| {
                    tracing::warn!(error = %e, "Failed to save person into DB");
                    StoreError::write("save", e)
                })?;

            // Row id is reported by the insert itself; no follow-up lookup.
            let id = PersonId::new(result.last_insert_rowid())
                .map_err(|e| StoreError::write("save", e))?;

            tracing::debug!(id = %id, "Saved person");
            Ok(id)
        })
        .await
    }

    async fn load(&self, id: PersonId) -> Result<Person, StoreError> {
        let started = Instant::now();
        let pool = self.acquire_connection().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to get DB connection");
            StoreError::read("load", e)
        })?;

        self.with_deadline("load", started, async {
            let row = sqlx::query(SQL_LOAD_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(|e| StoreError::read("load", e))?;

            match row {
                Some(row) => Self::row_to_person(&row, "load"),
                None => {
                    tracing::debug!(id = %id, "Requested person not found");
                    Err(StoreError::not_found("Person", id))
                }
            }
        })
        .await
    }

    async fn load_all(&self) -> Result<Vec<Person>, StoreError> {
        let started = Instant::now();
        let pool = self
            .acquire_connection()
            .await
            .map_err(|e| StoreError::read("load_all", e))?;

        self.with_deadline("load_all", started, async {
            let rows = sqlx::query(SQL_LOAD_ALL)
                .fetch_all(&pool)
                .await
                .map_err(|e| StoreError::read("load_all", e))?;

            rows.iter()
                .map(|row| Self::row_to_person(row, "load_all"))
                .collect()
        })
        .await
    }
}
