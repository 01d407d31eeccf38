//! Repository port traits for database access.

use async_trait::async_trait;
use personstore_domain::{Person, PersonId};
use sqlx::SqlitePool;

use super::error::{ConnectionError, StoreError};

// =============================================================================
// Connection
// =============================================================================

/// Opens the pool the person store runs on.
///
/// The store calls this at most once per process; tests substitute a factory
/// that hands out an in-memory pool or a failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    async fn connect(&self) -> Result<SqlitePool, ConnectionError>;
}

// =============================================================================
// Person Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepo: Send + Sync {
    /// Insert an unsaved person and return the id the store assigned.
    async fn save(&self, person: &Person) -> Result<PersonId, StoreError>;

    /// Load a single person. A missing row is `StoreError::NotFound`.
    async fn load(&self, id: PersonId) -> Result<Person, StoreError>;

    /// Load every person in the store's scan order.
    async fn load_all(&self) -> Result<Vec<Person>, StoreError>;
}
