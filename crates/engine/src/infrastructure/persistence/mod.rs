//! SQLite-backed person persistence.

mod connection;
mod person_repository;

pub use connection::{ensure_schema, SqliteConnectionFactory, SqliteConnector};
pub use person_repository::SqlitePersonRepo;
