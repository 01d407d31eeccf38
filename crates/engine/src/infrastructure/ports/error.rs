//! Error types for port operations.

use std::time::Duration;

/// Failure to open the shared store connection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConnectionError {
    /// The driver could not open the database.
    #[error("Failed to open connection: {message}")]
    Open { message: String },

    /// The connection opened but the `person` table could not be created.
    #[error("Failed to prepare schema: {message}")]
    Schema { message: String },

    /// Opening the connection did not finish before the deadline.
    #[error("Connection attempt timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl ConnectionError {
    pub fn open(message: impl ToString) -> Self {
        Self::Open {
            message: message.to_string(),
        }
    }

    pub fn schema(message: impl ToString) -> Self {
        Self::Schema {
            message: message.to_string(),
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::Timeout {
            timeout_ms: duration_ms(after),
        }
    }
}

/// Store operation errors with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No row matched - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Insert failed, or the connection needed for it was unavailable.
    #[error("Write failed in {operation}: {message}")]
    Write {
        operation: &'static str,
        message: String,
    },

    /// Query, scan or connection failure while reading.
    #[error("Read failed in {operation}: {message}")]
    Read {
        operation: &'static str,
        message: String,
    },

    /// The operation exceeded its deadline.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },
}

impl StoreError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Write error with operation context.
    pub fn write(operation: &'static str, message: impl ToString) -> Self {
        Self::Write {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Read error with operation context.
    pub fn read(operation: &'static str, message: impl ToString) -> Self {
        Self::Read {
            operation,
            message: message.to_string(),
        }
    }

    pub fn timeout(operation: &'static str, after: Duration) -> Self {
        Self::Timeout {
            operation,
            timeout_ms: duration_ms(after),
        }
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
