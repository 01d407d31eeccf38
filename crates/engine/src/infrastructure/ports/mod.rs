//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Person storage and the connection it runs on (could swap SQLite -> Postgres)
//! - File writes (config files)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{ConnectionFactory, PersonRepo};

// =============================================================================
// External Ports
// =============================================================================
pub use external::FileWriterPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{MockConnectionFactory, MockPersonRepo};

#[cfg(test)]
pub use external::MockFileWriterPort;

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ConnectionError, StoreError};
