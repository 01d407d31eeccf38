//! PersonStore domain types.
//!
//! Pure data with invariants. Storage, clocks, randomness and file I/O live
//! behind ports in the engine crate.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::Person;
pub use error::DomainError;
pub use ids::PersonId;
pub use value_objects::ServerConfig;
