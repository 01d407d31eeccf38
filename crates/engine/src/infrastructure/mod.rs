//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod file_writer;
pub mod persistence;
pub mod ports;
pub mod settings;
