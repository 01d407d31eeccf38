//! PersonStore Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - Port traits and their adapters (SQLite, filesystem, clock, random)
//! - `repositories/` - Thin services over ports
//! - `app` - Application composition
//! - `cli` - Command parsing and execution for the binary

pub mod app;
pub mod cli;
pub mod infrastructure;
pub mod repositories;

pub use app::App;
