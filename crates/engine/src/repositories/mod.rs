//! Repository modules - Thin wrappers around port traits.
//!
//! Ports with no logic of their own (person storage) are injected directly;
//! wrappers exist only where they add behavior or a narrower API.

pub mod clock;
pub mod config_files;
pub mod random;

pub use clock::ClockService;
pub use config_files::{ConfigFileError, ConfigFiles};
pub use random::RandomService;
