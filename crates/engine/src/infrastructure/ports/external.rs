//! Ports for effects outside the database.

use std::path::Path;

/// Writes a whole file in one call.
#[cfg_attr(test, mockall::automock)]
pub trait FileWriterPort: Send + Sync {
    fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;
}
