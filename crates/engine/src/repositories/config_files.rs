//! Config file persistence.
//!
//! Serializes a [`ServerConfig`] to JSON and hands the bytes to the injected
//! file writer, so tests can swap the disk out for a double.

use std::path::Path;
use std::sync::Arc;

use personstore_domain::ServerConfig;

use crate::infrastructure::ports::FileWriterPort;

/// Writes server config files.
pub struct ConfigFiles {
    writer: Arc<dyn FileWriterPort>,
}

impl ConfigFiles {
    pub fn new(writer: Arc<dyn FileWriterPort>) -> Self {
        Self { writer }
    }

    /// Save `config` as JSON at `path`, replacing any existing file.
    pub fn save_config(&self, path: &Path, config: &ServerConfig) -> Result<(), ConfigFileError> {
        let data = serde_json::to_vec(config)
            .map_err(|e| ConfigFileError::Serialization(e.to_string()))?;

        self.writer.write_file(path, &data).map_err(|e| {
            tracing::warn!(
                file = %path.display(),
                error = %e,
                "Failed to save config file"
            );
            ConfigFileError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// Errors that can occur while saving a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("{message}")]
    Write { path: String, message: String },
}
