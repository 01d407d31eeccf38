//! Server address written out as a JSON config file.

use serde::{Deserialize, Serialize};

/// Host and port pair persisted by the config writer.
///
/// Field names are capitalized on the wire (`{"Host": .., "Port": ..}`) so
/// files written by older tooling still load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerConfig {
    pub host: String,
    pub port: String,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
        }
    }
}
