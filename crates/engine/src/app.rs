//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    file_writer::FsFileWriter,
    persistence::{SqliteConnectionFactory, SqlitePersonRepo},
    ports::{ClockPort, FileWriterPort, PersonRepo, RandomPort},
    settings::EngineConfig,
};
use crate::repositories::{ClockService, ConfigFiles, RandomService};

/// Main application state.
///
/// Every collaborator is injected; `from_config` is the only place real
/// adapters are chosen.
pub struct App {
    pub persons: Arc<dyn PersonRepo>,
    pub config_files: ConfigFiles,
    pub clock: ClockService,
    pub random: RandomService,
}

impl App {
    pub fn new(
        persons: Arc<dyn PersonRepo>,
        file_writer: Arc<dyn FileWriterPort>,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            persons,
            config_files: ConfigFiles::new(file_writer),
            clock: ClockService::new(clock),
            random: RandomService::new(random),
        }
    }

    /// Wire production adapters. The database is not opened until the first
    /// store operation.
    pub fn from_config(config: &EngineConfig) -> Self {
        let factory = Arc::new(SqliteConnectionFactory::new(
            config.database_url.clone(),
            config.max_connections,
        ));
        let persons = Arc::new(SqlitePersonRepo::new(factory, config.operation_timeout));

        Self::new(
            persons,
            Arc::new(FsFileWriter::new()),
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }
}
