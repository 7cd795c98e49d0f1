//! Shared command startup: configuration and logging.

use focalmap::config::{config_file_path, ConfigFile};
use focalmap::logging::{init_logging, LoggingGuard};

use crate::error::CliError;

/// Loaded configuration plus the logging guard for one command run.
pub struct CliRunner {
    config: ConfigFile,
    _logging: LoggingGuard,
}

impl CliRunner {
    /// Load the config file and install logging.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let logging = init_logging(&config.logging)?;
        Ok(Self {
            config,
            _logging: logging,
        })
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log the command name, version and config location.
    pub fn log_startup(&self, command: &str) {
        tracing::info!(
            version = focalmap::VERSION,
            command,
            config = %config_file_path().display(),
            "focalmap starting"
        );
    }
}
