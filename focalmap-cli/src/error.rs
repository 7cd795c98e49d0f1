//! CLI error type.

use std::fmt;
use std::process;

use focalmap::config::ConfigError;
use focalmap::focal::BuildError;
use focalmap::logging::LoggingError;
use focalmap::report::ReportError;
use focalmap::source::SourceError;
use focalmap::store::StoreError;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// Invalid or unusable configuration.
    Config(String),

    /// Failed to read or write the config file.
    ConfigFile(ConfigError),

    /// Failed to install logging.
    Logging(LoggingError),

    /// Failed to read an input file.
    Source(SourceError),

    /// Failed to build focal point groups.
    Build(BuildError),

    /// Failed to read or write the focal point store.
    Store(StoreError),

    /// Failed to write a report.
    Report(ReportError),

    /// Failed to create an output file.
    Output(std::io::Error),
}

impl CliError {
    /// Print the error to stderr and exit with status 1.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);
        process::exit(1);
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::Logging(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Source(e) => write!(f, "Failed to load input: {}", e),
            CliError::Build(e) => write!(f, "Failed to build focal points: {}", e),
            CliError::Store(e) => write!(f, "Focal point store error: {}", e),
            CliError::Report(e) => write!(f, "Failed to write report: {}", e),
            CliError::Output(e) => write!(f, "Failed to open output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(_) => None,
            CliError::ConfigFile(e) => Some(e),
            CliError::Logging(e) => Some(e),
            CliError::Source(e) => Some(e),
            CliError::Build(e) => Some(e),
            CliError::Store(e) => Some(e),
            CliError::Report(e) => Some(e),
            CliError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e)
    }
}

impl From<SourceError> for CliError {
    fn from(e: SourceError) -> Self {
        CliError::Source(e)
    }
}

impl From<BuildError> for CliError {
    fn from(e: BuildError) -> Self {
        CliError::Build(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<ReportError> for CliError {
    fn from(e: ReportError) -> Self {
        CliError::Report(e)
    }
}
