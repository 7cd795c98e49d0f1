//! Configuration file management.
//!
//! Settings live in an INI file at `~/.focalmap/config.ini`:
//!
//! ```ini
//! [inputs]
//! tiles = files/latest.json
//! districts = files/districts.json
//! plazas = files/plaza.json
//!
//! [store]
//! focal_points = files/dcl_focal_points.json
//!
//! [distance]
//! metric = manhattan
//!
//! [logging]
//! level = info
//! ; directory = /var/log/focalmap
//! ```
//!
//! Missing keys take their defaults. CLI arguments override file values.

mod keys;

pub use keys::ConfigKey;

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

use crate::distance::DistanceMetric;

/// Name of the per-user configuration directory.
pub const CONFIG_DIR_NAME: &str = ".focalmap";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Errors that can occur loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("failed to write config {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSettings {
    pub tiles: PathBuf,
    pub districts: PathBuf,
    pub plazas: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            tiles: PathBuf::from("files/latest.json"),
            districts: PathBuf::from("files/districts.json"),
            plazas: PathBuf::from("files/plaza.json"),
        }
    }
}

/// Focal point store location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub focal_points: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            focal_points: PathBuf::from("files/dcl_focal_points.json"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceSettings {
    pub metric: DistanceMetric,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Directory for daily log files. Logs go to stderr only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

/// All configuration settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub inputs: InputSettings,
    pub store: StoreSettings,
    pub distance: DistanceSettings,
    pub logging: LoggingSettings,
}

/// Path of the per-user configuration directory.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path of the per-user configuration file.
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}

impl ConfigFile {
    /// Load the per-user configuration file.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            if let Some(value) = ini.get_from(Some(key.section()), key.key_name()) {
                if let Err(e) = key.set(&mut config, value) {
                    tracing::warn!(key = key.name(), error = %e, "Ignoring invalid config value");
                }
            }
        }
        Ok(config)
    }

    /// Save to the per-user configuration file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to a specific file, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            let value = key.get(self);
            if !value.is_empty() {
                ini.with_section(Some(key.section()))
                    .set(key.key_name(), value);
            }
        }
        ini.write_to_file(path).map_err(write_err)
    }
}
