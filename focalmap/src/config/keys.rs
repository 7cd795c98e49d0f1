//! Addressable configuration keys for `config get/set/list`.

use std::path::PathBuf;
use std::str::FromStr;

use super::{ConfigError, ConfigFile};
use crate::distance::DistanceMetric;

/// A `section.key` configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    InputsTiles,
    InputsDistricts,
    InputsPlazas,
    StoreFocalPoints,
    DistanceMetric,
    LoggingLevel,
    LoggingDirectory,
}

impl ConfigKey {
    /// All keys, grouped by section.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::InputsTiles,
            ConfigKey::InputsDistricts,
            ConfigKey::InputsPlazas,
            ConfigKey::StoreFocalPoints,
            ConfigKey::DistanceMetric,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingDirectory,
        ]
    }

    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::InputsTiles | ConfigKey::InputsDistricts | ConfigKey::InputsPlazas => {
                "inputs"
            }
            ConfigKey::StoreFocalPoints => "store",
            ConfigKey::DistanceMetric => "distance",
            ConfigKey::LoggingLevel | ConfigKey::LoggingDirectory => "logging",
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::InputsTiles => "tiles",
            ConfigKey::InputsDistricts => "districts",
            ConfigKey::InputsPlazas => "plazas",
            ConfigKey::StoreFocalPoints => "focal_points",
            ConfigKey::DistanceMetric => "metric",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingDirectory => "directory",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::InputsTiles => path_string(&config.inputs.tiles),
            ConfigKey::InputsDistricts => path_string(&config.inputs.districts),
            ConfigKey::InputsPlazas => path_string(&config.inputs.plazas),
            ConfigKey::StoreFocalPoints => path_string(&config.store.focal_points),
            ConfigKey::DistanceMetric => config.distance.metric.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingDirectory => config
                .logging
                .directory
                .as_deref()
                .map(path_string)
                .unwrap_or_default(),
        }
    }

    /// Validate and set a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::InputsTiles => config.inputs.tiles = self.required_path(value)?,
            ConfigKey::InputsDistricts => config.inputs.districts = self.required_path(value)?,
            ConfigKey::InputsPlazas => config.inputs.plazas = self.required_path(value)?,
            ConfigKey::StoreFocalPoints => config.store.focal_points = self.required_path(value)?,
            ConfigKey::DistanceMetric => {
                config.distance.metric =
                    value
                        .parse::<DistanceMetric>()
                        .map_err(|reason| ConfigError::InvalidValue {
                            key: self.name(),
                            reason,
                        })?
            }
            ConfigKey::LoggingLevel => {
                if value.is_empty() {
                    return Err(self.invalid("level must not be empty"));
                }
                config.logging.level = value.to_string();
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = (!value.is_empty()).then(|| PathBuf::from(value));
            }
        }
        Ok(())
    }

    fn required_path(&self, value: &str) -> Result<PathBuf, ConfigError> {
        if value.is_empty() {
            return Err(self.invalid("path must not be empty"));
        }
        Ok(PathBuf::from(value))
    }

    fn invalid(&self, reason: &str) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name(),
            reason: reason.to_string(),
        }
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s)
            .ok_or(ConfigError::UnknownKey(s))
    }
}

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}
