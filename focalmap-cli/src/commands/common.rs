//! Common types and utilities shared across CLI commands.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use focalmap::config::ConfigFile;
use focalmap::distance::DistanceMetric;
use focalmap::focal::FocalPointKind;

use crate::error::CliError;

/// Focal point kind selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KindArg {
    Plazas,
    Roads,
    Districts,
}

impl From<KindArg> for FocalPointKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Plazas => FocalPointKind::Plazas,
            KindArg::Roads => FocalPointKind::Roads,
            KindArg::Districts => FocalPointKind::Districts,
        }
    }
}

/// Resolve the metric: CLI, then config.
///
/// The CLI selector is case-insensitive; an unrecognized value falls back to
/// manhattan with a warning.
pub fn resolve_metric(cli_metric: Option<&str>, config: &ConfigFile) -> DistanceMetric {
    match cli_metric {
        Some(selector) => DistanceMetric::from_selector(Some(selector)),
        None => config.distance.metric,
    }
}

/// Resolve a file path: CLI, then config.
pub fn resolve_path(cli_path: Option<PathBuf>, configured: &Path) -> PathBuf {
    cli_path.unwrap_or_else(|| configured.to_path_buf())
}

/// Open a buffered output file, or stdout when no path is given.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(CliError::Output)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_metric_takes_precedence() {
        let mut config = ConfigFile::default();
        config.distance.metric = DistanceMetric::Euclidean;

        assert_eq!(
            resolve_metric(Some("manhattan"), &config),
            DistanceMetric::Manhattan
        );
        assert_eq!(resolve_metric(None, &config), DistanceMetric::Euclidean);
    }

    #[test]
    fn test_cli_metric_is_case_insensitive() {
        let config = ConfigFile::default();
        assert_eq!(
            resolve_metric(Some("EUCLIDEAN"), &config),
            DistanceMetric::Euclidean
        );
        assert_eq!(
            resolve_metric(Some("Manhattan"), &config),
            DistanceMetric::Manhattan
        );
    }

    #[test]
    fn test_unknown_cli_metric_falls_back_to_manhattan() {
        let mut config = ConfigFile::default();
        config.distance.metric = DistanceMetric::Euclidean;
        assert_eq!(
            resolve_metric(Some("chebyshev"), &config),
            DistanceMetric::Manhattan
        );
    }

    #[test]
    fn test_default_metric_is_manhattan() {
        assert_eq!(
            resolve_metric(None, &ConfigFile::default()),
            DistanceMetric::Manhattan
        );
    }

    #[test]
    fn test_resolve_path() {
        let configured = Path::new("files/latest.json");
        assert_eq!(resolve_path(None, configured), configured);
        assert_eq!(
            resolve_path(Some(PathBuf::from("/tmp/tiles.json")), configured),
            PathBuf::from("/tmp/tiles.json")
        );
    }

    #[test]
    fn test_open_output_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("out.csv");
        {
            let mut out = open_output(Some(&path)).unwrap();
            out.write_all(b"ASSET_ID\n").unwrap();
            out.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ASSET_ID\n");
    }
}
