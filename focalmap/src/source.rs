//! Input file readers.
//!
//! Raw map data arrives as JSON exports:
//!
//! - tiles: object of opaque key → tile record, optionally wrapped in `{"data": ...}`
//! - districts: array of district definitions, optionally wrapped in `{"data": ...}`
//! - plazas: object of plaza region id → `{id, name}`
//! - assets: array of `{id, x, y, type}`
//!
//! Every reader fails on a missing or unparsable file. There are no defaults:
//! a run without its inputs cannot produce meaningful distances.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asset::Asset;
use crate::tile::Tile;

/// Errors that can occur while reading input files.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid for its format.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Authoritative definition of a district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Member parcels as `"x,y"` strings.
    #[serde(default)]
    pub parcels: Vec<String>,
}

/// Plaza display information, keyed by plaza region id in the lookup file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlazaName {
    pub id: String,
    pub name: String,
}

/// Plaza region id → display information.
pub type PlazaNames = BTreeMap<String, PlazaName>;

#[derive(Deserialize)]
#[serde(untagged)]
enum Enveloped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Enveloped<T> {
    fn into_inner(self) -> T {
        match self {
            Enveloped::Wrapped { data } => data,
            Enveloped::Bare(data) => data,
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| SourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read raw tile records. Keys are discarded.
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>, SourceError> {
    let tiles: HashMap<String, Tile> = read_json::<Enveloped<_>>(path)?.into_inner();
    tracing::info!(path = %path.display(), tiles = tiles.len(), "Loaded tiles");
    Ok(tiles.into_values().collect())
}

/// Read district definitions in file order.
pub fn load_district_definitions(path: &Path) -> Result<Vec<DistrictDefinition>, SourceError> {
    let districts: Vec<DistrictDefinition> = read_json::<Enveloped<_>>(path)?.into_inner();
    tracing::info!(
        path = %path.display(),
        districts = districts.len(),
        "Loaded district definitions"
    );
    Ok(districts)
}

/// Read the plaza name lookup.
pub fn load_plaza_names(path: &Path) -> Result<PlazaNames, SourceError> {
    let plazas: PlazaNames = read_json(path)?;
    tracing::info!(path = %path.display(), plazas = plazas.len(), "Loaded plaza names");
    Ok(plazas)
}

/// Read assets in file order.
pub fn load_assets(path: &Path) -> Result<Vec<Asset>, SourceError> {
    let assets: Vec<Asset> = read_json(path)?;
    tracing::info!(path = %path.display(), assets = assets.len(), "Loaded assets");
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileType;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_tiles_wrapped() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "tiles.json",
            r#"{"ok": true, "data": {
                "0,0": {"x": 0, "y": 0, "type": "plaza", "estateId": "1092"},
                "1,0": {"x": 1, "y": 0, "type": "road", "estateId": "1186"},
                "2,0": {"x": 2, "y": 0, "type": "owned", "estateId": null}
            }}"#,
        );

        let mut tiles = load_tiles(&path).unwrap();
        tiles.sort_by_key(|t| t.x);

        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].tile_type, TileType::Plaza);
        assert_eq!(tiles[2].region_id, None);
    }

    #[test]
    fn test_load_tiles_bare() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "tiles.json",
            r#"{"5,5": {"x": 5, "y": 5, "type": "district", "regionId": "d"}}"#,
        );
        let tiles = load_tiles(&path).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].tile_type, TileType::District);
    }

    #[test]
    fn test_load_districts_defaults_optional_fields() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "districts.json",
            r#"{"data": [{"id": "d1", "name": "Vegas City", "category": "Gaming"}]}"#,
        );

        let districts = load_district_definitions(&path).unwrap();
        assert_eq!(districts.len(), 1);
        assert!(districts[0].parcels.is_empty());
        assert!(districts[0].description.is_empty());
    }

    #[test]
    fn test_load_plaza_names() {
        let temp = TempDir::new().unwrap();
        let path = write_file(
            &temp,
            "plaza.json",
            r#"{"1092": {"id": "CENTRAL_PLAZA", "name": "Central Genesis Plaza"}}"#,
        );
        let plazas = load_plaza_names(&path).unwrap();
        assert_eq!(plazas["1092"].id, "CENTRAL_PLAZA");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = load_assets(&temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_file(&temp, "assets.json", "[{\"id\": 1}");
        assert!(matches!(
            load_assets(&path).unwrap_err(),
            SourceError::Parse { .. }
        ));
    }
}
