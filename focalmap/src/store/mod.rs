//! Focal point store.
//!
//! Persists the [`FocalPointCollection`] as a flat JSON file. The collection is
//! written once by the offline build and read by every reporting run. A store
//! loads its file at most once and serves the in-memory copy afterwards.
//!
//! A missing or corrupt file is an error for every caller: there is no
//! fallback that rebuilds groups at query time.

use std::cell::OnceCell;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::focal::{FocalPointCollection, FocalPointKind};

/// Errors that can occur reading or writing the focal point file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read focal points from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse focal points in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write focal points to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize focal points: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// File-backed focal point collection.
#[derive(Debug)]
pub struct FocalPointStore {
    path: PathBuf,
    loaded: OnceCell<FocalPointCollection>,
}

impl FocalPointStore {
    /// Create a store for the given file. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: OnceCell::new(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true once a collection has been loaded or saved.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Load the collection, reading the file on first call only.
    pub fn load(&self) -> Result<&FocalPointCollection, StoreError> {
        if let Some(collection) = self.loaded.get() {
            return Ok(collection);
        }

        let collection = read_collection(&self.path)?;
        Ok(self.loaded.get_or_init(|| collection))
    }

    /// Write the full collection atomically and make it the loaded copy.
    pub fn save(&mut self, collection: FocalPointCollection) -> Result<(), StoreError> {
        write_collection(&self.path, &collection)?;
        tracing::info!(
            path = %self.path.display(),
            groups = collection.group_count(),
            plaza_parcels = collection.parcel_count(FocalPointKind::Plazas),
            road_parcels = collection.parcel_count(FocalPointKind::Roads),
            district_parcels = collection.parcel_count(FocalPointKind::Districts),
            "Saved focal points"
        );

        self.loaded = OnceCell::from(collection);
        Ok(())
    }

    /// Take ownership of the collection, reading the file if not yet loaded.
    pub fn into_collection(self) -> Result<FocalPointCollection, StoreError> {
        match self.loaded.into_inner() {
            Some(collection) => Ok(collection),
            None => read_collection(&self.path),
        }
    }
}

fn read_collection(path: &Path) -> Result<FocalPointCollection, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let collection: FocalPointCollection = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        plazas = collection.plazas().len(),
        roads = collection.roads().len(),
        districts = collection.districts().len(),
        "Loaded focal points"
    );
    Ok(collection)
}

fn write_collection(path: &Path, collection: &FocalPointCollection) -> Result<(), StoreError> {
    let write_err = |source: std::io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    // Write to temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");
    let file = File::create(&temp_path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, collection).map_err(StoreError::Serialize)?;
    writer.flush().map_err(write_err)?;
    drop(writer);

    std::fs::rename(&temp_path, path).map_err(write_err)?;
    Ok(())
}
