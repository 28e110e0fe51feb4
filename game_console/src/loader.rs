//! Map loader - reads the JSON map from disk.

use game_rules::{GameMap, MapError};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a map file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot open map {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot load map {}: {source}", .path.display())]
    Map { path: PathBuf, source: MapError },
}

/// Load and parse a map file.
pub fn load_map(path: impl AsRef<Path>) -> Result<GameMap, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let map = GameMap::from_reader(BufReader::new(file)).map_err(|source| LoadError::Map {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        locations = map.location_count(),
        "Map loaded"
    );
    Ok(map)
}
