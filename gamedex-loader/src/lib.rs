//! File loading for game catalogs.
//!
//! Reads records from JSON or YAML files into `gamedex-core` types. The core
//! crate knows nothing about files; this crate is the only place that does.

use std::path::Path;

use gamedex_core::{Catalog, VideoGame};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Unsupported file format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),
    #[error("Directory not found: {0}")]
    DirNotFound(String),
    #[error("Games data not found: {0}")]
    NotFound(String),
}

/// Serialization formats a games file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick the format from a file extension, if it is one we read.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a JSON array of games.
pub fn parse_games_json(contents: &str) -> Result<Vec<VideoGame>, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Parse a YAML sequence of games.
pub fn parse_games_yaml(contents: &str) -> Result<Vec<VideoGame>, serde_yml::Error> {
    serde_yml::from_str(contents)
}

/// Load every game from a single `.json`, `.yaml` or `.yml` file.
pub fn load_games(path: &Path) -> Result<Vec<VideoGame>, LoadError> {
    let format = Format::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.display().to_string()))?;

    let contents = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let games = match format {
        Format::Json => parse_games_json(&contents).map_err(|e| LoadError::Json {
            path: path.display().to_string(),
            source: e,
        })?,
        Format::Yaml => parse_games_yaml(&contents).map_err(|e| LoadError::Yaml {
            path: path.display().to_string(),
            source: e,
        })?,
    };

    log::debug!("Loaded {} game(s) from {}", games.len(), path.display());
    Ok(games)
}

/// Load all games files in a directory, in file-name order.
///
/// Files with other extensions are skipped. A directory that does not exist
/// yields no games.
pub fn load_games_dir(dir: &Path) -> Result<Vec<VideoGame>, LoadError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(LoadError::DirNotFound(dir.display().to_string()));
    }

    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| LoadError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && Format::from_path(&e.path()).is_some())
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut games = Vec::new();
    for entry in entries {
        games.extend(load_games(&entry.path())?);
    }
    Ok(games)
}

/// Build a catalog from a games file or a directory of games files.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }
    let games = if path.is_dir() {
        load_games_dir(path)?
    } else {
        load_games(path)?
    };
    let mut catalog = Catalog::new();
    catalog.add(games);
    Ok(catalog)
}
