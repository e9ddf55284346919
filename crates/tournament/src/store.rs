//! JSON file store for players and tournaments

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use swiss_core::{EngineError, PlayerRegistry, Snapshot, Tournament};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("inconsistent data in {}: {source}", .path.display())]
    Inconsistent {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

/// Players and tournaments loaded from a store
#[derive(Debug, Clone, Default)]
pub struct Database {
    pub registry: PlayerRegistry,
    pub tournaments: Vec<Tournament>,
}

/// A JSON snapshot file on disk
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; a missing file is an empty one
    pub fn load_snapshot(&self) -> Result<Snapshot, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store yet, starting empty");
                return Ok(Snapshot::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load and rebuild players and tournaments
    pub fn load(&self) -> Result<Database, StoreError> {
        let (registry, tournaments) =
            self.load_snapshot()?
                .restore()
                .map_err(|source| StoreError::Inconsistent {
                    path: self.path.clone(),
                    source,
                })?;
        debug!(
            players = registry.len(),
            tournaments = tournaments.len(),
            "store loaded"
        );
        Ok(Database {
            registry,
            tournaments,
        })
    }

    /// Write every player and tournament, replacing the previous file
    pub fn save(&self, registry: &PlayerRegistry, tournaments: &[Tournament]) -> Result<(), StoreError> {
        let snapshot = Snapshot::capture(registry, tournaments);
        let json = serde_json::to_string_pretty(&snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        // Write next to the target, then rename over it
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, json).map_err(|source| self.io_error(source))?;
        std::fs::rename(&staging, &self.path).map_err(|source| self.io_error(source))?;
        debug!(path = %self.path.display(), "store saved");
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
