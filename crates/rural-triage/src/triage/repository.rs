use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use super::domain::VisitRecord;

/// Durable medium holding the visit collection as one consistent document.
///
/// Implementations rewrite the whole collection on every `save`; there is no
/// incremental log.
pub trait VisitStorage: Send + Sync {
    /// Read the full collection. A medium that was never written yields an
    /// empty collection.
    fn load(&self) -> Result<Vec<VisitRecord>, StorageError>;
    /// Replace the stored collection with `records`.
    fn save(&self, records: &[VisitRecord]) -> Result<(), StorageError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to access visit document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("visit document is not valid: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Visit document stored as a pretty-printed JSON array on the filesystem.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "visits.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl VisitStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<VisitRecord>, StorageError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "visit document not found, starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let records: Vec<VisitRecord> = serde_json::from_slice(&raw)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded visit document");
        Ok(records)
    }

    fn save(&self, records: &[VisitRecord]) -> Result<(), StorageError> {
        let document = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, document).map_err(|err| self.io_error(err))?;
        fs::rename(&staging, &self.path).map_err(|err| {
            let _ = fs::remove_file(&staging);
            self.io_error(err)
        })?;
        Ok(())
    }
}

/// Volatile backend keeping the serialized document in memory, so tests
/// exercise the same document format as the file backend.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    document: Mutex<Option<String>>,
}

impl InMemoryStorage {
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    /// The last document written, if any.
    pub fn document(&self) -> Option<String> {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl VisitStorage for InMemoryStorage {
    fn load(&self) -> Result<Vec<VisitRecord>, StorageError> {
        let guard = self.document.lock().unwrap_or_else(PoisonError::into_inner);
        match guard.as_deref() {
            Some(document) => Ok(serde_json::from_str(document)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, records: &[VisitRecord]) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(records)?;
        *self.document.lock().unwrap_or_else(PoisonError::into_inner) = Some(document);
        Ok(())
    }
}
