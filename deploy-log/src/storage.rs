//! Storage backends for deploy log documents
//!
//! The store is written against the [`LogStorage`] trait so that scripts run
//! over the filesystem while tests run over an in-memory map.

use std::{
    collections::HashMap,
    fs,
    io::ErrorKind,
    path::PathBuf,
    sync::Mutex,
};

use crate::errors::LogStoreError;

/// The file extension of on-disk deploy log documents
const LOG_FILE_EXTENSION: &str = "json";

/// Backend storage for deploy log documents, addressed by resolved log name
pub trait LogStorage {
    /// Reads the raw document stored under `name`, `None` when no document
    /// exists yet
    fn read(&self, name: &str) -> Result<Option<String>, LogStoreError>;

    /// Writes the raw document under `name`, creating it when absent and
    /// overwriting it otherwise
    fn write(&self, name: &str, contents: &str) -> Result<(), LogStoreError>;
}

/// Filesystem-backed storage: one JSON file per resolved log name under a
/// deploy-logs directory
pub struct FsStorage {
    /// The directory holding the log files
    dir: PathBuf,
}

impl FsStorage {
    /// Constructs storage rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The on-disk path of the document stored under `name`
    pub fn log_path(&self, name: &str) -> PathBuf {
        self.dir.join(name).with_extension(LOG_FILE_EXTENSION)
    }
}

impl LogStorage for FsStorage {
    fn read(&self, name: &str) -> Result<Option<String>, LogStoreError> {
        match fs::read_to_string(self.log_path(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(LogStoreError::Read(e.to_string())),
        }
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), LogStoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| LogStoreError::Write(e.to_string()))?;
        fs::write(self.log_path(name), contents)
            .map_err(|e| LogStoreError::Write(e.to_string()))
    }
}

/// In-memory storage, used to back the store in tests
#[derive(Default)]
pub struct MemStorage {
    /// Documents by resolved log name
    docs: Mutex<HashMap<String, String>>,
}

impl MemStorage {
    /// Constructs empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStorage for MemStorage {
    fn read(&self, name: &str) -> Result<Option<String>, LogStoreError> {
        // The lock is never poisoned: holders perform no panicking operations
        Ok(self.docs.lock().unwrap().get(name).cloned())
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), LogStoreError> {
        self.docs
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{FsStorage, LogStorage};

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path());
        assert_eq!(storage.read("deploy_zklink").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path().join("deploy-logs"));
        storage.write("deploy_arbitrator_ETHEREUM", "{}").unwrap();

        assert!(storage.log_path("deploy_arbitrator_ETHEREUM").is_file());
        assert_eq!(
            storage.read("deploy_arbitrator_ETHEREUM").unwrap(),
            Some("{}".to_string())
        );
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let storage = FsStorage::new(dir.path());
        storage.write("deploy_zklink", "{}").unwrap();
        storage.write("deploy_zklink", "{\"a\":\"b\"}").unwrap();
        assert_eq!(
            storage.read("deploy_zklink").unwrap(),
            Some("{\"a\":\"b\"}".to_string())
        );
    }
}
