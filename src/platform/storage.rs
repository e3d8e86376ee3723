use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::AdvisorError;

const STORE_FILE: &str = "store.json";

/// Local key-value storage, the only persistence the advisor uses.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdvisorError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AdvisorError>;
    fn remove(&mut self, key: &str) -> Result<(), AdvisorError>;
}

/// In-process store, lost on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdvisorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AdvisorError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), AdvisorError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object file, rewritten on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) the store in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, AdvisorError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(STORE_FILE);

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| {
                AdvisorError::Storage(format!("corrupt store file {}: {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "opened store");
        Ok(Self { path, entries })
    }

    /// Platform data directory for the advisor, if the home directory is known.
    pub fn default_location() -> Option<PathBuf> {
        ProjectDirs::from("in", "KrishiAI", "crop-advisor").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the entries to a sibling temp file and rename it over the store,
    /// so an interrupted write never leaves a truncated `store.json`.
    fn flush(&self) -> Result<(), AdvisorError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &self.entries)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            AdvisorError::Storage(format!("failed to replace {}: {}", self.path.display(), e.error))
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AdvisorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AdvisorError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), AdvisorError> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
        assert_eq!(store.len(), 1);
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("krishiai_lang", "hi").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("krishiai_lang").unwrap().as_deref(), Some("hi"));
        assert!(store.path().ends_with("store.json"));
    }

    #[test]
    fn test_file_store_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open(&nested).unwrap();
        store.set("x", "1").unwrap();
        assert!(nested.join("store.json").exists());
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("x", "1").unwrap();
        store.remove("x").unwrap();
        store.remove("never-set").unwrap();
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("x").unwrap(), None);
    }

    #[test]
    fn test_file_store_replaces_file_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("krishiai_lang", "en").unwrap();
        store.set("krishiai_lang", "hi").unwrap();
        store.set("krishiai_state", "{}").unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("store.json")]);

        let content = std::fs::read_to_string(dir.path().join("store.json")).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.get("krishiai_lang").map(String::as_str), Some("hi"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("store.json"), "{not json").unwrap();
        let err = FileStore::open(dir.path()).unwrap_err();
        assert!(matches!(err, AdvisorError::Storage(_)));
    }
}
