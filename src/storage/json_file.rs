//! Single-file JSON key/value cache with an in-memory copy.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, warn};

use super::traits::KvStore;
use crate::error::{MicroDsiError, Result};

/// Name of the cache file inside the data directory
pub const CACHE_FILE: &str = "cache.json";

/// Key/value cache persisted as one JSON object on disk.
///
/// The file is read once on open and rewritten on every `set`. A corrupt file
/// is treated as an empty cache and replaced on the next write.
pub struct JsonFileStore {
    path: PathBuf,
    cache: RwLock<BTreeMap<String, String>>,
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore").field("path", &self.path).finish_non_exhaustive()
    }
}

impl JsonFileStore {
    /// Open the cache in `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(CACHE_FILE);
        let entries = Self::read_entries(&path)?;
        debug!("Opened cache {} with {} keys", path.display(), entries.len());
        Ok(Self {
            path,
            cache: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Cache file {} is malformed, starting empty: {}", path.display(), e);
                Ok(BTreeMap::new())
            }
        }
    }

    fn rewrite_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let cache = self.cache.read().map_err(|e| MicroDsiError::Store(e.to_string()))?;
        Ok(cache.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cache = self.cache.write().map_err(|e| MicroDsiError::Store(e.to_string()))?;
        cache.insert(key.to_string(), value.to_string());
        self.rewrite_file(&cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.get("microdsi_track").unwrap().is_none());
        store.set("microdsi_track", "hr").unwrap();
        assert_eq!(store.get("microdsi_track").unwrap().as_deref(), Some("hr"));
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let store = JsonFileStore::open(dir.path()).unwrap();
            store.set("microdsi_track", "proc").unwrap();
            store.set("microdsi_answers", r#"["a"]"#).unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("microdsi_track").unwrap().as_deref(), Some("proc"));
        assert_eq!(store.get("microdsi_answers").unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CACHE_FILE), "{ not json").unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.get("microdsi_track").unwrap().is_none());

        store.set("microdsi_track", "itsm").unwrap();
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("microdsi_track").unwrap().as_deref(), Some("itsm"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = JsonFileStore::open(&nested).unwrap();
        store.set("k", "v").unwrap();
        assert!(nested.join(CACHE_FILE).exists());
        assert_eq!(store.path(), nested.join(CACHE_FILE));
    }
}
