use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::collaborators::LocalStorage;
use crate::error::Result;

const STORAGE_FILE: &str = "local_storage.yaml";

/// Key/value store persisted as a YAML map, written through on every set
pub struct FileStorage {
    items: Mutex<BTreeMap<String, String>>,
    path: PathBuf,
}

impl FileStorage {
    /// Open the store under `dir`, loading any previously saved items
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(STORAGE_FILE);
        let items = match Self::load(&path) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable local storage");
                BTreeMap::new()
            }
        };

        FileStorage {
            items: Mutex::new(items),
            path,
        }
    }

    fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Ensure the storage directory exists
    fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    // A poisoned lock still holds a usable map
    fn items(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.items.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get_item(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalStorage for FileStorage {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items();
        let mut next = items.clone();
        next.insert(key.to_string(), value.to_string());

        // Memory only moves once the file holds the same map
        self.ensure_dir()?;
        fs::write(&self.path, serde_yaml::to_string(&next)?)?;
        *items = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn test_set_item_survives_reopen() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path());
        storage.set_item("theme", "midnight").unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("midnight"));

        let reopened = FileStorage::open(dir.path());
        assert_eq!(reopened.get_item("theme").as_deref(), Some("midnight"));
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let storage = FileStorage::open(&nested);
        storage.set_item("theme", "dark").unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "- not\n- a map\n").unwrap();
        let storage = FileStorage::open(dir.path());
        assert_eq!(storage.get_item("theme"), None);
        storage.set_item("theme", "light").unwrap();
        assert_eq!(FileStorage::open(dir.path()).get_item("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::open(dir.path());
        storage.set_item("theme", "light").unwrap();

        // A directory in place of the file makes the next write fail
        fs::remove_file(storage.path()).unwrap();
        fs::create_dir(storage.path()).unwrap();

        assert!(storage.set_item("theme", "dark").is_err());
        assert_eq!(storage.get_item("theme").as_deref(), Some("light"));
    }

    #[test]
    fn test_poisoned_lock_still_reads_and_writes() {
        let dir = tempdir().unwrap();
        let storage = Arc::new(FileStorage::open(dir.path()));
        storage.set_item("theme", "forest").unwrap();

        let held = Arc::clone(&storage);
        let _ = std::thread::spawn(move || {
            let _guard = held.items.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(storage.items.is_poisoned());

        assert_eq!(storage.get_item("theme").as_deref(), Some("forest"));
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
    }
}
