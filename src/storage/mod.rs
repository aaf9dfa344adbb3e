use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{app_state_path, state_env_dirs, ConfigPathError, APP_DIR};

mod sink;

pub use sink::PersistenceSink;

const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read storage file: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write storage file: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse storage file")]
    Parse(#[from] serde_json::Error),
    #[error("storage is unavailable")]
    Unavailable,
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Client-side key-value storage that survives reloads.
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// Keys kept as a flat JSON object in one file. Values written here are
/// strings; values of other types written by someone else are left intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$XDG_STATE_HOME/folio/storage.json`, falling back to `~/.local/state`.
    pub fn with_default_path() -> StorageResult<Self> {
        let (xdg_state_home, home) = state_env_dirs();
        Self::with_default_path_in(xdg_state_home.as_deref(), home.as_deref())
    }

    fn with_default_path_in(
        xdg_state_home: Option<&Path>,
        home: Option<&Path>,
    ) -> StorageResult<Self> {
        app_state_path(APP_DIR, STORAGE_FILE, xdg_state_home, home)
            .map(Self::with_path)
            .map_err(|error| match error {
                ConfigPathError::MissingHomeDirectory => StorageError::MissingHomeDirectory,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> StorageResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let serialized = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(serde_json::from_str(&serialized)?)
    }
}

impl PreferenceStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key).map(|value| match value {
            Value::String(raw) => raw,
            other => other.to_string(),
        }))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        // Unrelated keys survive; a corrupt file is replaced.
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(?err, path = %self.path.display(), "discarding unreadable storage file");
            Map::new()
        });
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let serialized = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, serialized).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-process storage; lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.insert(key, value);
        Ok(())
    }
}

/// Storage that refuses every access, like a browser in privacy mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorage;

impl PreferenceStorage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{PreferenceStorage, StorageError, StorageResult};

    /// Memory storage that logs every write and can be told to fail.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct RecordingStorage {
        pub(crate) value: Rc<RefCell<Option<String>>>,
        pub(crate) writes: Rc<RefCell<Vec<String>>>,
        pub(crate) fail_writes: bool,
    }

    impl RecordingStorage {
        pub(crate) fn holding(value: &str) -> Self {
            let storage = Self::default();
            *storage.value.borrow_mut() = Some(value.to_string());
            storage
        }

        pub(crate) fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }
    }

    impl PreferenceStorage for RecordingStorage {
        fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(self.value.borrow().clone())
        }

        fn set_item(&mut self, _key: &str, value: &str) -> StorageResult<()> {
            if self.fail_writes {
                return Err(StorageError::Unavailable);
            }
            *self.value.borrow_mut() = Some(value.to_string());
            self.writes.borrow_mut().push(value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("folio-storage-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn default_path_prefers_xdg_state_home() {
        let storage =
            FileStorage::with_default_path_in(Some(Path::new("/tmp/state")), None).unwrap();
        assert_eq!(storage.path(), Path::new("/tmp/state/folio/storage.json"));
    }

    #[test]
    fn default_path_errors_without_home() {
        let err = FileStorage::with_default_path_in(None, None).unwrap_err();
        assert!(matches!(err, StorageError::MissingHomeDirectory));
    }

    #[test]
    fn file_storage_missing_file_reads_as_empty() {
        with_temp_root(|root| {
            let storage = FileStorage::with_path(root.join("storage.json"));
            assert!(storage.get_item("theme").unwrap().is_none());
        });
    }

    #[test]
    fn file_storage_creates_parent_and_keeps_other_keys() {
        with_temp_root(|root| {
            let path = root.join("nested").join("storage.json");
            let mut storage = FileStorage::with_path(&path);
            storage.set_item("visits", "3").unwrap();
            storage.set_item("theme", "dark").unwrap();
            storage.set_item("theme", "light").unwrap();

            let reopened = FileStorage::with_path(&path);
            assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("light"));
            assert_eq!(reopened.get_item("visits").unwrap().as_deref(), Some("3"));
        });
    }

    #[test]
    fn file_storage_keeps_non_string_values_of_other_keys() {
        with_temp_root(|root| {
            let path = root.join("storage.json");
            fs::write(&path, r#"{ "visits": 3, "flags": { "beta": true } }"#).unwrap();
            let mut storage = FileStorage::with_path(&path);

            storage.set_item("theme", "dark").unwrap();

            let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(raw["visits"], Value::from(3));
            assert_eq!(raw["flags"]["beta"], Value::Bool(true));
            assert_eq!(raw["theme"], Value::from("dark"));
            assert_eq!(storage.get_item("visits").unwrap().as_deref(), Some("3"));
            assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
        });
    }

    #[test]
    fn file_storage_reports_corrupt_file_and_recovers_on_write() {
        with_temp_root(|root| {
            let path = root.join("storage.json");
            fs::write(&path, "{ invalid ").unwrap();
            let mut storage = FileStorage::with_path(&path);

            assert!(matches!(
                storage.get_item("theme"),
                Err(StorageError::Parse(_))
            ));
            storage.set_item("theme", "dark").unwrap();
            assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
        });
    }

    #[test]
    fn unavailable_storage_fails_both_ways() {
        let mut storage = UnavailableStorage;
        assert!(storage.get_item("theme").is_err());
        assert!(storage.set_item("theme", "dark").is_err());
    }
}
