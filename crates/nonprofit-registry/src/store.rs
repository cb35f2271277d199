//! Key-value persistence for organization records
//!
//! A [`RecordStore`] is a string-keyed, string-valued store in the manner
//! of browser local storage. The directory is persisted as a JSON array of
//! organizations under a single key and rebuilt by appending in array order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::directory::OrganizationDirectory;
use crate::error::{RegistryError, Result};
use crate::organization::Organization;

/// String key-value storage.
///
/// Methods take `&self`: like browser storage, a store is a shared handle
/// and implementations synchronize internally.
pub trait RecordStore {
    /// Read the value under `key`, or `None` if nothing is stored.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        (**self).remove_item(key)
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(RegistryError::InvalidKey(key.to_string()));
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// In-memory store
// ═══════════════════════════════════════════════════════════════════════

/// Process-local store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        Ok(self.items.get(key).map(|entry| entry.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        check_key(key)?;
        self.items.remove(key);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// File store
// ═══════════════════════════════════════════════════════════════════════

/// Store keeping each key in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use `root` as the storage directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| RegistryError::io(&root, e))?;
        Ok(Self { root })
    }

    /// The storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`. Keys must be plain file names.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        check_key(key)?;
        let plain = key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !plain || key.starts_with('.') {
            return Err(RegistryError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl RecordStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RegistryError::io(path, e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        // Write then rename so readers never observe a partial payload.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value).map_err(|e| RegistryError::io(&staging, e))?;
        fs::rename(&staging, &path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            RegistryError::io(&path, e)
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RegistryError::io(path, e)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Directory persistence
// ═══════════════════════════════════════════════════════════════════════

/// Rebuild a directory from the JSON array stored under `key`.
///
/// A missing key yields an empty directory. A payload that is not a JSON
/// array is an error; callers decide whether to fall back. Entries that are
/// not objects are logged and skipped so the rest of the array still loads.
pub fn load_directory<S: RecordStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<OrganizationDirectory> {
    let Some(payload) = store.get_item(key)? else {
        debug!(key, "no stored organizations");
        return Ok(OrganizationDirectory::new());
    };

    let entries: Vec<Value> = serde_json::from_str(&payload)?;
    let total = entries.len();
    let directory: OrganizationDirectory = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, entry)| match serde_json::from_value::<Organization>(entry) {
                Ok(organization) => Some(organization),
                Err(e) => {
                    warn!(key, index, error = %e, "skipping unreadable organization");
                    None
                }
            },
        )
        .collect();

    debug!(key, count = directory.len(), total, "loaded organizations");
    Ok(directory)
}

/// Flatten `directory` to a JSON array and store it under `key`.
pub fn save_directory<S: RecordStore + ?Sized>(
    store: &S,
    key: &str,
    directory: &OrganizationDirectory,
) -> Result<()> {
    let organizations: Vec<&Organization> = directory.iter().collect();
    let payload = serde_json::to_string(&organizations)?;
    store.set_item(key, &payload)?;
    debug!(key, count = organizations.len(), "saved organizations");
    Ok(())
}
