//! Storage provider implementations.

use crate::infrastructure::ports::StorageProvider;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Platform storage file location.
///
/// - Linux: ~/.config/cosmere-character-creator/storage.json
/// - macOS: ~/Library/Application Support/io.cosmere.cosmere-character-creator/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\cosmere\cosmere-character-creator\config\storage.json
pub fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("io", "cosmere", "cosmere-character-creator") {
        Some(dirs) => dirs.config_dir().join("storage.json"),
        None => PathBuf::from("cosmere_storage.json"),
    }
}

type Entries = HashMap<String, String>;

#[derive(Debug, Error)]
enum StorageFileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid storage JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage cache lock poisoned")]
    Poisoned,
}

/// File storage provider
///
/// Keeps every key in one JSON object on disk and mirrors it in memory.
/// The whole file is rewritten after each save or effective remove.
#[derive(Clone)]
pub struct FileStorageProvider {
    storage_path: PathBuf,
    cache: Arc<RwLock<Entries>>,
}

impl FileStorageProvider {
    /// Open the storage file, loading existing data if present.
    ///
    /// An unreadable or corrupt file starts an empty cache; it is overwritten
    /// on the next save.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let entries = read_entries(&storage_path).unwrap_or_else(|error| {
            tracing::warn!(path = %storage_path.display(), %error, "Ignoring unreadable storage file");
            Entries::new()
        });

        tracing::debug!(path = %storage_path.display(), keys = entries.len(), "File storage opened");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Run `edit` against the cache and rewrite the file if it reports a change.
    fn update(&self, edit: impl FnOnce(&mut Entries) -> bool) {
        if let Err(error) = self.try_update(edit) {
            tracing::error!(path = %self.storage_path.display(), %error, "Storage write failed");
        }
    }

    fn try_update(&self, edit: impl FnOnce(&mut Entries) -> bool) -> Result<(), StorageFileError> {
        let mut entries = self.cache.write().map_err(|_| StorageFileError::Poisoned)?;
        if edit(&mut *entries) {
            write_entries(&self.storage_path, &*entries)?;
        }
        Ok(())
    }
}

fn read_entries(path: &Path) -> Result<Entries, StorageFileError> {
    if !path.exists() {
        return Ok(Entries::new());
    }
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn write_entries(path: &Path, entries: &Entries) -> Result<(), StorageFileError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(entries)?)?;
    Ok(())
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        });
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(_) => {
                tracing::error!(key, "Storage cache lock poisoned");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        self.update(|entries| entries.remove(key).is_some());
    }
}

/// In-memory storage provider for tests and throwaway sessions.
#[derive(Clone, Default)]
pub struct MemoryStorageProvider {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageProvider for MemoryStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.values.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.read().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.values.write() {
            guard.remove(key);
        }
    }
}
