//! Persistent key/value storage port.

/// Persistent storage abstraction (file-based, browser storage, ...)
///
/// Writes are fire-and-forget: adapters log their own failures and the
/// caller carries on with the in-memory state.
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
pub mod storage_keys {
    /// Key holding the persisted character envelope.
    pub const CHARACTER: &str = "ccg-character";
}
