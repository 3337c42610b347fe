//! Engine configuration from the environment.

use std::path::PathBuf;

use crate::infrastructure::ports::storage_keys;
use crate::infrastructure::storage::default_storage_path;

pub const STORAGE_PATH_VAR: &str = "COSMERE_STORAGE_PATH";
pub const STORAGE_KEY_VAR: &str = "COSMERE_STORAGE_KEY";
pub const EXPORT_DIR_VAR: &str = "COSMERE_EXPORT_DIR";

const DEFAULT_EXPORT_DIR: &str = "./export";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// JSON file backing the storage provider
    pub storage_path: PathBuf,
    /// Key the character envelope is stored under
    pub storage_key: String,
    /// Directory export files are written to
    pub export_dir: PathBuf,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            storage_path: var(STORAGE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_storage_path),
            storage_key: var(STORAGE_KEY_VAR).unwrap_or_else(|| storage_keys::CHARACTER.into()),
            export_dir: PathBuf::from(var(EXPORT_DIR_VAR).unwrap_or_else(|| DEFAULT_EXPORT_DIR.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config(&[]);
        assert_eq!(config.storage_key, "ccg-character");
        assert_eq!(config.export_dir, PathBuf::from("./export"));
        assert_eq!(config.storage_path, default_storage_path());
    }

    #[test]
    fn variables_override_defaults() {
        let config = config(&[
            (STORAGE_PATH_VAR, "/tmp/cosmere/storage.json"),
            (STORAGE_KEY_VAR, "hero"),
            (EXPORT_DIR_VAR, "out"),
        ]);
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cosmere/storage.json"));
        assert_eq!(config.storage_key, "hero");
        assert_eq!(config.export_dir, PathBuf::from("out"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = config(&[(STORAGE_KEY_VAR, "   ")]);
        assert_eq!(config.storage_key, "ccg-character");
    }
}
