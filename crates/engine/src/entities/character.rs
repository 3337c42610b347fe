//! Character store operations.

use std::fmt::Debug;
use std::sync::Arc;

use cosmere_domain::{
    Ancestry, CharacterRecord, DerivedSheet, Expertise, ExpertiseToggle, LineageOutcome,
    MutationOutcome, Path, PathFocus, RecordChange, Skill, SkillChange, Stat, StatAdjustment,
    StatChange,
};

use crate::infrastructure::persistence;
use crate::infrastructure::ports::StorageProvider;

/// Owns the character under construction and persists it after every change.
///
/// Mutators mirror [`CharacterRecord`]'s and return its outcomes. A storage
/// write happens only when the outcome reports a change.
pub struct CharacterStore {
    storage: Arc<dyn StorageProvider>,
    key: String,
    record: CharacterRecord,
}

impl CharacterStore {
    /// Load the record stored under `key`, or start blank.
    ///
    /// Unreadable, corrupt, or newer-schema blobs are logged and replaced by
    /// a blank record. Older blobs are migrated and written back.
    pub fn open(storage: Arc<dyn StorageProvider>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut store = Self {
            storage,
            key,
            record: CharacterRecord::new(),
        };

        let Some(raw) = store.storage.load(&store.key) else {
            tracing::info!(key = %store.key, "No saved character, starting blank");
            return store;
        };

        match persistence::decode(&raw) {
            Ok(rehydrated) => {
                tracing::info!(
                    key = %store.key,
                    version = rehydrated.stored_version,
                    "Loaded saved character"
                );
                let upgrade = rehydrated.needs_upgrade();
                store.record = rehydrated.record;
                if upgrade {
                    store.persist();
                }
            }
            Err(e) => {
                tracing::warn!(key = %store.key, error = %e, "Discarding saved character");
            }
        }
        store
    }

    pub fn record(&self) -> &CharacterRecord {
        &self.record
    }

    pub fn derived(&self) -> DerivedSheet {
        DerivedSheet::from_record(&self.record)
    }

    // =========================================================================
    // Basics
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> RecordChange {
        let outcome = self.record.set_name(name);
        self.commit("set_name", outcome)
    }

    pub fn set_level(&mut self, raw: i64) -> RecordChange {
        let outcome = self.record.set_level(raw);
        self.commit("set_level", outcome)
    }

    pub fn set_ancestry(&mut self, ancestry: Ancestry) -> LineageOutcome {
        let outcome = self.record.set_ancestry(ancestry);
        self.commit("set_ancestry", outcome)
    }

    pub fn set_path(&mut self, path: Path) -> LineageOutcome {
        let outcome = self.record.set_path(path);
        self.commit("set_path", outcome)
    }

    pub fn set_path_focus(&mut self, focus: PathFocus) -> LineageOutcome {
        let outcome = self.record.set_path_focus(focus);
        self.commit("set_path_focus", outcome)
    }

    pub fn set_selected_path_talent(&mut self, talent: impl Into<String>) -> LineageOutcome {
        let outcome = self.record.set_selected_path_talent(talent);
        self.commit("set_selected_path_talent", outcome)
    }

    // =========================================================================
    // Stats
    // =========================================================================

    pub fn set_stat(&mut self, stat: Stat, raw: i64) -> StatChange {
        let outcome = self.record.set_stat(stat, raw);
        self.commit("set_stat", outcome)
    }

    pub fn adjust_stat(&mut self, stat: Stat, adjustment: StatAdjustment) -> StatChange {
        let outcome = self.record.adjust_stat(stat, adjustment);
        self.commit("adjust_stat", outcome)
    }

    pub fn reset_stats(&mut self) -> RecordChange {
        let outcome = self.record.reset_stats();
        self.commit("reset_stats", outcome)
    }

    // =========================================================================
    // Expertises
    // =========================================================================

    pub fn toggle_cultural(&mut self, expertise: Expertise) -> ExpertiseToggle {
        let outcome = self.record.toggle_cultural(expertise);
        self.commit("toggle_cultural", outcome)
    }

    pub fn toggle_general(&mut self, expertise: Expertise) -> ExpertiseToggle {
        let outcome = self.record.toggle_general(expertise);
        self.commit("toggle_general", outcome)
    }

    pub fn clear_expertises(&mut self) -> RecordChange {
        let outcome = self.record.clear_expertises();
        self.commit("clear_expertises", outcome)
    }

    // =========================================================================
    // Skills
    // =========================================================================

    pub fn set_skill_rank(&mut self, skill: Skill, raw: i64) -> SkillChange {
        let outcome = self.record.set_skill_rank(skill, raw);
        self.commit("set_skill_rank", outcome)
    }

    pub fn reset_skills(&mut self) -> RecordChange {
        let outcome = self.record.reset_skills();
        self.commit("reset_skills", outcome)
    }

    // =========================================================================
    // Whole record
    // =========================================================================

    /// Back to a blank record, persisted as such.
    pub fn reset(&mut self) -> RecordChange {
        let outcome = self.record.reset();
        self.commit("reset", outcome)
    }

    /// Drop the stored blob and the in-memory record.
    ///
    /// Nothing is written until the next change.
    pub fn clear_storage(&mut self) {
        self.storage.remove(&self.key);
        self.record = CharacterRecord::new();
        tracing::info!(key = %self.key, "Cleared saved character");
    }

    fn commit<O: MutationOutcome + Debug>(&self, operation: &'static str, outcome: O) -> O {
        if outcome.is_changed() {
            tracing::debug!(operation, ?outcome, "Character updated");
            self.persist();
        } else {
            tracing::debug!(operation, ?outcome, "Character unchanged");
        }
        outcome
    }

    fn persist(&self) {
        match persistence::encode(&self.record) {
            Ok(blob) => self.storage.save(&self.key, &blob),
            Err(e) => tracing::error!(key = %self.key, error = %e, "Failed to encode character"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::CURRENT_SCHEMA_VERSION;
    use crate::infrastructure::ports::{storage_keys, MockStorageProvider};
    use crate::infrastructure::storage::MemoryStorageProvider;
    use serde_json::{json, Value};

    const KEY: &str = storage_keys::CHARACTER;

    fn memory_store() -> (CharacterStore, MemoryStorageProvider) {
        let storage = MemoryStorageProvider::new();
        let store = CharacterStore::open(Arc::new(storage.clone()), KEY);
        (store, storage)
    }

    fn stored(storage: &MemoryStorageProvider) -> Value {
        serde_json::from_str(&storage.load(KEY).unwrap()).unwrap()
    }

    mod persistence_on_change {
        use super::*;

        #[test]
        fn changed_mutation_saves_once() {
            let mut storage = MockStorageProvider::new();
            storage.expect_load().returning(|_| None);
            storage
                .expect_save()
                .withf(|key, value| key == KEY && value.contains("\"Dalinar\""))
                .times(1)
                .return_const(());

            let mut store = CharacterStore::open(Arc::new(storage), KEY);
            assert_eq!(store.set_name("Dalinar"), RecordChange::Changed);
        }

        #[test]
        fn rejected_or_unchanged_mutations_do_not_save() {
            let mut storage = MockStorageProvider::new();
            storage.expect_load().returning(|_| None);
            storage.expect_save().times(0);

            let mut store = CharacterStore::open(Arc::new(storage), KEY);
            store.toggle_general(Expertise::Axe);
            store.set_path_focus(PathFocus::Spy);
            store.set_level(1);
            store.adjust_stat(Stat::Pre, StatAdjustment::Decrement);
            store.reset_skills();
        }

        #[test]
        fn saved_state_tracks_record() {
            let (mut store, storage) = memory_store();
            store.set_path(Path::Envoy);
            store.set_path_focus(PathFocus::Mentor);
            store.set_stat(Stat::Pre, 3);

            let blob = stored(&storage);
            assert_eq!(blob["version"], CURRENT_SCHEMA_VERSION);
            assert_eq!(blob["state"]["path"], "Envoy");
            assert_eq!(blob["state"]["pathFocus"], "Mentor");
            assert_eq!(blob["state"]["stats"]["PRE"], 3);
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn reopening_restores_record() {
            let (mut store, storage) = memory_store();
            store.set_name("Navani");
            store.set_level(12);
            store.set_stat(Stat::Int, 3);
            store.toggle_cultural(Expertise::Alethi);
            store.toggle_cultural(Expertise::Kharbranthian);
            store.toggle_general(Expertise::Engineering);

            let reopened = CharacterStore::open(Arc::new(storage), KEY);
            assert_eq!(reopened.record(), store.record());
        }

        #[test]
        fn old_blob_is_migrated_and_written_back() {
            let storage = MemoryStorageProvider::new();
            storage.save(
                KEY,
                &json!({"state": {"name": "Gaz", "path": "Warrior"}, "version": 3}).to_string(),
            );

            let store = CharacterStore::open(Arc::new(storage.clone()), KEY);
            assert_eq!(store.record().name(), "Gaz");
            assert_eq!(store.record().path(), Some(Path::Warrior));

            let blob = stored(&storage);
            assert_eq!(blob["version"], 8);
            assert_eq!(blob["state"]["skillPointsTotal"], 4);
        }

        #[test]
        fn newer_blob_falls_back_to_defaults() {
            let storage = MemoryStorageProvider::new();
            storage.save(KEY, &json!({"state": {"name": "Future"}, "version": 42}).to_string());

            let store = CharacterStore::open(Arc::new(storage), KEY);
            assert_eq!(store.record(), &CharacterRecord::new());
        }

        #[test]
        fn corrupt_blob_falls_back_to_defaults() {
            let mut storage = MockStorageProvider::new();
            storage
                .expect_load()
                .returning(|_| Some("{{{".to_string()));
            storage.expect_save().times(0);

            let store = CharacterStore::open(Arc::new(storage), KEY);
            assert_eq!(store.record(), &CharacterRecord::new());
        }
    }

    mod whole_record {
        use super::*;

        #[test]
        fn reset_persists_blank_record() {
            let (mut store, storage) = memory_store();
            store.set_name("Moash");
            assert_eq!(store.reset(), RecordChange::Changed);
            assert_eq!(stored(&storage)["state"]["name"], "");
        }

        #[test]
        fn clear_storage_removes_blob() {
            let (mut store, storage) = memory_store();
            store.set_name("Sadeas");
            store.clear_storage();

            assert_eq!(storage.load(KEY), None);
            assert_eq!(store.record(), &CharacterRecord::new());
        }

        #[test]
        fn derived_reflects_current_record() {
            let (mut store, _storage) = memory_store();
            store.set_path(Path::Leader);
            store.set_stat(Stat::Spd, 3);

            let derived = store.derived();
            assert_eq!(derived.key_talent, Some("Decisive Command"));
            assert_eq!(derived.movement.rate_ft_per_action, 30);
        }
    }
}
