//! Persisted character envelope.
//!
//! Storage holds one JSON blob shaped `{"state": {...}, "version": N}`.
//! Older blobs are upgraded through [`migrations`]; blobs from a newer build
//! are refused.

pub mod migrations;

use serde::Serialize;
use serde_json::Value;

use cosmere_domain::{CharacterRecord, SKILL_POINTS_TOTAL, TOTAL_STAT_POINTS};

use crate::infrastructure::ports::PersistenceError;

/// Schema version written by this build.
pub const CURRENT_SCHEMA_VERSION: u64 = 8;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState<'a> {
    #[serde(flatten)]
    record: &'a CharacterRecord,
    total_stat_points: u8,
    skill_points_total: u8,
}

#[derive(Serialize)]
struct Envelope<'a> {
    state: PersistedState<'a>,
    version: u64,
}

/// A record read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rehydrated {
    pub record: CharacterRecord,
    pub stored_version: u64,
}

impl Rehydrated {
    /// Whether the stored blob predates the current schema.
    pub fn needs_upgrade(&self) -> bool {
        self.stored_version < CURRENT_SCHEMA_VERSION
    }
}

/// Serialize a record into the current envelope.
pub fn encode(record: &CharacterRecord) -> Result<String, PersistenceError> {
    let envelope = Envelope {
        state: PersistedState {
            record,
            total_stat_points: TOTAL_STAT_POINTS,
            skill_points_total: SKILL_POINTS_TOTAL,
        },
        version: CURRENT_SCHEMA_VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse an envelope, migrate its state, and re-apply every record invariant.
pub fn decode(raw: &str) -> Result<Rehydrated, PersistenceError> {
    let envelope: Value = serde_json::from_str(raw)?;
    let Value::Object(mut envelope) = envelope else {
        return Err(PersistenceError::malformed("envelope is not an object"));
    };

    let stored_version = match envelope.get("version") {
        None => 0,
        Some(version) => version
            .as_u64()
            .ok_or_else(|| PersistenceError::malformed("version is not a non-negative integer"))?,
    };
    if stored_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: stored_version,
            current: CURRENT_SCHEMA_VERSION,
        });
    }

    let Some(Value::Object(mut state)) = envelope.remove("state") else {
        return Err(PersistenceError::malformed("missing state object"));
    };

    migrations::migrate(&mut state, stored_version);

    let record: CharacterRecord = serde_json::from_value(Value::Object(state))?;
    Ok(Rehydrated {
        record: record.normalized(),
        stored_version,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmere_domain::{Ancestry, Expertise, Path, PathFocus, Skill, Stat};
    use serde_json::json;

    fn sample() -> CharacterRecord {
        let mut record = CharacterRecord::new();
        record.set_name("Adolin");
        record.set_ancestry(Ancestry::HumanRoshar);
        record.set_path(Path::Warrior);
        record.set_path_focus(PathFocus::Duelist);
        record.set_selected_path_talent("Flamestance");
        record.set_level(3);
        record.set_stat(Stat::Str, 3);
        record.set_stat(Stat::Spd, 3);
        record.set_stat(Stat::Int, 1);
        record.toggle_cultural(Expertise::Alethi);
        record.toggle_cultural(Expertise::HighSociety);
        record.toggle_general(Expertise::Shardblade);
        record.set_skill_rank(Skill::HeavyWeaponry, 2);
        record
    }

    mod encode {
        use super::*;

        #[test]
        fn writes_current_envelope() {
            let blob = encode(&sample()).unwrap();
            let value: Value = serde_json::from_str(&blob).unwrap();

            assert_eq!(value["version"], 8);
            assert_eq!(value["state"]["name"], "Adolin");
            assert_eq!(value["state"]["ancestry"], "Human (Roshar)");
            assert_eq!(value["state"]["pathFocus"], "Duelist");
            assert_eq!(value["state"]["totalStatPoints"], 12);
            assert_eq!(value["state"]["skillPointsTotal"], 4);
            assert_eq!(value["state"]["culturalExpertises"], json!(["Alethi", "High Society"]));
        }

        #[test]
        fn blob_reads_back_equal() {
            let record = sample();
            let rehydrated = decode(&encode(&record).unwrap()).unwrap();
            assert_eq!(rehydrated.record, record);
            assert!(!rehydrated.needs_upgrade());
        }
    }

    mod decode {
        use super::*;

        #[test]
        fn every_historical_version_loads() {
            for version in 0..=CURRENT_SCHEMA_VERSION {
                let blob = json!({"state": {"name": "Teft"}, "version": version}).to_string();
                let rehydrated = decode(&blob).unwrap();
                assert_eq!(rehydrated.record.name(), "Teft");
                assert_eq!(rehydrated.stored_version, version);
            }
        }

        #[test]
        fn version_two_blob_keeps_its_stats() {
            let blob = json!({
                "state": {
                    "name": "Rock",
                    "ancestry": "Human (Roshar)",
                    "path": "Hunter",
                    "stats": {"STR": 3, "SPD": 1, "INT": 1, "WIL": 2, "AWA": 3, "PRE": 2},
                    "totalStatPoints": 12
                },
                "version": 2
            })
            .to_string();
            let rehydrated = decode(&blob).unwrap();

            assert!(rehydrated.needs_upgrade());
            assert_eq!(rehydrated.record.stats().get(Stat::Awa), 3);
            assert_eq!(rehydrated.record.level().value(), 1);
            assert_eq!(rehydrated.record.path_focus(), None);
            assert_eq!(rehydrated.record.skill_points_spent(), 0);
        }

        #[test]
        fn newer_version_is_refused() {
            let blob = json!({"state": {}, "version": 9}).to_string();
            assert!(matches!(
                decode(&blob),
                Err(PersistenceError::UnsupportedVersion { found: 9, current: 8 })
            ));
        }

        #[test]
        fn garbage_is_a_serialization_error() {
            assert!(matches!(
                decode("{not json"),
                Err(PersistenceError::Serialization(_))
            ));
        }

        #[test]
        fn wrong_shapes_are_malformed() {
            for blob in [r#"[]"#, r#"{"version": 3}"#, r#"{"state": 5, "version": 3}"#, r#"{"state": {}, "version": "8"}"#] {
                assert!(
                    matches!(decode(blob), Err(PersistenceError::MalformedEnvelope(_))),
                    "expected malformed for {blob}"
                );
            }
        }

        #[test]
        fn unknown_vocabulary_is_a_serialization_error() {
            let blob = json!({"state": {"path": "Windrunner"}, "version": 8}).to_string();
            assert!(matches!(
                decode(&blob),
                Err(PersistenceError::Serialization(_))
            ));
        }

        #[test]
        fn hand_edited_state_is_normalized() {
            let blob = json!({
                "state": {
                    "level": 0,
                    "stats": {"STR": 9, "SPD": 3, "INT": 3, "WIL": 3, "AWA": 3, "PRE": 3},
                    "culturalExpertises": ["Alethi", "Alethi", "Azish"],
                    "generalExpertises": ["Alethi", "Knife"]
                },
                "version": 8
            })
            .to_string();
            let record = decode(&blob).unwrap().record;

            assert_eq!(record.level().value(), 1);
            assert_eq!(record.stats().total(), 12);
            assert_eq!(record.cultural_expertises(), &[Expertise::Alethi, Expertise::Azish]);
            assert_eq!(record.general_expertises(), &[Expertise::Knife]);
        }
    }
}
