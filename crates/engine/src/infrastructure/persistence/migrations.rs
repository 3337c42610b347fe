//! Schema migration chain for the persisted character state.
//!
//! Each step introduces the fields added in one schema version. Steps only
//! fill fields that are absent, so data written by any build survives.

use serde_json::{Map, Value};

use cosmere_domain::{Skill, Stat, SKILL_POINTS_TOTAL, TOTAL_STAT_POINTS};

type State = Map<String, Value>;

/// `(version introduced, step)` in ascending order.
const STEPS: [(u64, fn(&mut State)); 7] = [
    (2, add_stats),
    (3, add_level),
    (4, add_path_focus),
    (5, add_expertises),
    (6, add_skill_ranks),
    (7, add_skill_points_total),
    (8, add_selected_path_talent),
];

/// Bring a state written at `stored_version` up to the current shape.
///
/// Returns the versions whose steps ran.
pub fn migrate(state: &mut State, stored_version: u64) -> Vec<u64> {
    let mut applied = Vec::new();
    for (version, step) in STEPS {
        if stored_version < version {
            step(state);
            tracing::debug!(version, "Applied character schema migration");
            applied.push(version);
        }
    }
    applied
}

fn fill(state: &mut State, key: &str, value: Value) {
    state.entry(key).or_insert(value);
}

fn zeroed<'a>(names: impl Iterator<Item = &'a str>) -> Value {
    Value::Object(names.map(|name| (name.to_string(), Value::from(0))).collect())
}

fn add_stats(state: &mut State) {
    fill(state, "stats", zeroed(Stat::ALL.iter().map(|s| s.as_str())));
    fill(state, "totalStatPoints", Value::from(TOTAL_STAT_POINTS));
}

fn add_level(state: &mut State) {
    fill(state, "level", Value::from(1));
}

fn add_path_focus(state: &mut State) {
    fill(state, "pathFocus", Value::from(""));
}

fn add_expertises(state: &mut State) {
    fill(state, "culturalExpertises", Value::Array(Vec::new()));
    fill(state, "generalExpertises", Value::Array(Vec::new()));
}

fn add_skill_ranks(state: &mut State) {
    fill(state, "skillRanks", zeroed(Skill::ALL.iter().map(|s| s.as_str())));
}

fn add_skill_points_total(state: &mut State) {
    fill(state, "skillPointsTotal", Value::from(SKILL_POINTS_TOTAL));
}

fn add_selected_path_talent(state: &mut State) {
    fill(state, "selectedPathTalent", Value::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state(value: Value) -> State {
        match value {
            Value::Object(map) => map,
            _ => panic!("test state must be an object"),
        }
    }

    #[test]
    fn version_one_gets_every_field() {
        let mut s = state(json!({"name": "Navani", "ancestry": "Human (Roshar)"}));
        let applied = migrate(&mut s, 1);

        assert_eq!(applied, vec![2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(s["name"], "Navani");
        assert_eq!(s["stats"]["WIL"], 0);
        assert_eq!(s["totalStatPoints"], 12);
        assert_eq!(s["level"], 1);
        assert_eq!(s["pathFocus"], "");
        assert_eq!(s["culturalExpertises"], json!([]));
        assert_eq!(s["generalExpertises"], json!([]));
        assert_eq!(s["skillRanks"]["Light Weaponry"], 0);
        assert_eq!(s["skillRanks"].as_object().map(|m| m.len()), Some(18));
        assert_eq!(s["skillPointsTotal"], 4);
        assert_eq!(s["selectedPathTalent"], "");
    }

    #[test]
    fn version_seven_only_gains_selected_talent() {
        let mut s = state(json!({"level": 4}));
        let applied = migrate(&mut s, 7);
        assert_eq!(applied, vec![8]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn current_version_is_untouched() {
        let mut s = state(json!({}));
        assert!(migrate(&mut s, 8).is_empty());
        assert!(s.is_empty());
    }

    #[test]
    fn existing_values_are_kept() {
        let mut s = state(json!({"level": 9, "stats": {"STR": 2}}));
        migrate(&mut s, 1);
        assert_eq!(s["level"], 9);
        assert_eq!(s["stats"], json!({"STR": 2}));
    }
}
