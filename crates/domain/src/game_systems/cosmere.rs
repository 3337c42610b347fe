//! Cosmere RPG derived values.
//!
//! Everything here is a pure function of attribute scores or of a
//! [`CharacterRecord`]. Scores are floored at 0 before lookup.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::aggregates::CharacterRecord;
use crate::value_objects::{Ancestry, Skill, Stat, MAX_SKILL_RANK};

/// Score brackets shared by every attribute table: 0, 1-2, 3-4, 5-6, 7-8, 9+.
fn bracket(score: i32) -> usize {
    match score.max(0) {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        7..=8 => 4,
        _ => 5,
    }
}

const LIFTING_CAPACITY: [u32; 6] = [100, 200, 500, 1000, 5000, 10000];
const CARRYING_CAPACITY: [u32; 6] = [50, 100, 250, 500, 2500, 5000];
const MOVEMENT_RATE: [u32; 6] = [20, 25, 30, 40, 60, 80];
const RECOVERY_DIE_SIDES: [u8; 6] = [4, 6, 8, 10, 12, 0];
const SENSES_RANGE: [Option<u16>; 6] = [Some(5), Some(10), Some(20), Some(50), Some(100), None];

/// Pounds a character can lift, by STR.
pub fn lifting_capacity(strength: i32) -> u32 {
    LIFTING_CAPACITY[bracket(strength)]
}

/// Pounds a character can carry, by STR.
pub fn carrying_capacity(strength: i32) -> u32 {
    CARRYING_CAPACITY[bracket(strength)]
}

/// Feet per action, by SPD.
pub fn movement_rate(speed: i32) -> u32 {
    MOVEMENT_RATE[bracket(speed)]
}

pub fn recovery_die(willpower: i32) -> RecoveryDie {
    RecoveryDie {
        sides: RECOVERY_DIE_SIDES[bracket(willpower)],
    }
}

pub fn senses_range(awareness: i32) -> SensesRange {
    match SENSES_RANGE[bracket(awareness)] {
        Some(feet) => SensesRange::Feet(feet),
        None => SensesRange::Unaffected,
    }
}

/// Die rolled to recover health and focus.
///
/// WIL 9+ yields a zero-sided die (`1d0`); the table carries no die for that
/// bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryDie {
    sides: u8,
}

impl RecoveryDie {
    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Standard `NdM` notation, e.g. `1d8`.
    pub fn notation(&self) -> String {
        format!("1d{}", self.sides)
    }
}

impl fmt::Display for RecoveryDie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1d{}", self.sides)
    }
}

impl Serialize for RecoveryDie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How far a character senses when sight is obscured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensesRange {
    Feet(u16),
    Unaffected,
}

impl fmt::Display for SensesRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feet(feet) => write!(f, "{} ft", feet),
            Self::Unaffected => write!(f, "Unaffected by obscured senses"),
        }
    }
}

impl Serialize for SensesRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Defenses {
    pub physical: u8,
    pub cognitive: u8,
    pub spiritual: u8,
}

impl Defenses {
    /// 10 plus the two attributes paired with each defense.
    pub fn from_scores(scores: impl Fn(Stat) -> u8) -> Self {
        Self {
            physical: 10 + scores(Stat::Str) + scores(Stat::Spd),
            cognitive: 10 + scores(Stat::Int) + scores(Stat::Wil),
            spiritual: 10 + scores(Stat::Awa) + scores(Stat::Pre),
        }
    }
}

/// Rank used for checks: the base rank, raised to 1 for the path-granted
/// skill, capped at [`MAX_SKILL_RANK`].
pub fn effective_rank(base: u8, granted: bool) -> u8 {
    base.max(u8::from(granted)).min(MAX_SKILL_RANK)
}

pub fn check_value(effective_rank: u8, attribute: u8) -> u8 {
    effective_rank + attribute
}

/// Talents a record has: the path's key talent, the ancestry talent, and the
/// extra talent a human picks.
pub fn talents(record: &CharacterRecord) -> Vec<String> {
    let mut talents: Vec<String> = Vec::new();
    if let Some(path) = record.path() {
        talents.push(path.key_talent().to_string());
    }
    if let Some(talent) = record.ancestry().and_then(|a| a.ancestry_talent()) {
        talents.push(talent.to_string());
    }
    let extra = record.selected_path_talent().trim();
    if record.ancestry() == Some(Ancestry::HumanRoshar) && !extra.is_empty() {
        talents.push(extra.to_string());
    }
    talents
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacities {
    pub lifting: u32,
    pub carrying: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub rate_ft_per_action: u32,
    pub recovery_die: RecoveryDie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Senses {
    pub range: SensesRange,
}

/// One skill line as it appears on a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLine {
    pub base: u8,
    pub effective: u8,
    pub attribute: Stat,
    pub attribute_value: u8,
    pub check_value: u8,
}

/// Every derived value of a record, ready for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSheet {
    pub key_talent: Option<&'static str>,
    pub ancestry_talent: Option<&'static str>,
    pub defenses: Defenses,
    pub capacities: Capacities,
    pub movement: Movement,
    pub senses: Senses,
    pub skills: BTreeMap<Skill, SkillLine>,
}

impl DerivedSheet {
    pub fn from_record(record: &CharacterRecord) -> Self {
        let stats = record.stats();
        let score = |stat: Stat| i32::from(stats.get(stat));
        let granted = record.granted_skill();

        let skills = Skill::ALL
            .iter()
            .map(|skill| {
                let base = record.skill_ranks().get(*skill);
                let effective = effective_rank(base, granted == Some(*skill));
                let attribute = skill.governing_stat();
                let attribute_value = stats.get(attribute);
                let line = SkillLine {
                    base,
                    effective,
                    attribute,
                    attribute_value,
                    check_value: check_value(effective, attribute_value),
                };
                (*skill, line)
            })
            .collect();

        Self {
            key_talent: record.path().map(|path| path.key_talent()),
            ancestry_talent: record.ancestry().and_then(|a| a.ancestry_talent()),
            defenses: Defenses::from_scores(|stat| stats.get(stat)),
            capacities: Capacities {
                lifting: lifting_capacity(score(Stat::Str)),
                carrying: carrying_capacity(score(Stat::Str)),
            },
            movement: Movement {
                rate_ft_per_action: movement_rate(score(Stat::Spd)),
                recovery_die: recovery_die(score(Stat::Wil)),
            },
            senses: Senses {
                range: senses_range(score(Stat::Awa)),
            },
            skills,
        }
    }
}
