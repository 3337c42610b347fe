//! Cosmere character creation domain.
//!
//! Holds the single character under construction, the creation rules that
//! keep it valid after every mutation, and the values derived from it.
//! Nothing in this crate performs I/O.

pub mod aggregates;
pub mod common;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod value_objects;

pub use aggregates::{
    CharacterRecord, CompletionIssue, Lineage, LineageUpdate, StatAdjustment,
    REQUIRED_CULTURAL_EXPERTISES,
};

pub use error::DomainError;

pub use events::{
    ExpertiseRejection, ExpertiseToggle, LineageField, LineageOutcome, LineageRejection,
    MutationOutcome, RecordChange, SkillChange, StatChange,
};

pub use game_systems::{DerivedSheet, RecoveryDie, SensesRange};

pub use value_objects::{
    creation_cost, Ancestry, Expertise, ExpertiseCategory, Level, Path, PathFocus, Skill,
    SkillRanks, Stat, StatBlock, MAX_CREATION_RANK, MAX_LEVEL, MAX_SKILL_RANK, MAX_STAT_SCORE,
    MIN_LEVEL, SKILL_POINTS_TOTAL, TOTAL_STAT_POINTS,
};
