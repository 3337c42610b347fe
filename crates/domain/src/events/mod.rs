//! Mutation outcomes returned by the character record.

mod character_events;

pub use character_events::{
    ExpertiseRejection, ExpertiseToggle, LineageField, LineageOutcome, LineageRejection,
    MutationOutcome, RecordChange, SkillChange, StatChange,
};
