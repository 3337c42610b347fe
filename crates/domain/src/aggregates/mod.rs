//! Aggregates - the character record and its identity cascade.

pub mod character_record;
pub mod completion;
pub mod lineage;

pub use character_record::{CharacterRecord, StatAdjustment, REQUIRED_CULTURAL_EXPERTISES};
pub use completion::CompletionIssue;
pub use lineage::{Lineage, LineageUpdate};
