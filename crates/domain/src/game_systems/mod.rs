//! Game system rules that derive sheet values from a character record.
//!
//! # Supported Systems
//!
//! - Cosmere RPG (`cosmere`)

mod cosmere;

pub use cosmere::{
    carrying_capacity, check_value, effective_rank, lifting_capacity, movement_rate,
    recovery_die, senses_range, talents, Capacities, Defenses, DerivedSheet, Movement,
    RecoveryDie, Senses, SensesRange, SkillLine,
};
