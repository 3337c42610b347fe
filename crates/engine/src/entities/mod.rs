//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain aggregate and depends on ports
//! for anything outside the process.

pub mod character;

pub use character::CharacterStore;
