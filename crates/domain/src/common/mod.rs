//! Common utility functions shared across the domain and engine crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{empty_string_as_none, none_if_empty};
