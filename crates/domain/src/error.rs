//! Unified error types for the domain layer
//!
//! Mutators on the character record never fail - out-of-range input is clamped
//! and rule violations are reported through outcome enums. The only fallible
//! domain operations are conversions from text into vocabulary types.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unknown name for a fixed vocabulary (attribute, skill, expertise, ...)
    #[error("Unknown {kind}: {value}")]
    UnknownName { kind: &'static str, value: String },
}

impl DomainError {
    /// Create an unknown-name error for a vocabulary lookup.
    ///
    /// # Example
    /// ```
    /// use cosmere_domain::DomainError;
    ///
    /// let err = DomainError::unknown("attribute", "LCK");
    /// assert_eq!(err.to_string(), "Unknown attribute: LCK");
    /// ```
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownName {
            kind,
            value: value.into(),
        }
    }
}
