//! String conversion utilities.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Unset choices (ancestry, path, focus) are persisted as empty strings.
///
/// # Examples
///
/// ```
/// use cosmere_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("Singer"), Some("Singer"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Serde adapter storing `Option<T>` as `""` when unset.
///
/// Use with `#[serde(default, with = "crate::common::empty_string_as_none")]`.
pub mod empty_string_as_none {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match none_if_empty(raw.trim()) {
            None => Ok(None),
            Some(text) => text.parse().map(Some).map_err(de::Error::custom),
        }
    }
}
