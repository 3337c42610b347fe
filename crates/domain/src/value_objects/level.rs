//! Character level, always within `MIN_LEVEL..=MAX_LEVEL`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 21;

/// Character level.
///
/// Construction clamps instead of failing, so any integer (including a
/// hand-edited persisted value) becomes a valid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Clamp `raw` into the valid level range.
    ///
    /// ```
    /// use cosmere_domain::Level;
    ///
    /// assert_eq!(Level::clamped(0).value(), 1);
    /// assert_eq!(Level::clamped(99).value(), 21);
    /// assert_eq!(Level::clamped(7).value(), 7);
    /// ```
    pub fn clamped(raw: i64) -> Self {
        Self(raw.clamp(MIN_LEVEL as i64, MAX_LEVEL as i64) as u8)
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(MIN_LEVEL)
    }
}

impl From<i64> for Level {
    fn from(raw: i64) -> Self {
        Self::clamped(raw)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_level_one() {
        assert_eq!(Level::default().value(), 1);
    }

    #[test]
    fn negative_input_clamps_to_one() {
        assert_eq!(Level::clamped(-5).value(), 1);
    }

    #[test]
    fn deserializing_out_of_range_clamps() {
        let level: Level = serde_json::from_str("40").unwrap();
        assert_eq!(level.value(), 21);
        assert_eq!(serde_json::to_string(&level).unwrap(), "21");
    }
}
