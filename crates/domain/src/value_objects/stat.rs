//! Stat value object - the six attributes every character distributes points into.
//!
//! Provides type safety for stat references instead of using magic strings like "STR", "INT".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Character attributes used for defenses, derived values, and skill checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Stat {
    /// Strength - physical power
    Str,
    /// Speed - quickness and reflexes
    Spd,
    /// Intellect - reasoning and memory
    Int,
    /// Willpower - resolve and focus
    Wil,
    /// Awareness - perception and instinct
    Awa,
    /// Presence - force of personality
    Pre,
}

impl Stat {
    /// All stats in sheet order.
    pub const ALL: [Stat; 6] = [
        Self::Str,
        Self::Spd,
        Self::Int,
        Self::Wil,
        Self::Awa,
        Self::Pre,
    ];

    /// Returns the short uppercase key (e.g., "STR", "INT").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Spd => "SPD",
            Self::Int => "INT",
            Self::Wil => "WIL",
            Self::Awa => "AWA",
            Self::Pre => "PRE",
        }
    }

    /// Returns the full name of the stat (e.g., "Strength", "Intellect").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Spd => "Speed",
            Self::Int => "Intellect",
            Self::Wil => "Willpower",
            Self::Awa => "Awareness",
            Self::Pre => "Presence",
        }
    }

    /// Position of this stat within [`Stat::ALL`].
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Str => 0,
            Self::Spd => 1,
            Self::Int => 2,
            Self::Wil => 3,
            Self::Awa => 4,
            Self::Pre => 5,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Stat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "SPD" | "SPEED" => Ok(Self::Spd),
            "INT" | "INTELLECT" => Ok(Self::Int),
            "WIL" | "WILLPOWER" => Ok(Self::Wil),
            "AWA" | "AWARENESS" => Ok(Self::Awa),
            "PRE" | "PRESENCE" => Ok(Self::Pre),
            _ => Err(DomainError::unknown("stat", s)),
        }
    }
}

impl TryFrom<String> for Stat {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Stat> for String {
    fn from(stat: Stat) -> Self {
        stat.as_str().to_string()
    }
}
