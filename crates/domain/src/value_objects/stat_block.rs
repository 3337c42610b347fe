//! StatBlock - the six attribute scores of a character during creation.
//!
//! Scores are stored as a fixed array indexed by [`Stat`] so every stat is
//! always present. On the wire the block is a `{"STR": 0, ...}` map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Stat;

/// Highest score a single stat may hold at character creation.
pub const MAX_STAT_SCORE: u8 = 3;

/// Points available to distribute across all six stats.
pub const TOTAL_STAT_POINTS: u8 = 12;

/// Attribute scores for all six stats.
///
/// # Invariants
///
/// Mutation goes through [`crate::CharacterRecord`], which keeps every score in
/// `0..=MAX_STAT_SCORE` and the total at or below [`TOTAL_STAT_POINTS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Stat, u8>", into = "BTreeMap<Stat, u8>")]
pub struct StatBlock {
    scores: [u8; 6],
}

impl StatBlock {
    /// All stats at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the score for a stat.
    pub fn get(&self, stat: Stat) -> u8 {
        self.scores[stat.index()]
    }

    /// Sum of all six scores.
    pub fn total(&self) -> u8 {
        self.scores.iter().sum()
    }

    /// Sum of every score except `stat`.
    pub fn total_without(&self, stat: Stat) -> u8 {
        self.total() - self.get(stat)
    }

    /// Points still available out of [`TOTAL_STAT_POINTS`].
    pub fn remaining(&self) -> u8 {
        TOTAL_STAT_POINTS.saturating_sub(self.total())
    }

    /// Iterate `(stat, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        Stat::ALL.iter().map(move |stat| (*stat, self.get(*stat)))
    }

    pub(crate) fn set(&mut self, stat: Stat, value: u8) {
        self.scores[stat.index()] = value;
    }

    /// Copy with every invariant re-applied: scores capped at
    /// [`MAX_STAT_SCORE`], then trimmed from the last stat backwards until the
    /// total fits the budget.
    pub(crate) fn normalized(mut self) -> Self {
        for score in self.scores.iter_mut() {
            *score = (*score).min(MAX_STAT_SCORE);
        }
        for i in (0..self.scores.len()).rev() {
            let excess = self.total().saturating_sub(TOTAL_STAT_POINTS);
            if excess == 0 {
                break;
            }
            self.scores[i] -= excess.min(self.scores[i]);
        }
        self
    }
}

impl From<BTreeMap<Stat, u8>> for StatBlock {
    fn from(map: BTreeMap<Stat, u8>) -> Self {
        let mut block = Self::default();
        for (stat, value) in map {
            block.set(stat, value);
        }
        block
    }
}

impl From<StatBlock> for BTreeMap<Stat, u8> {
    fn from(block: StatBlock) -> Self {
        block.iter().collect()
    }
}
