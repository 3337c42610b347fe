//! CharacterRecord aggregate - the character under construction
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state only changes through the named mutators
//! - **Gentle failure**: out-of-range input is clamped, rule violations are
//!   rejected and reported through outcome enums, nothing returns `Err`
//! - **Valid after every call**: each mutator leaves all invariants intact
//!
//! # Invariants
//!
//! - every stat is in `0..=3` and their sum is at most 12
//! - every skill base rank is in `0..=2` and the total creation cost is at
//!   most 4 (the path-granted skill's first rank is free)
//! - cultural picks are distinct cultural expertises
//! - general picks are distinct, never a cultural pick, and at most INT
//! - a pick is only added while cultural + general picks are below `2 + INT`;
//!   lowering INT later trims general picks and leaves cultural picks alone
//! - the path focus, when set, belongs to the path

use serde::{Deserialize, Serialize};

use super::completion::CompletionIssue;
use super::lineage::{Lineage, LineageUpdate};
use crate::events::{
    ExpertiseRejection, ExpertiseToggle, LineageOutcome, RecordChange, SkillChange, StatChange,
};
use crate::value_objects::{
    creation_cost, Ancestry, Expertise, Level, Path, PathFocus, Skill, SkillRanks, Stat,
    StatBlock, MAX_CREATION_RANK, MAX_STAT_SCORE, SKILL_POINTS_TOTAL, TOTAL_STAT_POINTS,
};

/// Cultural expertises every character is expected to pick.
pub const REQUIRED_CULTURAL_EXPERTISES: usize = 2;

/// Direction of a one-point stat adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatAdjustment {
    Increment,
    Decrement,
}

/// The single character being created.
///
/// # Example
///
/// ```
/// use cosmere_domain::{CharacterRecord, Expertise, Stat};
///
/// let mut record = CharacterRecord::new();
/// record.set_stat(Stat::Int, 3);
/// record.toggle_cultural(Expertise::Alethi);
/// record.toggle_cultural(Expertise::Azish);
/// record.toggle_general(Expertise::Breastplate);
///
/// assert_eq!(record.general_expertises(), &[Expertise::Breastplate]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRecord {
    name: String,
    #[serde(flatten)]
    lineage: Lineage,
    level: Level,
    stats: StatBlock,
    cultural_expertises: Vec<Expertise>,
    general_expertises: Vec<Expertise>,
    skill_ranks: SkillRanks,
}

impl CharacterRecord {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// A blank record: no choices made, level 1, all points unspent.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    #[inline]
    pub fn ancestry(&self) -> Option<Ancestry> {
        self.lineage.ancestry()
    }

    #[inline]
    pub fn path(&self) -> Option<Path> {
        self.lineage.path()
    }

    #[inline]
    pub fn path_focus(&self) -> Option<PathFocus> {
        self.lineage.path_focus()
    }

    #[inline]
    pub fn selected_path_talent(&self) -> &str {
        self.lineage.selected_path_talent()
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    #[inline]
    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    #[inline]
    pub fn cultural_expertises(&self) -> &[Expertise] {
        &self.cultural_expertises
    }

    #[inline]
    pub fn general_expertises(&self) -> &[Expertise] {
        &self.general_expertises
    }

    #[inline]
    pub fn skill_ranks(&self) -> &SkillRanks {
        &self.skill_ranks
    }

    /// Skill whose first rank the current path grants for free.
    pub fn granted_skill(&self) -> Option<Skill> {
        self.path().map(|path| path.granted_skill())
    }

    /// Skill points spent under the current path.
    pub fn skill_points_spent(&self) -> u8 {
        self.skill_ranks.total_cost(self.granted_skill())
    }

    pub fn skill_points_remaining(&self) -> u8 {
        SKILL_POINTS_TOTAL.saturating_sub(self.skill_points_spent())
    }

    /// Maximum number of cultural plus general picks: `2 + INT`.
    pub fn expertise_cap(&self) -> u8 {
        REQUIRED_CULTURAL_EXPERTISES as u8 + self.stats.get(Stat::Int)
    }

    // =========================================================================
    // Basics
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) -> RecordChange {
        let name = name.into();
        let changed = self.name != name;
        self.name = name;
        RecordChange::from_bool(changed)
    }

    /// Set the level, silently clamped to `1..=21`.
    pub fn set_level(&mut self, raw: i64) -> RecordChange {
        let level = Level::clamped(raw);
        let changed = self.level != level;
        self.level = level;
        RecordChange::from_bool(changed)
    }

    /// Clears the selected path talent.
    pub fn set_ancestry(&mut self, ancestry: Ancestry) -> LineageOutcome {
        self.lineage.apply(LineageUpdate::Ancestry(ancestry))
    }

    /// Clears the path focus and selected path talent.
    ///
    /// Moving the free skill rank to another skill can push the skill budget
    /// over; the previous path's skill then loses one rank.
    pub fn set_path(&mut self, path: Path) -> LineageOutcome {
        let previous = self.granted_skill();
        let mut outcome = self.lineage.apply(LineageUpdate::Path(path));
        if let LineageOutcome::Changed {
            rebalanced_skill, ..
        } = &mut outcome
        {
            *rebalanced_skill = self.rebalance_skills(previous);
        }
        outcome
    }

    /// Clears the selected path talent. Rejected unless the focus belongs to
    /// the current path.
    pub fn set_path_focus(&mut self, focus: PathFocus) -> LineageOutcome {
        self.lineage.apply(LineageUpdate::PathFocus(focus))
    }

    /// Free-form; the caller restricts the options by path and focus.
    pub fn set_selected_path_talent(&mut self, talent: impl Into<String>) -> LineageOutcome {
        self.lineage
            .apply(LineageUpdate::SelectedPathTalent(talent.into()))
    }

    // =========================================================================
    // Stats
    // =========================================================================

    /// Set a stat, clamped to `0..=3` and to the points the other five leave.
    ///
    /// Lowering INT drops the most recently added general expertises until
    /// they fit.
    pub fn set_stat(&mut self, stat: Stat, raw: i64) -> StatChange {
        let from = self.stats.get(stat);
        let requested = raw.clamp(0, MAX_STAT_SCORE as i64) as u8;
        let cap = MAX_STAT_SCORE.min(TOTAL_STAT_POINTS.saturating_sub(self.stats.total_without(stat)));
        let to = requested.min(cap);
        self.write_stat(stat, from, to, raw != to as i64)
    }

    /// Move a stat by one point; no-op when that would cross a bound.
    pub fn adjust_stat(&mut self, stat: Stat, adjustment: StatAdjustment) -> StatChange {
        let from = self.stats.get(stat);
        let to = match adjustment {
            StatAdjustment::Increment
                if from < MAX_STAT_SCORE && self.stats.total() < TOTAL_STAT_POINTS =>
            {
                from + 1
            }
            StatAdjustment::Decrement if from > 0 => from - 1,
            _ => return StatChange::Unchanged { stat, value: from },
        };
        self.write_stat(stat, from, to, false)
    }

    /// All stats to zero; general expertises are cleared with INT.
    pub fn reset_stats(&mut self) -> RecordChange {
        let before = self.clone();
        self.stats = StatBlock::new();
        self.general_expertises.clear();
        RecordChange::from_bool(*self != before)
    }

    fn write_stat(&mut self, stat: Stat, from: u8, to: u8, clamped: bool) -> StatChange {
        if from == to {
            return StatChange::Unchanged { stat, value: to };
        }
        self.stats.set(stat, to);
        let dropped_expertises = if stat == Stat::Int {
            self.truncate_general_expertises()
        } else {
            Vec::new()
        };
        StatChange::Changed {
            stat,
            from,
            to,
            clamped,
            dropped_expertises,
        }
    }

    /// Truncate general picks to INT. Returns what was dropped, newest first.
    fn truncate_general_expertises(&mut self) -> Vec<Expertise> {
        let int = self.stats.get(Stat::Int) as usize;
        if self.general_expertises.len() > int {
            self.general_expertises.drain(int..).rev().collect()
        } else {
            Vec::new()
        }
    }

    // =========================================================================
    // Expertises
    // =========================================================================

    /// Select or deselect a cultural expertise.
    ///
    /// Deselecting always succeeds, even below the expected two. Selecting
    /// respects the `2 + INT` cap and removes the same expertise from the
    /// general picks.
    pub fn toggle_cultural(&mut self, expertise: Expertise) -> ExpertiseToggle {
        if !expertise.is_cultural() {
            return ExpertiseToggle::Rejected {
                expertise,
                reason: ExpertiseRejection::NotCultural,
            };
        }

        if let Some(pos) = self.cultural_expertises.iter().position(|e| *e == expertise) {
            self.cultural_expertises.remove(pos);
            return ExpertiseToggle::Removed { expertise };
        }

        let cap = self.expertise_cap();
        if self.cultural_expertises.len() + self.general_expertises.len() >= cap as usize {
            return ExpertiseToggle::Rejected {
                expertise,
                reason: ExpertiseRejection::SelectionCapReached { cap },
            };
        }

        let before = self.general_expertises.len();
        self.general_expertises.retain(|e| *e != expertise);
        self.cultural_expertises.push(expertise);

        ExpertiseToggle::Added {
            expertise,
            displaced_from_general: self.general_expertises.len() != before,
        }
    }

    /// Select or deselect an additional (general) expertise.
    ///
    /// Deselecting always succeeds. Selecting requires two cultural picks
    /// first, refuses cultural duplicates, and is capped at INT.
    pub fn toggle_general(&mut self, expertise: Expertise) -> ExpertiseToggle {
        if let Some(pos) = self.general_expertises.iter().position(|e| *e == expertise) {
            self.general_expertises.remove(pos);
            return ExpertiseToggle::Removed { expertise };
        }

        let reason = if self.cultural_expertises.len() < REQUIRED_CULTURAL_EXPERTISES {
            Some(ExpertiseRejection::CulturalPrerequisite {
                chosen: self.cultural_expertises.len(),
            })
        } else if self.cultural_expertises.contains(&expertise) {
            Some(ExpertiseRejection::AlreadyCultural)
        } else if self.general_expertises.len() >= self.stats.get(Stat::Int) as usize {
            Some(ExpertiseRejection::IntellectCapReached {
                cap: self.stats.get(Stat::Int),
            })
        } else {
            None
        };

        if let Some(reason) = reason {
            return ExpertiseToggle::Rejected { expertise, reason };
        }

        self.general_expertises.push(expertise);
        ExpertiseToggle::Added {
            expertise,
            displaced_from_general: false,
        }
    }

    pub fn clear_expertises(&mut self) -> RecordChange {
        let changed = !self.cultural_expertises.is_empty() || !self.general_expertises.is_empty();
        self.cultural_expertises.clear();
        self.general_expertises.clear();
        RecordChange::from_bool(changed)
    }

    // =========================================================================
    // Skills
    // =========================================================================

    /// Set a skill's base rank.
    ///
    /// The request is clamped to `0..=2`, then lowered to the highest rank
    /// whose cost still fits the 4-point budget.
    pub fn set_skill_rank(&mut self, skill: Skill, raw: i64) -> SkillChange {
        let granted = self.granted_skill();
        let from = self.skill_ranks.get(skill);
        let requested = raw.clamp(0, MAX_CREATION_RANK as i64) as u8;
        let spent_elsewhere =
            self.skill_ranks.total_cost(granted) - creation_cost(skill, from, granted);

        let to = (0..=requested)
            .rev()
            .find(|base| spent_elsewhere + creation_cost(skill, *base, granted) <= SKILL_POINTS_TOTAL)
            .unwrap_or(0);

        if to == from {
            return SkillChange::Unchanged { skill, value: from };
        }

        self.skill_ranks.set(skill, to);
        SkillChange::Changed {
            skill,
            from,
            to,
            clamped: raw != to as i64,
        }
    }

    pub fn reset_skills(&mut self) -> RecordChange {
        let changed = self.skill_ranks != SkillRanks::new();
        self.skill_ranks = SkillRanks::new();
        RecordChange::from_bool(changed)
    }

    /// After a path change, lower the previously granted skill if it no
    /// longer fits the budget.
    fn rebalance_skills(&mut self, previous: Option<Skill>) -> Option<Skill> {
        let granted = self.granted_skill();
        if self.skill_ranks.total_cost(granted) <= SKILL_POINTS_TOTAL {
            return None;
        }

        let lowered = previous.filter(|skill| self.skill_ranks.get(*skill) > 0);
        if let Some(skill) = lowered {
            let rank = self.skill_ranks.get(skill);
            self.skill_ranks.set(skill, rank - 1);
        }
        if self.skill_ranks.total_cost(granted) > SKILL_POINTS_TOTAL {
            self.skill_ranks = self.skill_ranks.normalized(granted);
        }
        lowered
    }

    // =========================================================================
    // Whole-record operations
    // =========================================================================

    /// Back to a blank record.
    pub fn reset(&mut self) -> RecordChange {
        let changed = *self != Self::default();
        *self = Self::default();
        RecordChange::from_bool(changed)
    }

    /// Copy with every invariant re-applied.
    ///
    /// Used when rehydrating persisted data that may have been edited by hand
    /// or written by an older build.
    pub fn normalized(mut self) -> Self {
        self.lineage = self.lineage.normalized();
        self.stats = self.stats.normalized();

        let mut cultural: Vec<Expertise> = Vec::new();
        for expertise in self.cultural_expertises.drain(..) {
            if expertise.is_cultural() && !cultural.contains(&expertise) {
                cultural.push(expertise);
            }
        }
        let mut general: Vec<Expertise> = Vec::new();
        for expertise in self.general_expertises.drain(..) {
            if !cultural.contains(&expertise) && !general.contains(&expertise) {
                general.push(expertise);
            }
        }
        self.cultural_expertises = cultural;
        self.general_expertises = general;
        self.truncate_general_expertises();

        self.skill_ranks = self.skill_ranks.normalized(self.granted_skill());
        self
    }

    /// Creation requirements not yet met, in wizard order.
    pub fn completion_issues(&self) -> Vec<CompletionIssue> {
        let mut issues = Vec::new();

        if self.name.trim().is_empty() {
            issues.push(CompletionIssue::MissingName);
        }
        if self.ancestry().is_none() {
            issues.push(CompletionIssue::MissingAncestry);
        }
        if self.path().is_none() {
            issues.push(CompletionIssue::MissingPath);
        } else if self.path_focus().is_none() {
            issues.push(CompletionIssue::MissingPathFocus);
        }
        if self.stats.remaining() > 0 {
            issues.push(CompletionIssue::UnspentStatPoints {
                remaining: self.stats.remaining(),
            });
        }
        if self.cultural_expertises.len() < REQUIRED_CULTURAL_EXPERTISES {
            issues.push(CompletionIssue::CulturalExpertises {
                chosen: self.cultural_expertises.len(),
                required: REQUIRED_CULTURAL_EXPERTISES,
            });
        }
        let int = self.stats.get(Stat::Int) as usize;
        if self.general_expertises.len() < int {
            issues.push(CompletionIssue::GeneralExpertises {
                chosen: self.general_expertises.len(),
                required: int,
            });
        }
        if self.skill_points_remaining() > 0 {
            issues.push(CompletionIssue::UnspentSkillPoints {
                remaining: self.skill_points_remaining(),
            });
        }

        issues
    }
}
