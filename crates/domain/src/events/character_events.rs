//! Character-record mutation outcomes
//!
//! These enums communicate what happened when the record was modified,
//! allowing callers to react appropriately. None of them is an error: a
//! rejected request simply leaves the record unchanged.

use std::fmt;

use crate::value_objects::{Expertise, Path, PathFocus, Skill, Stat};

/// Implemented by every outcome so owners can decide whether to persist.
pub trait MutationOutcome {
    /// Whether the record differs from before the call.
    fn is_changed(&self) -> bool;
}

/// Outcome of simple field updates and resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordChange {
    Changed,
    Unchanged,
}

impl RecordChange {
    pub(crate) fn from_bool(changed: bool) -> Self {
        if changed {
            Self::Changed
        } else {
            Self::Unchanged
        }
    }
}

impl MutationOutcome for RecordChange {
    fn is_changed(&self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Outcome of setting or adjusting a stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatChange {
    Changed {
        stat: Stat,
        from: u8,
        to: u8,
        /// The request was reduced to fit the per-stat or total cap
        clamped: bool,
        /// Expertises dropped because INT went down
        dropped_expertises: Vec<Expertise>,
    },
    /// Value already matched, or an adjustment would cross a bound
    Unchanged { stat: Stat, value: u8 },
}

impl MutationOutcome for StatChange {
    fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Why an expertise selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpertiseRejection {
    /// Only cultural expertises may be toggled into the cultural set
    NotCultural,
    /// Cultural plus general picks already reach `2 + INT`
    SelectionCapReached { cap: u8 },
    /// Two cultural expertises must be chosen before any general one
    CulturalPrerequisite { chosen: usize },
    /// The expertise is already one of the cultural picks
    AlreadyCultural,
    /// General picks already equal INT
    IntellectCapReached { cap: u8 },
}

impl fmt::Display for ExpertiseRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotCultural => write!(f, "not a cultural expertise"),
            Self::SelectionCapReached { cap } => {
                write!(f, "expertise selections already at cap of {}", cap)
            }
            Self::CulturalPrerequisite { chosen } => {
                write!(f, "choose 2 cultural expertises first ({} chosen)", chosen)
            }
            Self::AlreadyCultural => write!(f, "already chosen as a cultural expertise"),
            Self::IntellectCapReached { cap } => {
                write!(f, "additional expertises limited to INT ({})", cap)
            }
        }
    }
}

/// Outcome of toggling an expertise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpertiseToggle {
    Added {
        expertise: Expertise,
        /// Selecting it as cultural removed it from the general picks
        displaced_from_general: bool,
    },
    Removed { expertise: Expertise },
    Rejected {
        expertise: Expertise,
        reason: ExpertiseRejection,
    },
}

impl MutationOutcome for ExpertiseToggle {
    fn is_changed(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Outcome of setting a skill rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillChange {
    Changed {
        skill: Skill,
        from: u8,
        to: u8,
        /// The request was lowered to fit the rank cap or the point budget
        clamped: bool,
    },
    Unchanged { skill: Skill, value: u8 },
}

impl MutationOutcome for SkillChange {
    fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

/// Fields of the ancestry → path → focus → talent cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageField {
    Ancestry,
    Path,
    PathFocus,
    SelectedPathTalent,
}

/// Why a lineage update was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageRejection {
    /// The focus is not one of the current path's foci
    FocusNotInPath {
        focus: PathFocus,
        path: Option<Path>,
    },
}

impl fmt::Display for LineageRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FocusNotInPath { focus, path: Some(path) } => {
                write!(f, "{} is not a focus of the {} path", focus, path)
            }
            Self::FocusNotInPath { focus, path: None } => {
                write!(f, "choose a path before the {} focus", focus)
            }
        }
    }
}

/// Outcome of a lineage update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineageOutcome {
    Changed {
        field: LineageField,
        /// Downstream fields reset to unset/empty
        cleared: Vec<LineageField>,
        /// Skill lowered by one rank to keep the skill budget after a path change
        rebalanced_skill: Option<Skill>,
    },
    Unchanged { field: LineageField },
    Rejected {
        field: LineageField,
        reason: LineageRejection,
    },
}

impl MutationOutcome for LineageOutcome {
    fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}
