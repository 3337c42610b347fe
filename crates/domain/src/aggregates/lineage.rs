//! Lineage - the ancestry → path → focus → talent cascade.
//!
//! The four identity choices are held as one value with a single transition
//! function. Changing a field resets every field downstream of it:
//!
//! ```text
//! ancestry ──────────────┐
//!                        ▼
//! path ──► path focus ──► selected path talent
//! ```
//!
//! Ancestry does not constrain the path, so only the talent depends on it.

use serde::{Deserialize, Serialize};

use crate::events::{LineageField, LineageOutcome, LineageRejection};
use crate::value_objects::{Ancestry, Path, PathFocus};

/// A requested change to one lineage field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineageUpdate {
    Ancestry(Ancestry),
    Path(Path),
    PathFocus(PathFocus),
    SelectedPathTalent(String),
}

impl LineageUpdate {
    pub fn field(&self) -> LineageField {
        match self {
            Self::Ancestry(_) => LineageField::Ancestry,
            Self::Path(_) => LineageField::Path,
            Self::PathFocus(_) => LineageField::PathFocus,
            Self::SelectedPathTalent(_) => LineageField::SelectedPathTalent,
        }
    }
}

impl LineageField {
    /// Fields reset when this one changes, in dependency order.
    pub fn downstream(&self) -> &'static [LineageField] {
        match self {
            Self::Ancestry => &[Self::SelectedPathTalent],
            Self::Path => &[Self::PathFocus, Self::SelectedPathTalent],
            Self::PathFocus => &[Self::SelectedPathTalent],
            Self::SelectedPathTalent => &[],
        }
    }
}

/// Ancestry, path, focus, and the extra talent picked for humans.
///
/// # Invariants
///
/// - `path_focus`, when set, is one of `path`'s foci
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lineage {
    #[serde(default, with = "crate::common::empty_string_as_none")]
    ancestry: Option<Ancestry>,
    #[serde(default, with = "crate::common::empty_string_as_none")]
    path: Option<Path>,
    #[serde(default, with = "crate::common::empty_string_as_none")]
    path_focus: Option<PathFocus>,
    #[serde(default)]
    selected_path_talent: String,
}

impl Lineage {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn ancestry(&self) -> Option<Ancestry> {
        self.ancestry
    }

    #[inline]
    pub fn path(&self) -> Option<Path> {
        self.path
    }

    #[inline]
    pub fn path_focus(&self) -> Option<PathFocus> {
        self.path_focus
    }

    #[inline]
    pub fn selected_path_talent(&self) -> &str {
        &self.selected_path_talent
    }

    /// Apply one update and reset everything downstream of it.
    ///
    /// Setting a field to its current value is a no-op and clears nothing.
    pub fn apply(&mut self, update: LineageUpdate) -> LineageOutcome {
        let field = update.field();

        if let LineageUpdate::PathFocus(focus) = &update {
            if !self.path.is_some_and(|path| focus.belongs_to(path)) {
                return LineageOutcome::Rejected {
                    field,
                    reason: LineageRejection::FocusNotInPath {
                        focus: *focus,
                        path: self.path,
                    },
                };
            }
        }

        let changed = match update {
            LineageUpdate::Ancestry(ancestry) => {
                self.ancestry.replace(ancestry) != Some(ancestry)
            }
            LineageUpdate::Path(path) => self.path.replace(path) != Some(path),
            LineageUpdate::PathFocus(focus) => self.path_focus.replace(focus) != Some(focus),
            LineageUpdate::SelectedPathTalent(talent) => {
                if self.selected_path_talent == talent {
                    false
                } else {
                    self.selected_path_talent = talent;
                    true
                }
            }
        };

        if !changed {
            return LineageOutcome::Unchanged { field };
        }

        let cleared = field
            .downstream()
            .iter()
            .copied()
            .filter(|downstream| self.clear(*downstream))
            .collect();

        LineageOutcome::Changed {
            field,
            cleared,
            rebalanced_skill: None,
        }
    }

    /// Reset a field; returns whether it held a value.
    fn clear(&mut self, field: LineageField) -> bool {
        match field {
            LineageField::Ancestry => self.ancestry.take().is_some(),
            LineageField::Path => self.path.take().is_some(),
            LineageField::PathFocus => self.path_focus.take().is_some(),
            LineageField::SelectedPathTalent => {
                !std::mem::take(&mut self.selected_path_talent).is_empty()
            }
        }
    }

    /// Copy with a focus that does not match the path dropped.
    pub(crate) fn normalized(mut self) -> Self {
        let focus_valid = match (self.path, self.path_focus) {
            (Some(path), Some(focus)) => focus.belongs_to(path),
            (_, None) => true,
            (None, Some(_)) => false,
        };
        if !focus_valid {
            self.path_focus = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chosen() -> Lineage {
        let mut lineage = Lineage::new();
        lineage.apply(LineageUpdate::Ancestry(Ancestry::HumanRoshar));
        lineage.apply(LineageUpdate::Path(Path::Agent));
        lineage.apply(LineageUpdate::PathFocus(PathFocus::Spy));
        lineage.apply(LineageUpdate::SelectedPathTalent("Plausible Excuse".into()));
        lineage
    }

    mod cascade {
        use super::*;

        #[test]
        fn changing_path_clears_focus_and_talent() {
            let mut lineage = chosen();
            let outcome = lineage.apply(LineageUpdate::Path(Path::Scholar));

            assert_eq!(
                outcome,
                LineageOutcome::Changed {
                    field: LineageField::Path,
                    cleared: vec![LineageField::PathFocus, LineageField::SelectedPathTalent],
                    rebalanced_skill: None,
                }
            );
            assert_eq!(lineage.path(), Some(Path::Scholar));
            assert_eq!(lineage.path_focus(), None);
            assert_eq!(lineage.selected_path_talent(), "");
            assert_eq!(lineage.ancestry(), Some(Ancestry::HumanRoshar));
        }

        #[test]
        fn changing_focus_clears_talent_only() {
            let mut lineage = chosen();
            lineage.apply(LineageUpdate::PathFocus(PathFocus::Thief));

            assert_eq!(lineage.path(), Some(Path::Agent));
            assert_eq!(lineage.path_focus(), Some(PathFocus::Thief));
            assert_eq!(lineage.selected_path_talent(), "");
        }

        #[test]
        fn changing_ancestry_clears_talent_but_keeps_path() {
            let mut lineage = chosen();
            lineage.apply(LineageUpdate::Ancestry(Ancestry::Singer));

            assert_eq!(lineage.path(), Some(Path::Agent));
            assert_eq!(lineage.path_focus(), Some(PathFocus::Spy));
            assert_eq!(lineage.selected_path_talent(), "");
        }

        #[test]
        fn same_value_is_unchanged_and_clears_nothing() {
            let mut lineage = chosen();
            let outcome = lineage.apply(LineageUpdate::Path(Path::Agent));

            assert_eq!(
                outcome,
                LineageOutcome::Unchanged {
                    field: LineageField::Path
                }
            );
            assert_eq!(lineage.path_focus(), Some(PathFocus::Spy));
            assert_eq!(lineage.selected_path_talent(), "Plausible Excuse");
        }

        #[test]
        fn talent_is_free_form() {
            let mut lineage = Lineage::new();
            let outcome = lineage.apply(LineageUpdate::SelectedPathTalent("anything".into()));
            assert!(matches!(outcome, LineageOutcome::Changed { .. }));
            assert_eq!(lineage.selected_path_talent(), "anything");
        }
    }

    mod focus_validation {
        use super::*;

        #[test]
        fn focus_without_path_is_rejected() {
            let mut lineage = Lineage::new();
            let outcome = lineage.apply(LineageUpdate::PathFocus(PathFocus::Spy));
            assert!(matches!(outcome, LineageOutcome::Rejected { .. }));
            assert_eq!(lineage.path_focus(), None);
        }

        #[test]
        fn focus_from_other_path_is_rejected() {
            let mut lineage = chosen();
            let outcome = lineage.apply(LineageUpdate::PathFocus(PathFocus::Soldier));
            assert_eq!(
                outcome,
                LineageOutcome::Rejected {
                    field: LineageField::PathFocus,
                    reason: LineageRejection::FocusNotInPath {
                        focus: PathFocus::Soldier,
                        path: Some(Path::Agent),
                    },
                }
            );
            assert_eq!(lineage.path_focus(), Some(PathFocus::Spy));
            assert_eq!(lineage.selected_path_talent(), "Plausible Excuse");
        }

        #[test]
        fn normalized_drops_mismatched_focus() {
            let lineage: Lineage =
                serde_json::from_str(r#"{"path":"Warrior","pathFocus":"Spy"}"#).unwrap();
            let lineage = lineage.normalized();
            assert_eq!(lineage.path(), Some(Path::Warrior));
            assert_eq!(lineage.path_focus(), None);
        }
    }
}
