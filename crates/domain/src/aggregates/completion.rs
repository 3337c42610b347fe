//! Creation checklist - what a record still needs before it is a finished character.

use serde::Serialize;
use std::fmt;

/// One unmet creation requirement.
///
/// Issues never block a mutation; they annotate exports and let a UI show
/// what is left to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "camelCase")]
pub enum CompletionIssue {
    MissingName,
    MissingAncestry,
    MissingPath,
    MissingPathFocus,
    CulturalExpertises { chosen: usize, required: usize },
    GeneralExpertises { chosen: usize, required: usize },
    UnspentStatPoints { remaining: u8 },
    UnspentSkillPoints { remaining: u8 },
}

impl fmt::Display for CompletionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "Enter a character name"),
            Self::MissingAncestry => write!(f, "Choose an ancestry"),
            Self::MissingPath => write!(f, "Choose a path"),
            Self::MissingPathFocus => write!(f, "Choose a path focus"),
            Self::CulturalExpertises { chosen, required } => {
                write!(f, "Choose {} more Cultural", required - chosen)
            }
            Self::GeneralExpertises { chosen, required } => {
                write!(f, "Choose {} more Additional", required - chosen)
            }
            Self::UnspentStatPoints { remaining } => {
                write!(f, "{} stat points remaining", remaining)
            }
            Self::UnspentSkillPoints { remaining } => {
                write!(f, "{} skill points remaining", remaining)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_count_what_is_left() {
        let issue = CompletionIssue::CulturalExpertises {
            chosen: 1,
            required: 2,
        };
        assert_eq!(issue.to_string(), "Choose 1 more Cultural");
        assert_eq!(
            CompletionIssue::UnspentStatPoints { remaining: 3 }.to_string(),
            "3 stat points remaining"
        );
    }

    #[test]
    fn serializes_with_tag() {
        let json = serde_json::to_value(CompletionIssue::GeneralExpertises {
            chosen: 0,
            required: 2,
        })
        .unwrap();
        assert_eq!(json["issue"], "generalExpertises");
        assert_eq!(json["required"], 2);

        let json = serde_json::to_value(CompletionIssue::MissingPath).unwrap();
        assert_eq!(json["issue"], "missingPath");
    }
}
