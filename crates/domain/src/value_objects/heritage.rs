//! Ancestry, Path, and Path Focus - the heroic identity choices.
//!
//! Each Path grants a key talent, a free first rank in one skill, and a fixed
//! list of three foci.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Skill;
use crate::DomainError;

/// Top-level lineage choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ancestry {
    HumanRoshar,
    Singer,
}

impl Ancestry {
    pub const ALL: [Ancestry; 2] = [Self::HumanRoshar, Self::Singer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HumanRoshar => "Human (Roshar)",
            Self::Singer => "Singer",
        }
    }

    /// Talent granted by the ancestry itself, if any.
    ///
    /// Humans instead pick one extra path talent (see
    /// [`crate::CharacterRecord::selected_path_talent`]).
    pub fn ancestry_talent(&self) -> Option<&'static str> {
        match self {
            Self::HumanRoshar => None,
            Self::Singer => Some("Change Form"),
        }
    }
}

/// Heroic path (class).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Path {
    Agent,
    Envoy,
    Hunter,
    Leader,
    Scholar,
    Warrior,
}

impl Path {
    pub const ALL: [Path; 6] = [
        Self::Agent,
        Self::Envoy,
        Self::Hunter,
        Self::Leader,
        Self::Scholar,
        Self::Warrior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Envoy => "Envoy",
            Self::Hunter => "Hunter",
            Self::Leader => "Leader",
            Self::Scholar => "Scholar",
            Self::Warrior => "Warrior",
        }
    }

    /// Skill this path guarantees at least one rank in.
    pub fn granted_skill(&self) -> Skill {
        match self {
            Self::Agent => Skill::Insight,
            Self::Envoy => Skill::Discipline,
            Self::Hunter => Skill::Perception,
            Self::Leader => Skill::Leadership,
            Self::Scholar => Skill::Lore,
            Self::Warrior => Skill::Athletics,
        }
    }

    pub fn key_talent(&self) -> &'static str {
        match self {
            Self::Agent => "Opportunist",
            Self::Envoy => "Rousing Presence",
            Self::Hunter => "Seek Quarry",
            Self::Leader => "Decisive Command",
            Self::Scholar => "Erudition",
            Self::Warrior => "Vigilant Stance",
        }
    }

    pub fn foci(&self) -> [PathFocus; 3] {
        use PathFocus::*;
        match self {
            Self::Agent => [Investigator, Spy, Thief],
            Self::Envoy => [Diplomat, Faithful, Mentor],
            Self::Hunter => [Archer, Assassin, Tracker],
            Self::Leader => [Champion, Officer, Politico],
            Self::Scholar => [Artifabrian, Strategist, Surgeon],
            Self::Warrior => [Duelist, Shardbearer, Soldier],
        }
    }
}

/// Specialty within a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PathFocus {
    Investigator,
    Spy,
    Thief,
    Diplomat,
    Faithful,
    Mentor,
    Archer,
    Assassin,
    Tracker,
    Champion,
    Officer,
    Politico,
    Artifabrian,
    Strategist,
    Surgeon,
    Duelist,
    Shardbearer,
    Soldier,
}

impl PathFocus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investigator => "Investigator",
            Self::Spy => "Spy",
            Self::Thief => "Thief",
            Self::Diplomat => "Diplomat",
            Self::Faithful => "Faithful",
            Self::Mentor => "Mentor",
            Self::Archer => "Archer",
            Self::Assassin => "Assassin",
            Self::Tracker => "Tracker",
            Self::Champion => "Champion",
            Self::Officer => "Officer",
            Self::Politico => "Politico",
            Self::Artifabrian => "Artifabrian",
            Self::Strategist => "Strategist",
            Self::Surgeon => "Surgeon",
            Self::Duelist => "Duelist",
            Self::Shardbearer => "Shardbearer",
            Self::Soldier => "Soldier",
        }
    }

    /// The path this focus belongs to.
    pub fn path(&self) -> Path {
        match self {
            Self::Investigator | Self::Spy | Self::Thief => Path::Agent,
            Self::Diplomat | Self::Faithful | Self::Mentor => Path::Envoy,
            Self::Archer | Self::Assassin | Self::Tracker => Path::Hunter,
            Self::Champion | Self::Officer | Self::Politico => Path::Leader,
            Self::Artifabrian | Self::Strategist | Self::Surgeon => Path::Scholar,
            Self::Duelist | Self::Shardbearer | Self::Soldier => Path::Warrior,
        }
    }

    pub fn belongs_to(&self, path: Path) -> bool {
        path.foci().contains(self)
    }
}

macro_rules! vocabulary_text {
    ($ty:ty, $kind:literal, $all:expr) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $all.into_iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| DomainError::unknown($kind, s))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

vocabulary_text!(Ancestry, "ancestry", Ancestry::ALL);
vocabulary_text!(Path, "path", Path::ALL);
vocabulary_text!(
    PathFocus,
    "path focus",
    Path::ALL.into_iter().flat_map(|path| path.foci())
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_path_has_three_unique_foci() {
        let mut seen = Vec::new();
        for path in Path::ALL {
            for focus in path.foci() {
                assert_eq!(focus.path(), path);
                assert!(!seen.contains(&focus));
                seen.push(focus);
            }
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn focus_membership() {
        assert!(PathFocus::Spy.belongs_to(Path::Agent));
        assert!(!PathFocus::Spy.belongs_to(Path::Warrior));
    }

    #[test]
    fn granted_skills_and_key_talents() {
        assert_eq!(Path::Agent.granted_skill(), Skill::Insight);
        assert_eq!(Path::Warrior.granted_skill(), Skill::Athletics);
        assert_eq!(Path::Scholar.key_talent(), "Erudition");
        assert_eq!(Path::Leader.key_talent(), "Decisive Command");
    }

    #[test]
    fn ancestry_uses_display_name_on_the_wire() {
        let json = serde_json::to_string(&Ancestry::HumanRoshar).unwrap();
        assert_eq!(json, "\"Human (Roshar)\"");
        assert_eq!("singer".parse::<Ancestry>(), Ok(Ancestry::Singer));
        assert!("Dwarf".parse::<Ancestry>().is_err());
    }

    #[test]
    fn only_singers_have_an_ancestry_talent() {
        assert_eq!(Ancestry::Singer.ancestry_talent(), Some("Change Form"));
        assert_eq!(Ancestry::HumanRoshar.ancestry_talent(), None);
    }

    #[test]
    fn focus_parses() {
        assert_eq!("Shardbearer".parse::<PathFocus>(), Ok(PathFocus::Shardbearer));
        assert!("Windrunner".parse::<PathFocus>().is_err());
    }
}
