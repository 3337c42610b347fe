//! Skill value object and the per-skill rank table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::Stat;
use crate::DomainError;

/// Highest base rank a skill may receive during character creation.
pub const MAX_CREATION_RANK: u8 = 2;

/// Highest effective rank a skill can ever reach.
pub const MAX_SKILL_RANK: u8 = 5;

/// Skill points available at character creation.
pub const SKILL_POINTS_TOTAL: u8 = 4;

/// The eighteen skills on the character sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Skill {
    Agility,
    Athletics,
    Crafting,
    Deception,
    Deduction,
    Discipline,
    HeavyWeaponry,
    Insight,
    Intimidation,
    Leadership,
    LightWeaponry,
    Lore,
    Medicine,
    Perception,
    Persuasion,
    Stealth,
    Survival,
    Thievery,
}

impl Skill {
    /// All skills in sheet (alphabetical) order.
    pub const ALL: [Skill; 18] = [
        Self::Agility,
        Self::Athletics,
        Self::Crafting,
        Self::Deception,
        Self::Deduction,
        Self::Discipline,
        Self::HeavyWeaponry,
        Self::Insight,
        Self::Intimidation,
        Self::Leadership,
        Self::LightWeaponry,
        Self::Lore,
        Self::Medicine,
        Self::Perception,
        Self::Persuasion,
        Self::Stealth,
        Self::Survival,
        Self::Thievery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agility => "Agility",
            Self::Athletics => "Athletics",
            Self::Crafting => "Crafting",
            Self::Deception => "Deception",
            Self::Deduction => "Deduction",
            Self::Discipline => "Discipline",
            Self::HeavyWeaponry => "Heavy Weaponry",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Leadership => "Leadership",
            Self::LightWeaponry => "Light Weaponry",
            Self::Lore => "Lore",
            Self::Medicine => "Medicine",
            Self::Perception => "Perception",
            Self::Persuasion => "Persuasion",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
            Self::Thievery => "Thievery",
        }
    }

    /// The attribute added to this skill's rank when making a check.
    pub fn governing_stat(&self) -> Stat {
        match self {
            Self::Athletics | Self::HeavyWeaponry => Stat::Str,
            Self::Agility | Self::LightWeaponry | Self::Stealth | Self::Thievery => Stat::Spd,
            Self::Crafting | Self::Deduction | Self::Lore | Self::Medicine => Stat::Int,
            Self::Discipline | Self::Intimidation => Stat::Wil,
            Self::Insight | Self::Perception | Self::Survival => Stat::Awa,
            Self::Deception | Self::Leadership | Self::Persuasion => Stat::Pre,
        }
    }

    fn index(&self) -> usize {
        // ALL is declared in discriminant order
        *self as usize
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unknown("skill", s))
    }
}

impl TryFrom<String> for Skill {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Skill> for String {
    fn from(skill: Skill) -> Self {
        skill.as_str().to_string()
    }
}

/// Creation-time point cost of holding `base` ranks in `skill`.
///
/// The path-granted skill's first rank is free.
pub fn creation_cost(skill: Skill, base: u8, granted: Option<Skill>) -> u8 {
    if granted == Some(skill) {
        base.saturating_sub(1)
    } else {
        base
    }
}

/// Base ranks assigned to every skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Skill, u8>", into = "BTreeMap<Skill, u8>")]
pub struct SkillRanks {
    ranks: [u8; 18],
}

impl SkillRanks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, skill: Skill) -> u8 {
        self.ranks[skill.index()]
    }

    /// Iterate `(skill, base rank)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Skill, u8)> + '_ {
        Skill::ALL.iter().map(move |skill| (*skill, self.get(*skill)))
    }

    /// Total creation cost of all ranks given the path-granted skill.
    pub fn total_cost(&self, granted: Option<Skill>) -> u8 {
        self.iter()
            .map(|(skill, base)| creation_cost(skill, base, granted))
            .sum()
    }

    pub(crate) fn set(&mut self, skill: Skill, value: u8) {
        self.ranks[skill.index()] = value;
    }

    /// Copy with ranks capped at [`MAX_CREATION_RANK`], then lowered from the
    /// last skill backwards until the total cost fits [`SKILL_POINTS_TOTAL`].
    pub(crate) fn normalized(mut self, granted: Option<Skill>) -> Self {
        for rank in self.ranks.iter_mut() {
            *rank = (*rank).min(MAX_CREATION_RANK);
        }
        for skill in Skill::ALL.iter().rev() {
            while self.total_cost(granted) > SKILL_POINTS_TOTAL && self.get(*skill) > 0 {
                let lowered = self.get(*skill) - 1;
                self.set(*skill, lowered);
            }
        }
        self
    }
}

impl From<BTreeMap<Skill, u8>> for SkillRanks {
    fn from(map: BTreeMap<Skill, u8>) -> Self {
        let mut ranks = Self::default();
        for (skill, value) in map {
            ranks.set(skill, value);
        }
        ranks
    }
}

impl From<SkillRanks> for BTreeMap<Skill, u8> {
    fn from(ranks: SkillRanks) -> Self {
        ranks.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, skill) in Skill::ALL.iter().enumerate() {
            assert_eq!(skill.index(), i);
        }
    }

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!("Heavy Weaponry".parse::<Skill>(), Ok(Skill::HeavyWeaponry));
        assert_eq!("light weaponry".parse::<Skill>(), Ok(Skill::LightWeaponry));
        assert!("Juggling".parse::<Skill>().is_err());
    }

    #[test]
    fn governing_stats_follow_the_sheet() {
        assert_eq!(Skill::Athletics.governing_stat(), Stat::Str);
        assert_eq!(Skill::Thievery.governing_stat(), Stat::Spd);
        assert_eq!(Skill::Medicine.governing_stat(), Stat::Int);
        assert_eq!(Skill::Discipline.governing_stat(), Stat::Wil);
        assert_eq!(Skill::Insight.governing_stat(), Stat::Awa);
        assert_eq!(Skill::Leadership.governing_stat(), Stat::Pre);
    }

    #[test]
    fn granted_skill_first_rank_is_free() {
        assert_eq!(creation_cost(Skill::Insight, 2, Some(Skill::Insight)), 1);
        assert_eq!(creation_cost(Skill::Insight, 1, Some(Skill::Insight)), 0);
        assert_eq!(creation_cost(Skill::Insight, 0, Some(Skill::Insight)), 0);
        assert_eq!(creation_cost(Skill::Athletics, 2, Some(Skill::Insight)), 2);
        assert_eq!(creation_cost(Skill::Athletics, 2, None), 2);
    }

    #[test]
    fn normalized_respects_budget() {
        let mut ranks = SkillRanks::new();
        for skill in Skill::ALL {
            ranks.set(skill, 5);
        }
        let ranks = ranks.normalized(None);
        assert_eq!(ranks.total_cost(None), SKILL_POINTS_TOTAL);
        assert_eq!(ranks.get(Skill::Agility), 2);
        assert_eq!(ranks.get(Skill::Athletics), 2);
        assert_eq!(ranks.get(Skill::Thievery), 0);
    }

    #[test]
    fn serializes_with_display_names() {
        let mut ranks = SkillRanks::new();
        ranks.set(Skill::HeavyWeaponry, 1);
        let json = serde_json::to_value(ranks).unwrap();
        assert_eq!(json["Heavy Weaponry"], 1);
        assert_eq!(json.as_object().unwrap().len(), 18);
    }
}
