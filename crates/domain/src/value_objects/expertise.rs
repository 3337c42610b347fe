//! Expertise catalog - armor, weapon, cultural, and utility expertises.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Which list an expertise comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpertiseCategory {
    Armor,
    Weapon,
    Cultural,
    Utility,
}

impl ExpertiseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armor => "Armor",
            Self::Weapon => "Weapon",
            Self::Cultural => "Cultural",
            Self::Utility => "Utility",
        }
    }
}

impl fmt::Display for ExpertiseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any expertise a character can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Expertise {
    // Armor
    Breastplate,
    ChainArmor,
    HalfPlate,
    Leather,
    Shardplate,
    // Weapon
    Axe,
    Crossbow,
    Grandbow,
    Greatsword,
    HalfShard,
    Hammer,
    Javelin,
    Knife,
    Longbow,
    Longspear,
    Longsword,
    Mace,
    Poleaxe,
    Rapier,
    Shardblade,
    Shield,
    Shortbow,
    Shortspear,
    Sidesword,
    Sling,
    Staff,
    UnarmedAttacks,
    Warhammer,
    // Cultural
    Alethi,
    Azish,
    Herdazian,
    HighSociety,
    Iriali,
    Kharbranthian,
    Listener,
    MilitaryLife,
    Natan,
    Reshi,
    Shin,
    Thaylen,
    Underworld,
    Unkalaki,
    Veden,
    Wayfarer,
    // Utility
    AnimalCare,
    ArmorCrafting,
    CulinaryArts,
    Engineering,
    Equipment,
    History,
    Literature,
    Military,
    Religion,
    RidingHorses,
    Stormwardens,
    VisualArts,
    WeaponCrafting,
}

impl Expertise {
    pub const ARMOR: [Expertise; 5] = [
        Self::Breastplate,
        Self::ChainArmor,
        Self::HalfPlate,
        Self::Leather,
        Self::Shardplate,
    ];

    pub const WEAPONS: [Expertise; 23] = [
        Self::Axe,
        Self::Crossbow,
        Self::Grandbow,
        Self::Greatsword,
        Self::HalfShard,
        Self::Hammer,
        Self::Javelin,
        Self::Knife,
        Self::Longbow,
        Self::Longspear,
        Self::Longsword,
        Self::Mace,
        Self::Poleaxe,
        Self::Rapier,
        Self::Shardblade,
        Self::Shield,
        Self::Shortbow,
        Self::Shortspear,
        Self::Sidesword,
        Self::Sling,
        Self::Staff,
        Self::UnarmedAttacks,
        Self::Warhammer,
    ];

    pub const CULTURAL: [Expertise; 16] = [
        Self::Alethi,
        Self::Azish,
        Self::Herdazian,
        Self::HighSociety,
        Self::Iriali,
        Self::Kharbranthian,
        Self::Listener,
        Self::MilitaryLife,
        Self::Natan,
        Self::Reshi,
        Self::Shin,
        Self::Thaylen,
        Self::Underworld,
        Self::Unkalaki,
        Self::Veden,
        Self::Wayfarer,
    ];

    pub const UTILITY: [Expertise; 13] = [
        Self::AnimalCare,
        Self::ArmorCrafting,
        Self::CulinaryArts,
        Self::Engineering,
        Self::Equipment,
        Self::History,
        Self::Literature,
        Self::Military,
        Self::Religion,
        Self::RidingHorses,
        Self::Stormwardens,
        Self::VisualArts,
        Self::WeaponCrafting,
    ];

    /// Every expertise across all four lists.
    pub fn all() -> impl Iterator<Item = Expertise> {
        Self::ARMOR
            .into_iter()
            .chain(Self::WEAPONS)
            .chain(Self::CULTURAL)
            .chain(Self::UTILITY)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breastplate => "Breastplate",
            Self::ChainArmor => "Chain Armor",
            Self::HalfPlate => "Half Plate",
            Self::Leather => "Leather",
            Self::Shardplate => "Shardplate",
            Self::Axe => "Axe",
            Self::Crossbow => "Crossbow",
            Self::Grandbow => "Grandbow",
            Self::Greatsword => "Greatsword",
            Self::HalfShard => "Half-Shard",
            Self::Hammer => "Hammer",
            Self::Javelin => "Javelin",
            Self::Knife => "Knife",
            Self::Longbow => "Longbow",
            Self::Longspear => "Longspear",
            Self::Longsword => "Longsword",
            Self::Mace => "Mace",
            Self::Poleaxe => "Poleaxe",
            Self::Rapier => "Rapier",
            Self::Shardblade => "Shardblade",
            Self::Shield => "Shield",
            Self::Shortbow => "Shortbow",
            Self::Shortspear => "Shortspear",
            Self::Sidesword => "Sidesword",
            Self::Sling => "Sling",
            Self::Staff => "Staff",
            Self::UnarmedAttacks => "Unarmed Attacks",
            Self::Warhammer => "Warhammer",
            Self::Alethi => "Alethi",
            Self::Azish => "Azish",
            Self::Herdazian => "Herdazian",
            Self::HighSociety => "High Society",
            Self::Iriali => "Iriali",
            Self::Kharbranthian => "Kharbranthian",
            Self::Listener => "Listener",
            Self::MilitaryLife => "Military Life",
            Self::Natan => "Natan",
            Self::Reshi => "Reshi",
            Self::Shin => "Shin",
            Self::Thaylen => "Thaylen",
            Self::Underworld => "Underworld",
            Self::Unkalaki => "Unkalaki",
            Self::Veden => "Veden",
            Self::Wayfarer => "Wayfarer",
            Self::AnimalCare => "Animal Care",
            Self::ArmorCrafting => "Armor Crafting",
            Self::CulinaryArts => "Culinary Arts",
            Self::Engineering => "Engineering",
            Self::Equipment => "Equipment",
            Self::History => "History",
            Self::Literature => "Literature",
            Self::Military => "Military",
            Self::Religion => "Religion",
            Self::RidingHorses => "Riding Horses",
            Self::Stormwardens => "Stormwardens",
            Self::VisualArts => "Visual Arts",
            Self::WeaponCrafting => "Weapon Crafting",
        }
    }

    pub fn category(&self) -> ExpertiseCategory {
        if Self::ARMOR.contains(self) {
            ExpertiseCategory::Armor
        } else if Self::WEAPONS.contains(self) {
            ExpertiseCategory::Weapon
        } else if Self::CULTURAL.contains(self) {
            ExpertiseCategory::Cultural
        } else {
            ExpertiseCategory::Utility
        }
    }

    pub fn is_cultural(&self) -> bool {
        self.category() == ExpertiseCategory::Cultural
    }
}

impl fmt::Display for Expertise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expertise {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .find(|e| e.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::unknown("expertise", s))
    }
}

impl TryFrom<String> for Expertise {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Expertise> for String {
    fn from(expertise: Expertise) -> Self {
        expertise.as_str().to_string()
    }
}
