//! Value objects - the fixed vocabulary of character creation.

mod expertise;
mod heritage;
mod level;
mod skill;
mod stat;
mod stat_block;

pub use expertise::{Expertise, ExpertiseCategory};
pub use heritage::{Ancestry, Path, PathFocus};
pub use level::{Level, MAX_LEVEL, MIN_LEVEL};
pub use skill::{
    creation_cost, Skill, SkillRanks, MAX_CREATION_RANK, MAX_SKILL_RANK, SKILL_POINTS_TOTAL,
};
pub use stat::Stat;
pub use stat_block::{StatBlock, MAX_STAT_SCORE, TOTAL_STAT_POINTS};
