//! JSON exporter for the character record
//!
//! Exports a snapshot of the record plus every derived value, stamped with
//! the export time.

use serde::Serialize;
use std::sync::Arc;

use cosmere_domain::{
    CharacterRecord, CompletionIssue, DerivedSheet, Expertise, SkillRanks, StatBlock,
    SKILL_POINTS_TOTAL, TOTAL_STAT_POINTS,
};

use crate::infrastructure::ports::{ClockPort, ExportError};

/// Complete snapshot of a character for export
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSnapshot {
    pub basics: BasicsData,
    pub stats: StatsData,
    pub expertises: ExpertisesData,
    pub skills: SkillsData,
    pub derived: DerivedSheet,
    /// Creation requirements still unmet
    pub issues: Vec<CompletionIssue>,
    /// RFC 3339 export time
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicsData {
    pub name: String,
    pub ancestry: String,
    pub path: String,
    pub path_focus: String,
    /// Extra talent picked by human characters, empty when unset
    pub selected_path_talent: String,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    #[serde(flatten)]
    pub scores: StatBlock,
    pub total_stat_points: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpertisesData {
    pub cultural: Vec<Expertise>,
    pub additional: Vec<Expertise>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsData {
    pub base_ranks: SkillRanks,
    pub points_total: u8,
    /// Creation cost, so the path-granted skill's first rank is not counted
    pub points_spent: u8,
}

/// Builds JSON snapshots of a record.
pub struct JsonExporter {
    clock: Arc<dyn ClockPort>,
}

impl JsonExporter {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn snapshot(&self, record: &CharacterRecord) -> CharacterSnapshot {
        let text = |value: Option<&'static str>| value.unwrap_or_default().to_string();

        CharacterSnapshot {
            basics: BasicsData {
                name: record.name().to_string(),
                ancestry: text(record.ancestry().map(|a| a.as_str())),
                path: text(record.path().map(|p| p.as_str())),
                path_focus: text(record.path_focus().map(|f| f.as_str())),
                selected_path_talent: record.selected_path_talent().to_string(),
                level: record.level().value(),
            },
            stats: StatsData {
                scores: *record.stats(),
                total_stat_points: TOTAL_STAT_POINTS,
            },
            expertises: ExpertisesData {
                cultural: record.cultural_expertises().to_vec(),
                additional: record.general_expertises().to_vec(),
            },
            skills: SkillsData {
                base_ranks: *record.skill_ranks(),
                points_total: SKILL_POINTS_TOTAL,
                points_spent: record.skill_points_spent(),
            },
            derived: DerivedSheet::from_record(record),
            issues: record.completion_issues(),
            timestamp: self.clock.now().to_rfc3339(),
        }
    }

    /// Pretty-printed snapshot.
    pub fn export(&self, record: &CharacterRecord) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(&self.snapshot(record))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockClockPort;
    use chrono::{TimeZone, Utc};
    use cosmere_domain::{Ancestry, Path, PathFocus, Skill, Stat};
    use serde_json::Value;

    fn exporter() -> JsonExporter {
        let mut clock = MockClockPort::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap());
        JsonExporter::new(Arc::new(clock))
    }

    fn agent() -> CharacterRecord {
        let mut record = CharacterRecord::new();
        record.set_name("Lift");
        record.set_ancestry(Ancestry::HumanRoshar);
        record.set_path(Path::Agent);
        record.set_path_focus(PathFocus::Thief);
        record.set_stat(Stat::Spd, 3);
        record.set_stat(Stat::Awa, 3);
        record.set_skill_rank(Skill::Insight, 2);
        record.set_skill_rank(Skill::Thievery, 2);
        record.toggle_cultural(Expertise::Reshi);
        record
    }

    fn export_value(record: &CharacterRecord) -> Value {
        serde_json::from_str(&exporter().export(record).unwrap()).unwrap()
    }

    #[test]
    fn basics_and_stats_sections() {
        let json = export_value(&agent());

        assert_eq!(json["basics"]["name"], "Lift");
        assert_eq!(json["basics"]["ancestry"], "Human (Roshar)");
        assert_eq!(json["basics"]["pathFocus"], "Thief");
        assert_eq!(json["basics"]["level"], 1);
        assert_eq!(json["stats"]["SPD"], 3);
        assert_eq!(json["stats"]["STR"], 0);
        assert_eq!(json["stats"]["totalStatPoints"], 12);
    }

    #[test]
    fn selected_path_talent_is_exported() {
        let mut record = CharacterRecord::new();
        record.set_ancestry(Ancestry::HumanRoshar);
        record.set_path(Path::Scholar);
        record.set_selected_path_talent("Expert Knowledge");

        let json = export_value(&record);

        assert_eq!(json["basics"]["selectedPathTalent"], "Expert Knowledge");
        assert_eq!(json["basics"]["path"], "Scholar");
    }

    #[test]
    fn skills_report_creation_cost() {
        let json = export_value(&agent());

        assert_eq!(json["skills"]["baseRanks"]["Insight"], 2);
        assert_eq!(json["skills"]["pointsTotal"], 4);
        assert_eq!(json["skills"]["pointsSpent"], 3);
        assert_eq!(json["derived"]["skills"]["Insight"]["checkValue"], 5);
    }

    #[test]
    fn expertises_and_issues() {
        let json = export_value(&agent());

        assert_eq!(json["expertises"]["cultural"], serde_json::json!(["Reshi"]));
        assert_eq!(json["expertises"]["additional"], serde_json::json!([]));
        let issues = json["issues"].as_array().unwrap();
        assert!(issues
            .iter()
            .any(|i| i["issue"] == "culturalExpertises" && i["chosen"] == 1));
    }

    #[test]
    fn timestamp_comes_from_clock() {
        let json = export_value(&CharacterRecord::new());
        assert_eq!(json["timestamp"], "2025-03-14T09:30:00+00:00");
    }

    #[test]
    fn blank_record_exports_empty_strings() {
        let json = export_value(&CharacterRecord::new());
        assert_eq!(json["basics"]["ancestry"], "");
        assert_eq!(json["basics"]["path"], "");
        assert_eq!(json["basics"]["selectedPathTalent"], "");
        assert_eq!(json["derived"]["keyTalent"], Value::Null);
    }
}
