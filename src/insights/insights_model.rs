use serde::{Deserialize, Serialize};

use crate::models::ProficiencyLevel;

/// One point on the skills proficiency radar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillProficiencyPoint {
    pub skill: String,
    pub proficiency_level: u32,
    pub proficiency_name: ProficiencyLevel,
}

/// Goal totals by lifecycle status, as shown on the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatistics {
    pub total_goals: usize,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub inactive_goals: usize,
}
