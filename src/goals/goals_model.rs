use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::goals_errors::{GoalError, Result};
use crate::models::{GoalStatus, ProficiencyLevel};
use crate::skills::Skill;

/// Domain model representing a development goal.
///
/// For a given owner, no two goals may share the same
/// (skill, desired proficiency, notes) tuple at the same time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub skill_id: String,
    pub desired_proficiency: ProficiencyLevel,
    pub notes: String,
    pub status: GoalStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A goal joined with its catalog skill, as returned by list and complete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalWithSkill {
    #[serde(flatten)]
    pub goal: Goal,
    pub skill: Skill,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub skill_id: String,
    pub desired_proficiency: ProficiencyLevel,
    #[serde(default)]
    pub notes: String,
}

impl NewGoal {
    /// Validates the new goal data
    pub fn validate(&self) -> Result<()> {
        if self.skill_id.trim().is_empty() {
            return Err(GoalError::InvalidData("Skill is required".to_string()));
        }
        Ok(())
    }
}

/// Input model for editing an existing goal.
///
/// Edits never touch `status`; that is the completion transition's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    pub id: String,
    pub skill_id: String,
    pub desired_proficiency: ProficiencyLevel,
    #[serde(default)]
    pub notes: String,
}

impl GoalUpdate {
    /// Validates the goal update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(GoalError::InvalidData("Goal ID is required".to_string()));
        }
        if self.skill_id.trim().is_empty() {
            return Err(GoalError::InvalidData("Skill is required".to_string()));
        }
        Ok(())
    }
}

/// Database model for goals
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub skill_id: String,
    pub desired_proficiency: String,
    pub notes: String,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl TryFrom<GoalDB> for Goal {
    type Error = GoalError;

    fn try_from(db: GoalDB) -> Result<Self> {
        let desired_proficiency = db
            .desired_proficiency
            .parse::<ProficiencyLevel>()
            .map_err(|e| GoalError::InvalidData(e.to_string()))?;
        let status = db
            .status
            .parse::<GoalStatus>()
            .map_err(|e| GoalError::InvalidData(e.to_string()))?;
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            skill_id: db.skill_id,
            desired_proficiency,
            notes: db.notes,
            status,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            skill_id: domain.skill_id,
            desired_proficiency: domain.desired_proficiency.as_str().to_string(),
            notes: domain.notes,
            status: domain.status.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
