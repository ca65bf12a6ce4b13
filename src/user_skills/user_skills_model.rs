use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::user_skills_errors::{Result, UserSkillError};
use crate::models::ProficiencyLevel;
use crate::skills::Skill;

/// Domain model representing a user's recorded proficiency in a skill.
///
/// At most one record exists per (user, skill) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkill {
    pub id: String,
    pub user_id: String,
    pub skill_id: String,
    pub proficiency_level: ProficiencyLevel,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A user-skill record joined with its catalog skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillWithSkill {
    pub id: String,
    pub proficiency_level: ProficiencyLevel,
    pub skill: Skill,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One entry of a direct self-reported skill submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserSkillEntry {
    pub skill_id: String,
    pub proficiency_level: ProficiencyLevel,
}

impl NewUserSkillEntry {
    pub fn validate(&self) -> Result<()> {
        if self.skill_id.trim().is_empty() {
            return Err(UserSkillError::InvalidData(
                "Skill is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for editing an existing user-skill record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillUpdate {
    pub id: String,
    pub skill_id: String,
    pub proficiency_level: ProficiencyLevel,
}

impl UserSkillUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(UserSkillError::InvalidData(
                "UserSkill ID is required".to_string(),
            ));
        }
        if self.skill_id.trim().is_empty() {
            return Err(UserSkillError::InvalidData(
                "Skill is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for user skills
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
#[diesel(table_name = crate::schema::user_skills)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSkillDB {
    pub id: String,
    pub user_id: String,
    pub skill_id: String,
    pub proficiency_level: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl TryFrom<UserSkillDB> for UserSkill {
    type Error = UserSkillError;

    fn try_from(db: UserSkillDB) -> Result<Self> {
        let proficiency_level = db
            .proficiency_level
            .parse::<ProficiencyLevel>()
            .map_err(|e| UserSkillError::InvalidData(e.to_string()))?;
        Ok(Self {
            id: db.id,
            user_id: db.user_id,
            skill_id: db.skill_id,
            proficiency_level,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_requires_skill_id() {
        let entry = NewUserSkillEntry {
            skill_id: "".to_string(),
            proficiency_level: ProficiencyLevel::Beginner,
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_unknown_proficiency_text_rejected() {
        let now = chrono::Utc::now().naive_utc();
        let db = UserSkillDB {
            id: "us1".to_string(),
            user_id: "u1".to_string(),
            skill_id: "s1".to_string(),
            proficiency_level: "GURU".to_string(),
            created_at: now,
            updated_at: now,
        };
        assert!(UserSkill::try_from(db).is_err());
    }
}
