use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::skills_errors::{Result, SkillError};
use crate::models::SkillCategory;

pub const MAX_SKILL_NAME_LEN: usize = 50;

/// Domain model representing a skill in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for adding a skill to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
}

impl NewSkill {
    /// Validates the new skill data
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Input model for updating a catalog skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillUpdate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: SkillCategory,
}

impl SkillUpdate {
    /// Validates the skill update data
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(SkillError::InvalidData(
                "Skill ID is required".to_string(),
            ));
        }
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SkillError::InvalidData(
            "Skill name is required".to_string(),
        ));
    }
    if name.chars().count() > MAX_SKILL_NAME_LEN {
        return Err(SkillError::InvalidData(format!(
            "Skill name must not exceed {} characters",
            MAX_SKILL_NAME_LEN
        )));
    }
    Ok(())
}

/// Database model for catalog skills
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
#[diesel(table_name = crate::schema::skills)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SkillDB {
    pub id: String,
    pub name: String,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

// Conversion implementations
impl TryFrom<SkillDB> for Skill {
    type Error = SkillError;

    fn try_from(db: SkillDB) -> Result<Self> {
        let category = db
            .category
            .parse::<SkillCategory>()
            .map_err(|e| SkillError::InvalidData(e.to_string()))?;
        Ok(Self {
            id: db.id,
            name: db.name,
            category,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Skill> for SkillDB {
    fn from(domain: Skill) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            category: domain.category.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_rejected() {
        let skill = NewSkill {
            name: "  ".to_string(),
            category: SkillCategory::Technical,
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn test_long_name_rejected() {
        let skill = NewSkill {
            name: "x".repeat(MAX_SKILL_NAME_LEN + 1),
            category: SkillCategory::Technical,
        };
        assert!(skill.validate().is_err());
    }

    #[test]
    fn test_unknown_category_text_rejected() {
        let db = SkillDB {
            id: "s1".to_string(),
            name: "React".to_string(),
            category: "MYSTERY".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: chrono::Utc::now().naive_utc(),
        };
        assert!(Skill::try_from(db).is_err());
    }
}
