use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::schema::skills;
use crate::skills::{Result, SkillError};

use super::skills_model::{NewSkill, Skill, SkillDB, SkillUpdate};

/// Repository for managing catalog skills in the database
pub struct SkillRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl SkillRepository {
    /// Creates a new SkillRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Adds a new skill to the catalog, enforcing name uniqueness
    pub fn create(&self, new_skill: NewSkill) -> Result<Skill> {
        new_skill.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        let existing = skills::table
            .filter(skills::name.eq(&new_skill.name))
            .first::<SkillDB>(&mut conn)
            .optional()
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        if existing.is_some() {
            return Err(SkillError::DuplicateName);
        }

        let now = chrono::Utc::now().naive_utc();
        let skill_db = SkillDB {
            id: uuid::Uuid::new_v4().to_string(),
            name: new_skill.name,
            category: new_skill.category.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(skills::table)
            .values(&skill_db)
            .execute(&mut conn)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        skill_db.try_into()
    }

    /// Updates a catalog skill, enforcing name uniqueness against other skills
    pub fn update(&self, skill_update: SkillUpdate) -> Result<Skill> {
        skill_update.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        let existing = skills::table
            .find(&skill_update.id)
            .first::<SkillDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => SkillError::NotFound(format!(
                    "Skill with id {} not found",
                    skill_update.id
                )),
                _ => SkillError::DatabaseError(e.to_string()),
            })?;

        let conflict = skills::table
            .filter(skills::name.eq(&skill_update.name))
            .filter(skills::id.ne(&skill_update.id))
            .first::<SkillDB>(&mut conn)
            .optional()
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        if conflict.is_some() {
            return Err(SkillError::DuplicateName);
        }

        let updated = SkillDB {
            id: existing.id,
            name: skill_update.name,
            category: skill_update.category.as_str().to_string(),
            created_at: existing.created_at,
            updated_at: chrono::Utc::now().naive_utc(),
        };

        diesel::update(skills::table.find(&updated.id))
            .set(&updated)
            .execute(&mut conn)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        updated.try_into()
    }

    /// Retrieves a skill by its ID
    pub fn get_by_id(&self, skill_id: &str) -> Result<Skill> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        let skill = skills::table
            .find(skill_id)
            .first::<SkillDB>(&mut conn)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    SkillError::NotFound(format!("Skill with id {} not found", skill_id))
                }
                _ => SkillError::DatabaseError(e.to_string()),
            })?;

        skill.try_into()
    }

    /// Lists catalog skills, newest first
    pub fn list(&self) -> Result<Vec<Skill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        skills::table
            .order(skills::created_at.desc())
            .load::<SkillDB>(&mut conn)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?
            .into_iter()
            .map(Skill::try_from)
            .collect()
    }

    /// Deletes a skill by its ID and returns the number of deleted records
    pub fn delete(&self, skill_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(skills::table.find(skill_id))
            .execute(&mut conn)
            .map_err(|e| SkillError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(SkillError::NotFound(format!(
                "Skill with id {} not found",
                skill_id
            )));
        }

        Ok(affected)
    }
}
