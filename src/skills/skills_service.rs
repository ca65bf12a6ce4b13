use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::skills_model::{NewSkill, Skill, SkillUpdate};
use super::skills_repository::SkillRepository;
use crate::skills::Result;

/// Service for managing the skill catalog
pub struct SkillService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl SkillService {
    /// Creates a new SkillService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Adds a new skill to the catalog
    pub fn create_skill(&self, new_skill: NewSkill) -> Result<Skill> {
        debug!("Creating skill '{}'", new_skill.name);
        let repo = SkillRepository::new(self.pool.clone());
        repo.create(new_skill)
    }

    /// Updates an existing catalog skill
    pub fn update_skill(&self, skill_update: SkillUpdate) -> Result<Skill> {
        let repo = SkillRepository::new(self.pool.clone());
        repo.update(skill_update)
    }

    /// Retrieves a skill by its ID
    pub fn get_skill(&self, skill_id: &str) -> Result<Skill> {
        let repo = SkillRepository::new(self.pool.clone());
        repo.get_by_id(skill_id)
    }

    /// Lists all catalog skills, newest first
    pub fn list_skills(&self) -> Result<Vec<Skill>> {
        let repo = SkillRepository::new(self.pool.clone());
        repo.list()
    }

    /// Deletes a catalog skill by its ID
    pub fn delete_skill(&self, skill_id: &str) -> Result<()> {
        let repo = SkillRepository::new(self.pool.clone());
        repo.delete(skill_id)?;
        Ok(())
    }
}
