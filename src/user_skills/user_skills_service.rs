use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::user_skills_model::{
    NewUserSkillEntry, UserSkill, UserSkillDB, UserSkillUpdate, UserSkillWithSkill,
};
use super::user_skills_repository::UserSkillRepository;
use super::user_skills_traits::UserSkillServiceTrait;
use crate::models::ProficiencyLevel;
use crate::user_skills::{Result, UserSkillError};

/// Service for a user's self-reported skills
pub struct UserSkillService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl UserSkillService {
    /// Creates a new UserSkillService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    fn repo(&self) -> UserSkillRepository {
        UserSkillRepository::new(self.pool.clone())
    }
}

fn resolve_user(user_id: Option<&str>) -> Result<&str> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(UserSkillError::Unauthenticated),
    }
}

impl UserSkillServiceTrait for UserSkillService {
    fn list_user_skills(&self, user_id: Option<&str>) -> Result<Vec<UserSkillWithSkill>> {
        let user_id = resolve_user(user_id)?;
        self.repo().list_with_skills(user_id)
    }

    /// Records a batch of self-reported skills, skipping those already
    /// recorded for this user. Fails when nothing new remains.
    fn add_user_skills(
        &self,
        user_id: Option<&str>,
        entries: Vec<NewUserSkillEntry>,
    ) -> Result<Vec<UserSkill>> {
        let user_id = resolve_user(user_id)?;

        if entries.is_empty() {
            return Err(UserSkillError::InvalidData(
                "At least one skill is required".to_string(),
            ));
        }
        for entry in &entries {
            entry.validate()?;
        }

        let repo = self.repo();
        let skill_ids: Vec<String> = entries.iter().map(|e| e.skill_id.clone()).collect();
        let existing = repo.existing_skill_ids(user_id, &skill_ids)?;

        let new_entries: Vec<&NewUserSkillEntry> = entries
            .iter()
            .filter(|e| !existing.contains(&e.skill_id))
            .collect();

        if new_entries.is_empty() {
            return Err(UserSkillError::AlreadyRecorded(
                "No new skills to add. All selected skills already exist.".to_string(),
            ));
        }

        let now = chrono::Utc::now().naive_utc();
        let rows: Vec<UserSkillDB> = new_entries
            .iter()
            .map(|entry| UserSkillDB {
                id: uuid::Uuid::new_v4().to_string(),
                user_id: user_id.to_string(),
                skill_id: entry.skill_id.clone(),
                proficiency_level: entry.proficiency_level.as_str().to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();

        debug!("Adding {} user skill(s) for user {}", rows.len(), user_id);
        repo.insert_many(&rows)?;

        rows.into_iter().map(UserSkill::try_from).collect()
    }

    fn update_user_skill(
        &self,
        user_id: Option<&str>,
        update: UserSkillUpdate,
    ) -> Result<UserSkill> {
        let user_id = resolve_user(user_id)?;
        update.validate()?;

        let repo = self.repo();
        let existing = repo
            .find_by_id(&update.id)?
            .filter(|record| record.user_id == user_id)
            .ok_or_else(|| {
                UserSkillError::NotFound("Skill not found for the given user.".to_string())
            })?;

        // Moving the record onto a skill the user already holds elsewhere
        // would break the one-record-per-skill invariant.
        if let Some(conflict) = repo.find_by_user_and_skill(user_id, &update.skill_id)? {
            if conflict.id != existing.id {
                return Err(UserSkillError::AlreadyRecorded(
                    "This skill already exists for the user.".to_string(),
                ));
            }
        }

        repo.update(update)
    }

    fn delete_user_skill(&self, user_id: Option<&str>, user_skill_id: &str) -> Result<()> {
        let user_id = resolve_user(user_id)?;
        self.repo().delete_for_user(user_id, user_skill_id)?;
        Ok(())
    }

    /// Overwrites (or creates) the recorded proficiency for a (user, skill)
    /// pair. This is the reconciliation entry point used on goal completion.
    fn upsert_user_skill(
        &self,
        user_id: &str,
        skill_id: &str,
        proficiency_level: ProficiencyLevel,
    ) -> Result<()> {
        self.repo().upsert(user_id, skill_id, proficiency_level)?;
        Ok(())
    }
}
