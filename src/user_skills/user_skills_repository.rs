use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::models::ProficiencyLevel;
use crate::schema::{skills, user_skills};
use crate::skills::{Skill, SkillDB};
use crate::user_skills::{Result, UserSkillError};

use super::user_skills_model::{UserSkill, UserSkillDB, UserSkillUpdate, UserSkillWithSkill};

/// Repository for managing user-skill records in the database
pub struct UserSkillRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl UserSkillRepository {
    /// Creates a new UserSkillRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Lists a user's skill records joined with their catalog skills, newest first
    pub fn list_with_skills(&self, user_id: &str) -> Result<Vec<UserSkillWithSkill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        let rows = user_skills::table
            .inner_join(skills::table)
            .filter(user_skills::user_id.eq(user_id))
            .order(user_skills::created_at.desc())
            .load::<(UserSkillDB, SkillDB)>(&mut conn)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|(user_skill_db, skill_db)| {
                let user_skill = UserSkill::try_from(user_skill_db)?;
                let skill = Skill::try_from(skill_db)
                    .map_err(|e| UserSkillError::InvalidData(e.to_string()))?;
                Ok(UserSkillWithSkill {
                    id: user_skill.id,
                    proficiency_level: user_skill.proficiency_level,
                    skill,
                    created_at: user_skill.created_at,
                    updated_at: user_skill.updated_at,
                })
            })
            .collect()
    }

    /// Retrieves a user-skill record by its ID
    pub fn find_by_id(&self, user_skill_id: &str) -> Result<Option<UserSkill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        user_skills::table
            .find(user_skill_id)
            .first::<UserSkillDB>(&mut conn)
            .optional()
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?
            .map(UserSkill::try_from)
            .transpose()
    }

    /// Retrieves the record for a (user, skill) pair, if one exists
    pub fn find_by_user_and_skill(
        &self,
        user_id: &str,
        skill_id: &str,
    ) -> Result<Option<UserSkill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        user_skills::table
            .filter(user_skills::user_id.eq(user_id))
            .filter(user_skills::skill_id.eq(skill_id))
            .first::<UserSkillDB>(&mut conn)
            .optional()
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?
            .map(UserSkill::try_from)
            .transpose()
    }

    /// Returns the subset of `skill_ids` the user has already recorded
    pub fn existing_skill_ids(&self, user_id: &str, skill_ids: &[String]) -> Result<Vec<String>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        user_skills::table
            .filter(user_skills::user_id.eq(user_id))
            .filter(user_skills::skill_id.eq_any(skill_ids))
            .select(user_skills::skill_id)
            .load::<String>(&mut conn)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))
    }

    /// Inserts a batch of new user-skill records
    pub fn insert_many(&self, rows: &[UserSkillDB]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        diesel::insert_into(user_skills::table)
            .values(rows)
            .execute(&mut conn)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))
    }

    /// Rewrites the skill and proficiency of an existing record
    pub fn update(&self, update: UserSkillUpdate) -> Result<UserSkill> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        diesel::update(user_skills::table.find(&update.id))
            .set((
                user_skills::skill_id.eq(&update.skill_id),
                user_skills::proficiency_level.eq(update.proficiency_level.as_str()),
                user_skills::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        let reloaded = user_skills::table
            .find(&update.id)
            .first::<UserSkillDB>(&mut conn)
            .map_err(UserSkillError::from)?;

        reloaded.try_into()
    }

    /// Deletes a record owned by `user_id` and returns the number deleted
    pub fn delete_for_user(&self, user_id: &str, user_skill_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        let affected = diesel::delete(
            user_skills::table
                .find(user_skill_id)
                .filter(user_skills::user_id.eq(user_id)),
        )
        .execute(&mut conn)
        .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(UserSkillError::NotFound(
                "Skill not found for the given user.".to_string(),
            ));
        }

        Ok(affected)
    }

    /// Upserts the proficiency for a (user, skill) pair
    pub fn upsert(
        &self,
        user_id: &str,
        skill_id: &str,
        proficiency_level: ProficiencyLevel,
    ) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))?;

        Self::upsert_in_transaction(&mut conn, user_id, skill_id, proficiency_level)
    }

    /// Upsert variant usable inside an open transaction.
    ///
    /// Insert-or-overwrite on the (user, skill) unique constraint; the result
    /// is the same whether or not a record already existed.
    pub fn upsert_in_transaction(
        conn: &mut SqliteConnection,
        user_id: &str,
        skill_id: &str,
        proficiency_level: ProficiencyLevel,
    ) -> Result<usize> {
        let now = chrono::Utc::now().naive_utc();
        let row = UserSkillDB {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            skill_id: skill_id.to_string(),
            proficiency_level: proficiency_level.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(user_skills::table)
            .values(&row)
            .on_conflict((user_skills::user_id, user_skills::skill_id))
            .do_update()
            .set((
                user_skills::proficiency_level.eq(proficiency_level.as_str()),
                user_skills::updated_at.eq(now),
            ))
            .execute(conn)
            .map_err(|e| UserSkillError::DatabaseError(e.to_string()))
    }
}
