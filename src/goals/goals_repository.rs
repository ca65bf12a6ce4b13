use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::get_connection;
use crate::goals::{GoalError, Result};
use crate::models::{GoalStatus, ProficiencyLevel};
use crate::schema::{goals, skills};
use crate::skills::{Skill, SkillDB};

use super::goals_model::{Goal, GoalDB, GoalUpdate, GoalWithSkill, NewGoal};

/// Repository for managing goal records in the database
pub struct GoalRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl GoalRepository {
    /// Creates a new GoalRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        GoalRepository { pool }
    }

    /// Lists a user's goals joined with their catalog skills, newest first
    pub fn list_with_skills_by_user(&self, user_id: &str) -> Result<Vec<GoalWithSkill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let rows = goals::table
            .inner_join(skills::table)
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.desc())
            .load::<(GoalDB, SkillDB)>(&mut conn)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|(goal_db, skill_db)| {
                Ok(GoalWithSkill {
                    goal: Goal::try_from(goal_db)?,
                    skill: Skill::try_from(skill_db).map_err(GoalError::from)?,
                })
            })
            .collect()
    }

    /// Retrieves a goal by its ID
    pub fn find_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .optional()
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?
            .map(Goal::try_from)
            .transpose()
    }

    /// Retrieves a goal joined with its catalog skill
    pub fn find_with_skill(&self, goal_id: &str) -> Result<Option<GoalWithSkill>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let row = goals::table
            .inner_join(skills::table)
            .filter(goals::id.eq(goal_id))
            .first::<(GoalDB, SkillDB)>(&mut conn)
            .optional()
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        row.map(|(goal_db, skill_db)| {
            Ok(GoalWithSkill {
                goal: Goal::try_from(goal_db)?,
                skill: Skill::try_from(skill_db).map_err(GoalError::from)?,
            })
        })
        .transpose()
    }

    /// Checks whether `user_id` already owns a goal with the identical
    /// (skill, desired proficiency, notes) tuple, optionally excluding one
    /// goal id (so an edit never conflicts with itself).
    pub fn has_duplicate(
        &self,
        user_id: &str,
        skill_id: &str,
        desired_proficiency: ProficiencyLevel,
        notes: &str,
        exclude_goal_id: Option<&str>,
    ) -> Result<bool> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let mut query = goals::table
            .filter(goals::user_id.eq(user_id))
            .filter(goals::skill_id.eq(skill_id))
            .filter(goals::desired_proficiency.eq(desired_proficiency.as_str()))
            .filter(goals::notes.eq(notes))
            .select(goals::id)
            .into_boxed();

        if let Some(excluded) = exclude_goal_id {
            query = query.filter(goals::id.ne(excluded));
        }

        let found = query
            .first::<String>(&mut conn)
            .optional()
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        Ok(found.is_some())
    }

    /// Inserts a new ACTIVE goal owned by `user_id`
    pub fn insert(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let now = chrono::Utc::now().naive_utc();
        let goal_db = GoalDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            skill_id: new_goal.skill_id,
            desired_proficiency: new_goal.desired_proficiency.as_str().to_string(),
            notes: new_goal.notes,
            status: GoalStatus::Active.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };

        let inserted: GoalDB = diesel::insert_into(goals::table)
            .values(&goal_db)
            .returning(goals::all_columns)
            .get_result(&mut conn)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        inserted.try_into()
    }

    /// Rewrites a goal's skill, desired proficiency, and notes. Status is
    /// left untouched.
    pub fn update_fields(&self, update: GoalUpdate) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        diesel::update(goals::table.find(&update.id))
            .set((
                goals::skill_id.eq(&update.skill_id),
                goals::desired_proficiency.eq(update.desired_proficiency.as_str()),
                goals::notes.eq(&update.notes),
                goals::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(&mut conn)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        let reloaded = goals::table
            .find(&update.id)
            .first::<GoalDB>(&mut conn)
            .map_err(GoalError::from)?;

        reloaded.try_into()
    }

    /// Deletes a goal by its ID and returns the number of deleted records
    pub fn delete(&self, goal_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        Ok(diesel::delete(goals::table.find(goal_id))
            .execute(&mut conn)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?)
    }

    /// Status-transition variant usable inside an open transaction
    pub fn set_status_in_transaction(
        conn: &mut SqliteConnection,
        goal_id: &str,
        status: GoalStatus,
    ) -> Result<usize> {
        diesel::update(goals::table.find(goal_id))
            .set((
                goals::status.eq(status.as_str()),
                goals::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .execute(conn)
            .map_err(|e| GoalError::DatabaseError(e.to_string()))
    }
}
