use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::goals_model::{Goal, GoalUpdate, GoalWithSkill, NewGoal};
use super::goals_repository::GoalRepository;
use super::goals_traits::GoalServiceTrait;
use crate::db::DbTransactionExecutor;
use crate::goals::{GoalError, Result};
use crate::models::GoalStatus;
use crate::skills::SkillRepository;
use crate::user_skills::UserSkillRepository;

/// Service orchestrating the goal lifecycle.
///
/// Owns all mutation of the goal store and drives the one-way proficiency
/// reconciliation into the user-skill store when a goal completes.
pub struct GoalService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl GoalService {
    /// Creates a new GoalService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        GoalService { pool }
    }

    fn goal_repo(&self) -> GoalRepository {
        GoalRepository::new(self.pool.clone())
    }

    fn skill_repo(&self) -> SkillRepository {
        SkillRepository::new(self.pool.clone())
    }
}

fn resolve_user(user_id: Option<&str>) -> Result<&str> {
    match user_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(GoalError::Unauthenticated),
    }
}

impl GoalServiceTrait for GoalService {
    fn list_goals(&self, user_id: Option<&str>) -> Result<Vec<GoalWithSkill>> {
        let user_id = resolve_user(user_id)?;
        self.goal_repo().list_with_skills_by_user(user_id)
    }

    fn add_goal(&self, user_id: Option<&str>, new_goal: NewGoal) -> Result<Goal> {
        let user_id = resolve_user(user_id)?;
        new_goal.validate()?;

        // The target skill must exist in the catalog.
        self.skill_repo().get_by_id(&new_goal.skill_id)?;

        let repo = self.goal_repo();
        if repo.has_duplicate(
            user_id,
            &new_goal.skill_id,
            new_goal.desired_proficiency,
            &new_goal.notes,
            None,
        )? {
            return Err(GoalError::DuplicateGoal);
        }

        debug!(
            "Creating goal for user {} on skill {}",
            user_id, new_goal.skill_id
        );
        repo.insert(user_id, new_goal)
    }

    fn update_goal(&self, user_id: Option<&str>, update: GoalUpdate) -> Result<Goal> {
        let user_id = resolve_user(user_id)?;
        update.validate()?;

        let repo = self.goal_repo();
        let existing = repo
            .find_by_id(&update.id)?
            .ok_or_else(|| GoalError::NotFound(format!("Goal with id {} not found", update.id)))?;

        if existing.user_id != user_id {
            return Err(GoalError::Forbidden(
                "Goal is owned by another user".to_string(),
            ));
        }

        self.skill_repo().get_by_id(&update.skill_id)?;

        // Exclude the goal itself so an edit to its current tuple succeeds.
        if repo.has_duplicate(
            user_id,
            &update.skill_id,
            update.desired_proficiency,
            &update.notes,
            Some(&update.id),
        )? {
            return Err(GoalError::DuplicateGoal);
        }

        repo.update_fields(update)
    }

    fn delete_goal(&self, user_id: Option<&str>, goal_id: &str) -> Result<()> {
        let user_id = resolve_user(user_id)?;

        let repo = self.goal_repo();
        let existing = repo
            .find_by_id(goal_id)?
            .ok_or_else(|| GoalError::NotFound(format!("Goal with id {} not found", goal_id)))?;

        if existing.user_id != user_id {
            return Err(GoalError::Forbidden(
                "Goal is owned by another user".to_string(),
            ));
        }

        repo.delete(goal_id)?;
        Ok(())
    }

    /// Moves a goal to ACTIVE or COMPLETED. On the COMPLETED transition the
    /// owner's recorded proficiency for the goal's skill is upserted to the
    /// goal's desired proficiency; the status write and the upsert share one
    /// transaction. Completing again is idempotent.
    fn complete_goal(
        &self,
        user_id: Option<&str>,
        goal_id: &str,
        status: GoalStatus,
    ) -> Result<Goal> {
        let user_id = resolve_user(user_id)?;

        if status == GoalStatus::Inactive {
            return Err(GoalError::InvalidData(
                "Status must be ACTIVE or COMPLETED".to_string(),
            ));
        }

        let repo = self.goal_repo();
        let existing = repo
            .find_with_skill(goal_id)?
            .ok_or_else(|| GoalError::NotFound(format!("Goal with id {} not found", goal_id)))?;

        if existing.goal.user_id != user_id {
            return Err(GoalError::Forbidden(
                "Goal is owned by another user".to_string(),
            ));
        }

        let skill_id = existing.goal.skill_id.clone();
        let desired_proficiency = existing.goal.desired_proficiency;

        self.pool
            .execute(|conn| -> Result<()> {
                GoalRepository::set_status_in_transaction(conn, goal_id, status)?;
                if status == GoalStatus::Completed {
                    UserSkillRepository::upsert_in_transaction(
                        conn,
                        user_id,
                        &skill_id,
                        desired_proficiency,
                    )?;
                }
                Ok(())
            })
            .map_err(|e| GoalError::DatabaseError(e.to_string()))?;

        if status == GoalStatus::Completed {
            debug!(
                "Goal {} completed; user {} proficiency for skill {} set to {}",
                goal_id, user_id, skill_id, desired_proficiency
            );
        }

        repo.find_by_id(goal_id)?
            .ok_or_else(|| GoalError::NotFound(format!("Goal with id {} not found", goal_id)))
    }
}
