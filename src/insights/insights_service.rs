use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use super::insights_model::{GoalStatistics, SkillProficiencyPoint};
use crate::errors::Result;
use crate::goals::{GoalError, GoalRepository};
use crate::models::GoalStatus;
use crate::user_skills::{UserSkillError, UserSkillRepository};

/// Read-side aggregates over a user's goals and recorded skills.
///
/// Pure snapshot reads; nothing here mutates the stores.
pub struct InsightsService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl InsightsService {
    /// Creates a new InsightsService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Chart points for the user's recorded skills, using the numeric
    /// proficiency mapping.
    pub fn proficiency_chart(&self, user_id: Option<&str>) -> Result<Vec<SkillProficiencyPoint>> {
        let user_id = match user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(UserSkillError::Unauthenticated.into()),
        };

        let repo = UserSkillRepository::new(self.pool.clone());
        let user_skills = repo.list_with_skills(user_id)?;

        Ok(user_skills
            .into_iter()
            .map(|record| SkillProficiencyPoint {
                skill: record.skill.name,
                proficiency_level: record.proficiency_level.chart_value(),
                proficiency_name: record.proficiency_level,
            })
            .collect())
    }

    /// Goal totals by status for the dashboard cards
    pub fn goal_statistics(&self, user_id: Option<&str>) -> Result<GoalStatistics> {
        let user_id = match user_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(GoalError::Unauthenticated.into()),
        };

        let repo = GoalRepository::new(self.pool.clone());
        let goals = repo.list_with_skills_by_user(user_id)?;

        let mut stats = GoalStatistics {
            total_goals: goals.len(),
            ..Default::default()
        };
        for record in &goals {
            match record.goal.status {
                GoalStatus::Active => stats.active_goals += 1,
                GoalStatus::Completed => stats.completed_goals += 1,
                GoalStatus::Inactive => stats.inactive_goals += 1,
            }
        }

        Ok(stats)
    }
}
