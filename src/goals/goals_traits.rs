use super::goals_model::{Goal, GoalUpdate, GoalWithSkill, NewGoal};
use crate::goals::Result;
use crate::models::GoalStatus;

/// Trait for goal lifecycle service operations.
///
/// Every operation takes the resolved caller identity explicitly; `None`
/// means the surrounding transport could not resolve a user, and the
/// operation fails with `Unauthenticated` before touching the store.
pub trait GoalServiceTrait: Send + Sync {
    fn list_goals(&self, user_id: Option<&str>) -> Result<Vec<GoalWithSkill>>;
    fn add_goal(&self, user_id: Option<&str>, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal(&self, user_id: Option<&str>, update: GoalUpdate) -> Result<Goal>;
    fn delete_goal(&self, user_id: Option<&str>, goal_id: &str) -> Result<()>;
    fn complete_goal(
        &self,
        user_id: Option<&str>,
        goal_id: &str,
        status: GoalStatus,
    ) -> Result<Goal>;
}
