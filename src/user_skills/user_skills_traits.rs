use super::user_skills_model::{
    NewUserSkillEntry, UserSkill, UserSkillUpdate, UserSkillWithSkill,
};
use crate::models::ProficiencyLevel;
use crate::user_skills::Result;

/// Trait for user-skill service operations.
///
/// The caller identity is an explicit parameter: `None` means the
/// surrounding transport could not resolve a user.
pub trait UserSkillServiceTrait: Send + Sync {
    fn list_user_skills(&self, user_id: Option<&str>) -> Result<Vec<UserSkillWithSkill>>;
    fn add_user_skills(
        &self,
        user_id: Option<&str>,
        entries: Vec<NewUserSkillEntry>,
    ) -> Result<Vec<UserSkill>>;
    fn update_user_skill(
        &self,
        user_id: Option<&str>,
        update: UserSkillUpdate,
    ) -> Result<UserSkill>;
    fn delete_user_skill(&self, user_id: Option<&str>, user_skill_id: &str) -> Result<()>;
    fn upsert_user_skill(
        &self,
        user_id: &str,
        skill_id: &str,
        proficiency_level: ProficiencyLevel,
    ) -> Result<()>;
}
