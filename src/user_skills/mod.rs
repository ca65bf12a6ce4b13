// Module declarations
pub(crate) mod user_skills_errors;
pub(crate) mod user_skills_model;
pub(crate) mod user_skills_repository;
pub(crate) mod user_skills_service;
pub(crate) mod user_skills_traits;

// Re-export the public interface
pub use user_skills_model::{
    NewUserSkillEntry, UserSkill, UserSkillDB, UserSkillUpdate, UserSkillWithSkill,
};
pub use user_skills_repository::UserSkillRepository;
pub use user_skills_service::UserSkillService;
pub use user_skills_traits::UserSkillServiceTrait;

// Re-export error types for convenience
pub use user_skills_errors::{Result, UserSkillError};
