// Module declarations
pub(crate) mod skills_errors;
pub(crate) mod skills_model;
pub(crate) mod skills_repository;
pub(crate) mod skills_service;

// Re-export the public interface
pub use skills_model::{NewSkill, Skill, SkillDB, SkillUpdate, MAX_SKILL_NAME_LEN};
pub use skills_repository::SkillRepository;
pub use skills_service::SkillService;

// Re-export error types for convenience
pub use skills_errors::{Result, SkillError};
