// Module declarations
pub(crate) mod insights_model;
pub(crate) mod insights_service;

// Re-export the public interface
pub use insights_model::{GoalStatistics, SkillProficiencyPoint};
pub use insights_service::InsightsService;
