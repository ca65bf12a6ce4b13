pub mod db;

pub mod errors;
pub mod goals;
pub mod insights;
pub mod models;
pub mod schema;
pub mod skills;
pub mod user_skills;

pub use errors::{Error, Result};
pub use models::{GoalStatus, ProficiencyLevel, SkillCategory};
