use diesel::result::Error as DieselError;
use thiserror::Error;

use crate::skills::SkillError;
use crate::user_skills::UserSkillError;

/// Custom error type for goal lifecycle operations
#[derive(Debug, Error)]
pub enum GoalError {
    #[error("User not authenticated")]
    Unauthenticated,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("A goal for this skill with the same proficiency level already exists")]
    DuplicateGoal,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for GoalError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => GoalError::NotFound("Record not found".to_string()),
            _ => GoalError::DatabaseError(err.to_string()),
        }
    }
}

impl From<SkillError> for GoalError {
    fn from(err: SkillError) -> Self {
        match err {
            SkillError::NotFound(msg) => GoalError::NotFound(msg),
            SkillError::InvalidData(msg) => GoalError::InvalidData(msg),
            other => GoalError::DatabaseError(other.to_string()),
        }
    }
}

impl From<UserSkillError> for GoalError {
    fn from(err: UserSkillError) -> Self {
        match err {
            UserSkillError::Unauthenticated => GoalError::Unauthenticated,
            UserSkillError::NotFound(msg) => GoalError::NotFound(msg),
            UserSkillError::InvalidData(msg) => GoalError::InvalidData(msg),
            other => GoalError::DatabaseError(other.to_string()),
        }
    }
}

/// Result type for goal lifecycle operations
pub type Result<T> = std::result::Result<T, GoalError>;
