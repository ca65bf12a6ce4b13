use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for user-skill operations
#[derive(Debug, Error)]
pub enum UserSkillError {
    #[error("User not authenticated")]
    Unauthenticated,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyRecorded(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<DieselError> for UserSkillError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => UserSkillError::NotFound("Record not found".to_string()),
            _ => UserSkillError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for user-skill operations
pub type Result<T> = std::result::Result<T, UserSkillError>;
