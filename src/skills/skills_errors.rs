use diesel::result::Error as DieselError;
use thiserror::Error;

/// Custom error type for skill catalog operations
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("A skill with this name already exists.")]
    DuplicateName,
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DieselError> for SkillError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => SkillError::NotFound("Record not found".to_string()),
            _ => SkillError::DatabaseError(err.to_string()),
        }
    }
}

/// Result type for skill catalog operations
pub type Result<T> = std::result::Result<T, SkillError>;
