// Module declarations
pub(crate) mod goals_errors;
pub(crate) mod goals_model;
pub(crate) mod goals_repository;
pub(crate) mod goals_service;
pub(crate) mod goals_traits;

// Re-export the public interface
pub use goals_model::{Goal, GoalDB, GoalUpdate, GoalWithSkill, NewGoal};
pub use goals_repository::GoalRepository;
pub use goals_service::GoalService;
pub use goals_traits::GoalServiceTrait;

// Re-export error types for convenience
pub use goals_errors::{GoalError, Result};
