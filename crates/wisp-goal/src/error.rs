use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoalError {
    #[error("goal configuration error: {0}")]
    Config(String),
}

pub type GoalResult<T> = Result<T, GoalError>;
