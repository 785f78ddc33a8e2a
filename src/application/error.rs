use crate::domain::DomainError;
use crate::ports::{ConfigError, RepositoryError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Invalid input: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API base URL not configured")]
    BaseUrlRequired,

    #[error("No task selected")]
    TaskNotSelected,
}

pub type AppResult<T> = Result<T, AppError>;
