use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid priority '{0}'. Use one of: low, medium, high")]
    InvalidPriority(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
