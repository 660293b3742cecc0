use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    NotFound(String),

    #[error("Insufficient stock for {product}: requested={requested}, available={available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },

    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    #[error("{0}")]
    InvalidReference(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Business failures are reported to the caller as an unsuccessful
    /// result; everything else is a server fault.
    pub fn is_business(&self) -> bool {
        match self {
            ServiceError::Repo(repo_err) => matches!(
                repo_err,
                RepositoryError::NotFound
                    | RepositoryError::AlreadyExists(_)
                    | RepositoryError::ForeignKey(_)
            ),
            ServiceError::Internal(_) => false,
            _ => true,
        }
    }

    pub fn not_found(what: impl std::fmt::Display) -> Self {
        ServiceError::NotFound(format!("{what} not found"))
    }
}
