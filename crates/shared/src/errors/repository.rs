use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(SqlxError),

    #[error("Not found")]
    NotFound,

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Custom: {0}")]
    Custom(String),
}

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match &err {
            SqlxError::RowNotFound => RepositoryError::NotFound,
            SqlxError::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists(
                    db_err.constraint().unwrap_or(db_err.message()).to_string(),
                )
            }
            SqlxError::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepositoryError::ForeignKey(
                    db_err.constraint().unwrap_or(db_err.message()).to_string(),
                )
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}

impl RepositoryError {
    /// Wraps a failure to begin, commit or roll back a transaction.
    pub fn transaction(err: SqlxError) -> Self {
        RepositoryError::Transaction(err.to_string())
    }
}
