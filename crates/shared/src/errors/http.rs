use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    /// A business rule rejected the request; reported with `success: false`.
    Failure(String),
    BadRequest(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        if !err.is_business() {
            error!("❌ Server fault: {err}");
            return match err {
                ServiceError::Repo(RepositoryError::Transaction(msg)) => {
                    HttpError::Internal(format!("Transaction failed: {msg}"))
                }
                ServiceError::Repo(_) => HttpError::Internal("Database error".into()),
                other => HttpError::Internal(other.to_string()),
            };
        }

        match err {
            ServiceError::Repo(RepositoryError::NotFound) => HttpError::Failure("Not found".into()),
            ServiceError::Repo(RepositoryError::AlreadyExists(msg)) => {
                HttpError::Failure(format!("Already exists: {msg}"))
            }
            ServiceError::Repo(RepositoryError::ForeignKey(msg)) => {
                HttpError::Failure(format!("Referenced by other records: {msg}"))
            }
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {}", errors.join("; ")))
            }
            other => HttpError::Failure(other.to_string()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::Failure(msg) => (StatusCode::OK, msg),
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            success: false,
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_are_reported_as_failures() {
        let err = ServiceError::InsufficientStock {
            product: "Laptop".into(),
            requested: 6,
            available: 5,
        };

        match HttpError::from(err) {
            HttpError::Failure(msg) => {
                assert_eq!(msg, "Insufficient stock for Laptop: requested=6, available=5")
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn transaction_failures_are_server_faults() {
        let err = ServiceError::Repo(RepositoryError::Transaction("commit aborted".into()));

        let response = HttpError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_rows_stay_business_failures() {
        let response = HttpError::from(ServiceError::Repo(RepositoryError::NotFound)).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
