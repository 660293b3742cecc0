use crate::domain::requests::validation_messages;
use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use shared::errors::ErrorResponse;
use validator::Validate;

/// JSON body extractor that runs the payload's `validator` rules before the
/// handler sees it. Both malformed JSON and rule violations answer 400 with
/// the usual `{success, message}` body.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        success: false,
                        message: format!("Invalid JSON: {}", rejection.body_text()),
                    }),
                )
            })?;

        value.validate().map_err(|errors| {
            let messages = validation_messages(&errors, None);
            let message = if messages.is_empty() {
                "Validation failed".to_string()
            } else {
                format!("Validation failed: {}", messages.join("; "))
            };

            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    success: false,
                    message,
                }),
            )
        })?;

        Ok(Self(value))
    }
}
