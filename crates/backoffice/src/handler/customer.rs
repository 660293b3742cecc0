use crate::{
    abstract_trait::customer::{DynCustomerCommandService, DynCustomerQueryService},
    domain::{
        requests::{CreateCustomerRequest, UpdateCustomerRequest},
        response::{ApiResponse, CustomerResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customer",
    responses(
        (status = 200, description = "Customers ordered by last and first name", body = ApiResponse<Vec<CustomerResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customers(
    Extension(service): Extension<DynCustomerQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer details", body = ApiResponse<CustomerResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customer(
    Extension(service): Extension<DynCustomerQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customer",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = ApiResponse<CustomerResponse>),
        (status = 200, description = "Email already exists (success=false)", body = ErrorResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_customer(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<CustomerResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_customer(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customer",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer removed, or success=false when orders exist", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_customer(
    Extension(service): Extension<DynCustomerCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_customer(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn customer_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers", post(create_customer))
        .route("/api/customers/{id}", get(get_customer))
        .route("/api/customers/{id}", put(update_customer))
        .route("/api/customers/{id}", delete(delete_customer))
        .layer(Extension(app_state.di_container.customer_query.clone()))
        .layer(Extension(app_state.di_container.customer_command.clone()))
}
