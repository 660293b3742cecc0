use crate::{
    abstract_trait::cart::DynCartService,
    domain::{
        requests::{AddCartItemRequest, RemoveCartItemRequest},
        response::{ApiResponse, CartClearedResponse, CartLineResponse, CartResponse},
    },
    middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cart/{customer_id}",
    tag = "Cart",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Cart lines with totals", body = ApiResponse<CartResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.show_cart(customer_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/cart/{customer_id}/add",
    tag = "Cart",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Line added or increased", body = ApiResponse<CartLineResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn add_to_cart(
    Extension(service): Extension<DynCartService>,
    Path(customer_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.add_item(customer_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/cart/{customer_id}/remove",
    tag = "Cart",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    request_body = RemoveCartItemRequest,
    responses(
        (status = 200, description = "Line decreased, or removed with null data", body = ApiResponse<CartLineResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn remove_from_cart(
    Extension(service): Extension<DynCartService>,
    Path(customer_id): Path<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveCartItemRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.remove_item(customer_id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{customer_id}",
    tag = "Cart",
    params(("customer_id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Cart emptied, or success=false when already empty", body = ApiResponse<CartClearedResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn clear_cart(
    Extension(service): Extension<DynCartService>,
    Path(customer_id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.clear_cart(customer_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn cart_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cart/{customer_id}", get(get_cart))
        .route("/api/cart/{customer_id}", delete(clear_cart))
        .route("/api/cart/{customer_id}/add", post(add_to_cart))
        .route("/api/cart/{customer_id}/remove", post(remove_from_cart))
        .layer(Extension(app_state.di_container.cart.clone()))
}
