use crate::{
    abstract_trait::analytics::DynAnalyticsService,
    domain::{
        requests::ProductRankingQuery,
        response::{
            ApiResponse, CustomerPurchasesResponse, ProductSalesResponse, SalesSummaryResponse,
        },
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/analytics/customers",
    tag = "Analytics",
    responses(
        (status = 200, description = "Customers by total purchases, highest first", body = ApiResponse<Vec<CustomerPurchasesResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_customer_purchases(
    Extension(service): Extension<DynAnalyticsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.customer_purchases().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/products/top",
    tag = "Analytics",
    params(ProductRankingQuery),
    responses(
        (status = 200, description = "Best selling products", body = ApiResponse<Vec<ProductSalesResponse>>),
        (status = 400, description = "n below 1", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_top_products(
    Extension(service): Extension<DynAnalyticsService>,
    Query(params): Query<ProductRankingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.top_products(params.size()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/products/bottom",
    tag = "Analytics",
    params(ProductRankingQuery),
    responses(
        (status = 200, description = "Least selling products", body = ApiResponse<Vec<ProductSalesResponse>>),
        (status = 400, description = "n below 1", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_bottom_products(
    Extension(service): Extension<DynAnalyticsService>,
    Query(params): Query<ProductRankingQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.bottom_products(params.size()).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "Analytics",
    responses(
        (status = 200, description = "Order count, revenue, average and best seller", body = ApiResponse<SalesSummaryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sales_summary(
    Extension(service): Extension<DynAnalyticsService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.summary().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn analytics_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/analytics/customers", get(get_customer_purchases))
        .route("/api/analytics/products/top", get(get_top_products))
        .route("/api/analytics/products/bottom", get(get_bottom_products))
        .route("/api/analytics/summary", get(get_sales_summary))
        .layer(Extension(app_state.di_container.analytics.clone()))
}
