mod analytics;
mod cart;
mod customer;
mod order;
mod product;
mod seed;

use crate::{
    domain::response::{ApiInfoResponse, ApiResponse, HealthResponse},
    state::AppState,
};
use anyhow::Result;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::get,
};
use prometheus_client::encoding::text::encode;
use shared::{errors::ErrorResponse, utils::shutdown_signal};
use std::{collections::BTreeMap, sync::Arc};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::analytics::analytics_routes;
pub use self::cart::cart_routes;
pub use self::customer::customer_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::seed::seed_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        api_info,
        health_check,

        seed::init_db,

        product::get_products,
        product::get_product,
        product::create_product,
        product::delete_product,
        product::update_stock,

        customer::get_customers,
        customer::get_customer,
        customer::create_customer,
        customer::update_customer,
        customer::delete_customer,

        cart::get_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,

        order::get_orders,
        order::get_pending_orders,
        order::get_order,
        order::create_order,
        order::update_order_status,
        order::delete_order,

        analytics::get_customer_purchases,
        analytics::get_top_products,
        analytics::get_bottom_products,
        analytics::get_sales_summary,
    ),
    tags(
        (name = "System", description = "Service info and health"),
        (name = "Admin", description = "Sample data loading"),
        (name = "Product", description = "Product catalogue and stock"),
        (name = "Customer", description = "Customer records"),
        (name = "Cart", description = "Per-customer shopping carts"),
        (name = "Order", description = "Order placement and lifecycle"),
        (name = "Analytics", description = "Sales reports"),
    )
)]
struct ApiDoc;

const ENDPOINTS: [(&str, &[&str]); 6] = [
    (
        "products",
        &[
            "GET /api/products",
            "POST /api/products",
            "GET /api/products/{id}",
            "DELETE /api/products/{id}",
            "PUT /api/products/{id}/stock",
        ],
    ),
    (
        "customers",
        &[
            "GET /api/customers",
            "POST /api/customers",
            "GET /api/customers/{id}",
            "PUT /api/customers/{id}",
            "DELETE /api/customers/{id}",
        ],
    ),
    (
        "cart",
        &[
            "GET /api/cart/{customer_id}",
            "POST /api/cart/{customer_id}/add",
            "POST /api/cart/{customer_id}/remove",
            "DELETE /api/cart/{customer_id}",
        ],
    ),
    (
        "orders",
        &[
            "GET /api/orders",
            "GET /api/orders/pending",
            "POST /api/orders",
            "GET /api/orders/{id}",
            "PUT /api/orders/{id}",
            "DELETE /api/orders/{id}",
        ],
    ),
    (
        "analytics",
        &[
            "GET /api/analytics/customers",
            "GET /api/analytics/products/top",
            "GET /api/analytics/products/bottom",
            "GET /api/analytics/summary",
        ],
    ),
    (
        "utility",
        &["POST /api/init-db", "GET /health", "GET /metrics"],
    ),
];

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Available endpoints", body = ApiResponse<ApiInfoResponse>))
)]
pub async fn api_info() -> impl IntoResponse {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(area, routes)| {
            (
                area.to_string(),
                routes.iter().map(|r| r.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect::<BTreeMap<_, _>>();

    Json(ApiResponse::success(
        "eCommerce back-office API",
        ApiInfoResponse { endpoints },
    ))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses((status = 200, description = "Service is up", body = ApiResponse<HealthResponse>))
)]
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success(
        "API is running",
        HealthResponse {
            status: "healthy".to_string(),
        },
    ))
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        error!("❌ Failed to encode metrics: {e}");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {e}"),
        );
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        buffer,
    )
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Endpoint not found".to_string(),
        }),
    )
}

pub struct AppRouter;

impl AppRouter {
    /// Full application router, without binding a listener.
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/", get(api_info))
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(seed_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(customer_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(analytics_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .fallback(not_found)
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
