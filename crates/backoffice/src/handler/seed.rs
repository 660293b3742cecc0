use crate::{
    abstract_trait::seed::DynSeedService,
    domain::response::{ApiResponse, SeedResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/init-db",
    tag = "Admin",
    responses(
        (status = 200, description = "Sample data loaded, or store already initialized", body = ApiResponse<SeedResponse>),
        (status = 500, description = "Seeding failed", body = ErrorResponse)
    )
)]
pub async fn init_db(
    Extension(service): Extension<DynSeedService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.seed().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn seed_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/init-db", post(init_db))
        .layer(Extension(app_state.di_container.seed.clone()))
}
