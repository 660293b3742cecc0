use crate::domain::response::{ApiResponse, SeedResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynSeedService = Arc<dyn SeedServiceTrait + Send + Sync>;

#[async_trait]
pub trait SeedServiceTrait {
    async fn seed(&self) -> Result<ApiResponse<SeedResponse>, ServiceError>;
}
