use crate::domain::response::{
    ApiResponse, CustomerPurchasesResponse, ProductSalesResponse, SalesSummaryResponse,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynAnalyticsService = Arc<dyn AnalyticsServiceTrait + Send + Sync>;

#[async_trait]
pub trait AnalyticsServiceTrait {
    async fn customer_purchases(
        &self,
    ) -> Result<ApiResponse<Vec<CustomerPurchasesResponse>>, ServiceError>;
    async fn top_products(
        &self,
        n: usize,
    ) -> Result<ApiResponse<Vec<ProductSalesResponse>>, ServiceError>;
    async fn bottom_products(
        &self,
        n: usize,
    ) -> Result<ApiResponse<Vec<ProductSalesResponse>>, ServiceError>;
    async fn summary(&self) -> Result<ApiResponse<SalesSummaryResponse>, ServiceError>;
}
