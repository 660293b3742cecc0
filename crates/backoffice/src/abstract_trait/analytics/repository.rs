use crate::model::{CustomerPurchases, OrderTotals, ProductSales};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynAnalyticsRepository = Arc<dyn AnalyticsRepositoryTrait + Send + Sync>;

/// Per-entity aggregates. Rows come back unordered; ranking happens in the
/// service.
#[async_trait]
pub trait AnalyticsRepositoryTrait {
    async fn customer_purchases(&self) -> Result<Vec<CustomerPurchases>, RepositoryError>;
    async fn product_sales(&self) -> Result<Vec<ProductSales>, RepositoryError>;
    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError>;
}
