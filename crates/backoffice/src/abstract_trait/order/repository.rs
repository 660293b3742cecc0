use crate::model::{Order as OrderModel, OrderItemDetail, OrderSummary};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    /// Newest first: order date descending, then order id descending.
    async fn find_all(&self, customer_id: Option<i32>)
    -> Result<Vec<OrderSummary>, RepositoryError>;
    async fn find_by_status(&self, status: &str) -> Result<Vec<OrderSummary>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn update_status(
        &self,
        order_id: i32,
        status: &str,
    ) -> Result<Option<OrderModel>, RepositoryError>;
}
