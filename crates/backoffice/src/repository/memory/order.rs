use super::MemoryStore;
use crate::{
    abstract_trait::order::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
    model::{Order as OrderModel, OrderItemDetail, OrderSummary},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.order_summaries(|order| {
            customer_id.is_none_or(|customer_id| order.customer_id == customer_id)
        }))
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<OrderSummary>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state.order_summaries(|order| order.status == status))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        Ok(self.state.lock().await.orders.get(&id).cloned())
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        Ok(self.state.lock().await.order_item_details(order_id))
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryStore {
    async fn update_status(
        &self,
        order_id: i32,
        status: &str,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut state = self.state.lock().await;

        Ok(state.orders.get_mut(&order_id).map(|order| {
            order.status = status.to_string();
            order.clone()
        }))
    }
}
