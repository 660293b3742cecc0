use super::MemoryStore;
use crate::{abstract_trait::cart::CartQueryRepositoryTrait, model::CartLineDetail};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
impl CartQueryRepositoryTrait for MemoryStore {
    async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartLineDetail>, RepositoryError> {
        Ok(self.state.lock().await.cart_details(customer_id))
    }
}
