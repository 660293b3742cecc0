use crate::model::CartLineDetail;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    /// Lines of one customer's cart, ordered by product name.
    async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartLineDetail>, RepositoryError>;
}
