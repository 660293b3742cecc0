use crate::domain::{
    requests::{AddCartItemRequest, RemoveCartItemRequest},
    response::{ApiResponse, CartClearedResponse, CartLineResponse, CartResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn show_cart(&self, customer_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        customer_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError>;

    /// Returns the remaining line, or `None` once the line is gone.
    async fn remove_item(
        &self,
        customer_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<ApiResponse<Option<CartLineResponse>>, ServiceError>;
    async fn clear_cart(
        &self,
        customer_id: i32,
    ) -> Result<ApiResponse<CartClearedResponse>, ServiceError>;
}
