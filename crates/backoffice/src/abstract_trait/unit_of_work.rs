use crate::{
    domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{CartLine, Order as OrderModel, OrderItem as OrderItemModel, Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUnitOfWork = Box<dyn UnitOfWorkTrait>;
pub type DynTransactionManager = Arc<dyn TransactionManagerTrait + Send + Sync>;

/// One store transaction. Every write made through it becomes visible only
/// after `commit`; dropping it without committing discards them.
#[async_trait]
pub trait UnitOfWorkTrait: Send {
    /// Reads the product and locks its row until the unit of work ends.
    async fn find_product_for_update(
        &mut self,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError>;

    /// Applies `delta` to the stock count. Returns `false` when the product
    /// is missing or the result would drop below zero; nothing is written then.
    async fn update_stock(&mut self, product_id: i32, delta: i32) -> Result<bool, RepositoryError>;

    async fn set_stock(
        &mut self,
        product_id: i32,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError>;

    async fn customer_exists(&mut self, customer_id: i32) -> Result<bool, RepositoryError>;
    async fn count_customer_orders(&mut self, customer_id: i32) -> Result<i64, RepositoryError>;
    async fn delete_customer(&mut self, customer_id: i32) -> Result<bool, RepositoryError>;

    async fn insert_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError>;
    async fn insert_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError>;
    async fn find_order_for_update(
        &mut self,
        order_id: i32,
    ) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_order_items(
        &mut self,
        order_id: i32,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;
    async fn delete_order_items(&mut self, order_id: i32) -> Result<u64, RepositoryError>;
    async fn delete_order(&mut self, order_id: i32) -> Result<bool, RepositoryError>;

    async fn find_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
    ) -> Result<Option<CartLine>, RepositoryError>;
    async fn insert_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError>;
    async fn update_cart_line(
        &mut self,
        cart_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError>;
    async fn delete_cart_line(&mut self, cart_id: i32) -> Result<bool, RepositoryError>;
    async fn delete_cart(&mut self, customer_id: i32) -> Result<u64, RepositoryError>;

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait TransactionManagerTrait {
    async fn begin(&self) -> Result<DynUnitOfWork, RepositoryError>;
}
