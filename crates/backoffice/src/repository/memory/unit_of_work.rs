use super::{MemoryState, MemoryStore};
use crate::{
    abstract_trait::unit_of_work::{DynUnitOfWork, TransactionManagerTrait, UnitOfWorkTrait},
    domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{CartLine, Order as OrderModel, OrderItem as OrderItemModel, Product as ProductModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tokio::sync::OwnedMutexGuard;
use tracing::debug;

pub struct MemoryTransactionManager {
    store: MemoryStore,
}

impl MemoryTransactionManager {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TransactionManagerTrait for MemoryTransactionManager {
    async fn begin(&self) -> Result<DynUnitOfWork, RepositoryError> {
        let guard = self.store.state.clone().lock_owned().await;
        let working = guard.clone();

        Ok(Box::new(MemoryUnitOfWork { guard, working }))
    }
}

/// Holds the store lock for its whole lifetime, so units of work run one at
/// a time. Writes land in `working` until commit.
pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl UnitOfWorkTrait for MemoryUnitOfWork {
    async fn find_product_for_update(
        &mut self,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.working.products.get(&product_id).cloned())
    }

    async fn update_stock(&mut self, product_id: i32, delta: i32) -> Result<bool, RepositoryError> {
        Ok(self.working.update_stock(product_id, delta))
    }

    async fn set_stock(
        &mut self,
        product_id: i32,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        self.working.set_stock(product_id, stock)
    }

    async fn customer_exists(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        Ok(self.working.customers.contains_key(&customer_id))
    }

    async fn count_customer_orders(&mut self, customer_id: i32) -> Result<i64, RepositoryError> {
        Ok(self.working.count_customer_orders(customer_id))
    }

    async fn delete_customer(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        self.working.delete_customer(customer_id)
    }

    async fn insert_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        self.working.insert_order(req)
    }

    async fn insert_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError> {
        self.working.insert_order_item(req)
    }

    async fn find_order_for_update(
        &mut self,
        order_id: i32,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        Ok(self.working.orders.get(&order_id).cloned())
    }

    async fn find_order_items(
        &mut self,
        order_id: i32,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        Ok(self.working.order_items_of(order_id))
    }

    async fn delete_order_items(&mut self, order_id: i32) -> Result<u64, RepositoryError> {
        Ok(self.working.delete_order_items(order_id))
    }

    async fn delete_order(&mut self, order_id: i32) -> Result<bool, RepositoryError> {
        Ok(self.working.delete_order(order_id))
    }

    async fn find_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
    ) -> Result<Option<CartLine>, RepositoryError> {
        Ok(self.working.find_cart_line(customer_id, product_id))
    }

    async fn insert_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        self.working.insert_cart_line(customer_id, product_id, quantity)
    }

    async fn update_cart_line(
        &mut self,
        cart_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        self.working.update_cart_line(cart_id, quantity)
    }

    async fn delete_cart_line(&mut self, cart_id: i32) -> Result<bool, RepositoryError> {
        Ok(self.working.carts.remove(&cart_id).is_some())
    }

    async fn delete_cart(&mut self, customer_id: i32) -> Result<u64, RepositoryError> {
        Ok(self.working.delete_cart(customer_id))
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let MemoryUnitOfWork { mut guard, working } = *self;
        *guard = working;
        debug!("memory unit of work committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        debug!("memory unit of work rolled back");
        Ok(())
    }
}
