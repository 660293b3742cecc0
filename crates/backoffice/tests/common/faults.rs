//! Unit of work that fails one chosen step, for exercising rollbacks.

use async_trait::async_trait;
use backoffice::{
    abstract_trait::{
        order::DynOrderCommandService,
        unit_of_work::{DynUnitOfWork, TransactionManagerTrait, UnitOfWorkTrait},
    },
    domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{CartLine, Order, OrderItem, Product},
    repository::memory::{MemoryStore, MemoryTransactionManager},
    service::{OrderCommandService, OrderCommandServiceDeps},
};
use prometheus_client::registry::Registry;
use shared::errors::RepositoryError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Writing an order item fails after stock was reserved.
    InsertOrderItem,
    /// Removing the order row fails after stock was released.
    DeleteOrder,
    /// Stock updates report the product row as missing.
    RefuseStockUpdate,
}

pub fn order_engine_with_fault(store: &MemoryStore, fault: Fault) -> DynOrderCommandService {
    let mut registry = Registry::default();
    let transactions = FaultyTransactions {
        inner: MemoryTransactionManager::new(store.clone()),
        fault,
    };

    Arc::new(OrderCommandService::new(
        OrderCommandServiceDeps {
            transactions: Arc::new(transactions),
            command: Arc::new(store.clone()),
        },
        &mut registry,
    ))
}

struct FaultyTransactions {
    inner: MemoryTransactionManager,
    fault: Fault,
}

#[async_trait]
impl TransactionManagerTrait for FaultyTransactions {
    async fn begin(&self) -> Result<DynUnitOfWork, RepositoryError> {
        let inner = self.inner.begin().await?;
        Ok(Box::new(FaultyUnitOfWork {
            inner,
            fault: self.fault,
        }))
    }
}

struct FaultyUnitOfWork {
    inner: DynUnitOfWork,
    fault: Fault,
}

impl FaultyUnitOfWork {
    fn fail_if(&self, step: Fault) -> Result<(), RepositoryError> {
        if self.fault == step {
            return Err(RepositoryError::Custom(format!("injected failure at {step:?}")));
        }
        Ok(())
    }
}

#[async_trait]
impl UnitOfWorkTrait for FaultyUnitOfWork {
    async fn find_product_for_update(
        &mut self,
        product_id: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        self.inner.find_product_for_update(product_id).await
    }

    async fn update_stock(&mut self, product_id: i32, delta: i32) -> Result<bool, RepositoryError> {
        if self.fault == Fault::RefuseStockUpdate {
            return Ok(false);
        }
        self.inner.update_stock(product_id, delta).await
    }

    async fn set_stock(
        &mut self,
        product_id: i32,
        stock: i32,
    ) -> Result<Option<Product>, RepositoryError> {
        self.inner.set_stock(product_id, stock).await
    }

    async fn customer_exists(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        self.inner.customer_exists(customer_id).await
    }

    async fn count_customer_orders(&mut self, customer_id: i32) -> Result<i64, RepositoryError> {
        self.inner.count_customer_orders(customer_id).await
    }

    async fn delete_customer(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        self.inner.delete_customer(customer_id).await
    }

    async fn insert_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<Order, RepositoryError> {
        self.inner.insert_order(req).await
    }

    async fn insert_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItem, RepositoryError> {
        self.fail_if(Fault::InsertOrderItem)?;
        self.inner.insert_order_item(req).await
    }

    async fn find_order_for_update(
        &mut self,
        order_id: i32,
    ) -> Result<Option<Order>, RepositoryError> {
        self.inner.find_order_for_update(order_id).await
    }

    async fn find_order_items(&mut self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        self.inner.find_order_items(order_id).await
    }

    async fn delete_order_items(&mut self, order_id: i32) -> Result<u64, RepositoryError> {
        self.inner.delete_order_items(order_id).await
    }

    async fn delete_order(&mut self, order_id: i32) -> Result<bool, RepositoryError> {
        self.fail_if(Fault::DeleteOrder)?;
        self.inner.delete_order(order_id).await
    }

    async fn find_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
    ) -> Result<Option<CartLine>, RepositoryError> {
        self.inner.find_cart_line(customer_id, product_id).await
    }

    async fn insert_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        self.inner
            .insert_cart_line(customer_id, product_id, quantity)
            .await
    }

    async fn update_cart_line(
        &mut self,
        cart_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        self.inner.update_cart_line(cart_id, quantity).await
    }

    async fn delete_cart_line(&mut self, cart_id: i32) -> Result<bool, RepositoryError> {
        self.inner.delete_cart_line(cart_id).await
    }

    async fn delete_cart(&mut self, customer_id: i32) -> Result<u64, RepositoryError> {
        self.inner.delete_cart(customer_id).await
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.inner.commit().await
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        self.inner.rollback().await
    }
}
