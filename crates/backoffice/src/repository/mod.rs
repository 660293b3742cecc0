mod analytics;
mod cart;
mod customer;
pub mod memory;
mod order;
mod product;
mod unit_of_work;

pub use self::analytics::AnalyticsRepository;
pub use self::cart::CartQueryRepository;
pub use self::customer::{CustomerCommandRepository, CustomerQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::unit_of_work::{PgTransactionManager, PgUnitOfWork};

use crate::abstract_trait::{
    analytics::DynAnalyticsRepository,
    cart::DynCartQueryRepository,
    customer::{DynCustomerCommandRepository, DynCustomerQueryRepository},
    order::{DynOrderCommandRepository, DynOrderQueryRepository},
    product::{DynProductCommandRepository, DynProductQueryRepository},
    unit_of_work::DynTransactionManager,
};
use self::memory::{MemoryStore, MemoryTransactionManager};
use shared::config::ConnectionPool;
use std::sync::Arc;

/// Every repository the services need, backed by one store.
#[derive(Clone)]
pub struct Repositories {
    pub transactions: DynTransactionManager,
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub customer_query: DynCustomerQueryRepository,
    pub customer_command: DynCustomerCommandRepository,
    pub cart_query: DynCartQueryRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub analytics: DynAnalyticsRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            transactions: Arc::new(PgTransactionManager::new(pool.clone())),
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            customer_query: Arc::new(CustomerQueryRepository::new(pool.clone())),
            customer_command: Arc::new(CustomerCommandRepository::new(pool.clone())),
            cart_query: Arc::new(CartQueryRepository::new(pool.clone())),
            order_query: Arc::new(OrderQueryRepository::new(pool.clone())),
            order_command: Arc::new(OrderCommandRepository::new(pool.clone())),
            analytics: Arc::new(AnalyticsRepository::new(pool)),
        }
    }

    pub fn memory(store: MemoryStore) -> Self {
        Self {
            transactions: Arc::new(MemoryTransactionManager::new(store.clone())),
            product_query: Arc::new(store.clone()),
            product_command: Arc::new(store.clone()),
            customer_query: Arc::new(store.clone()),
            customer_command: Arc::new(store.clone()),
            cart_query: Arc::new(store.clone()),
            order_query: Arc::new(store.clone()),
            order_command: Arc::new(store.clone()),
            analytics: Arc::new(store),
        }
    }
}
