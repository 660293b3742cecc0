use crate::{
    abstract_trait::unit_of_work::{DynUnitOfWork, TransactionManagerTrait, UnitOfWorkTrait},
    domain::requests::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{CartLine, Order as OrderModel, OrderItem as OrderItemModel, Product as ProductModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct PgTransactionManager {
    db: ConnectionPool,
}

impl PgTransactionManager {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionManagerTrait for PgTransactionManager {
    async fn begin(&self) -> Result<DynUnitOfWork, RepositoryError> {
        let tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transaction: {e:?}");
            RepositoryError::transaction(e)
        })?;

        Ok(Box::new(PgUnitOfWork { tx }))
    }
}

/// Rows read `FOR UPDATE` stay locked until commit or rollback.
pub struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl UnitOfWorkTrait for PgUnitOfWork {
    async fn find_product_for_update(
        &mut self,
        product_id: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, product_name, description, price, stock_quantity
            FROM products
            WHERE product_id = $1
            FOR UPDATE
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to lock product {product_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn update_stock(&mut self, product_id: i32, delta: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET stock_quantity = stock_quantity + $2
            WHERE product_id = $1 AND stock_quantity + $2 >= 0
            "#,
        )
        .bind(product_id)
        .bind(delta)
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to apply stock delta {delta} to product {product_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() == 1)
    }

    async fn set_stock(
        &mut self,
        product_id: i32,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        sqlx::query_as::<_, ProductModel>(
            r#"
            UPDATE products
            SET stock_quantity = $2
            WHERE product_id = $1
            RETURNING product_id, product_name, description, price, stock_quantity
            "#,
        )
        .bind(product_id)
        .bind(stock)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to set stock of product {product_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn customer_exists(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        let found = sqlx::query_scalar::<_, i32>(
            "SELECT customer_id FROM customers WHERE customer_id = $1 FOR SHARE",
        )
        .bind(customer_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(RepositoryError::from)?;

        Ok(found.is_some())
    }

    async fn count_customer_orders(&mut self, customer_id: i32) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_one(&mut *self.tx)
            .await
            .map_err(RepositoryError::from)
    }

    async fn delete_customer(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete customer {customer_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (customer_id, order_date, total_amount, status)
            VALUES ($1, $2, $3, $4)
            RETURNING order_id, customer_id, order_date, total_amount, status
            "#,
        )
        .bind(req.customer_id)
        .bind(req.order_date)
        .bind(req.total_amount)
        .bind(&req.status)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert order for customer {}: {e:?}", req.customer_id);
            RepositoryError::from(e)
        })?;

        info!("📦 Inserted order ID {}", order.order_id);
        Ok(order)
    }

    async fn insert_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError> {
        sqlx::query_as::<_, OrderItemModel>(
            r#"
            INSERT INTO order_items (order_id, product_id, quantity, unit_price)
            VALUES ($1, $2, $3, $4)
            RETURNING order_item_id, order_id, product_id, quantity, unit_price
            "#,
        )
        .bind(req.order_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .bind(req.unit_price)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert item for order {}: {e:?}", req.order_id);
            RepositoryError::from(e)
        })
    }

    async fn find_order_for_update(
        &mut self,
        order_id: i32,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, customer_id, order_date, total_amount, status
            FROM orders
            WHERE order_id = $1
            FOR UPDATE
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(RepositoryError::from)
    }

    async fn find_order_items(
        &mut self,
        order_id: i32,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT order_item_id, order_id, product_id, quantity, unit_price
            FROM order_items
            WHERE order_id = $1
            ORDER BY order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(RepositoryError::from)
    }

    async fn delete_order_items(&mut self, order_id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *self.tx)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn delete_order(&mut self, order_id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(order_id)
            .execute(&mut *self.tx)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
    ) -> Result<Option<CartLine>, RepositoryError> {
        sqlx::query_as::<_, CartLine>(
            r#"
            SELECT cart_id, customer_id, product_id, quantity
            FROM carts
            WHERE customer_id = $1 AND product_id = $2
            FOR UPDATE
            "#,
        )
        .bind(customer_id)
        .bind(product_id)
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(RepositoryError::from)
    }

    async fn insert_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        sqlx::query_as::<_, CartLine>(
            r#"
            INSERT INTO carts (customer_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING cart_id, customer_id, product_id, quantity
            "#,
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to add product {product_id} to cart of customer {customer_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn update_cart_line(
        &mut self,
        cart_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        sqlx::query_as::<_, CartLine>(
            r#"
            UPDATE carts
            SET quantity = $2
            WHERE cart_id = $1
            RETURNING cart_id, customer_id, product_id, quantity
            "#,
        )
        .bind(cart_id)
        .bind(quantity)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(RepositoryError::from)
    }

    async fn delete_cart_line(&mut self, cart_id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE cart_id = $1")
            .bind(cart_id)
            .execute(&mut *self.tx)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_cart(&mut self, customer_id: i32) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&mut *self.tx)
            .await
            .map_err(RepositoryError::from)?;

        Ok(result.rows_affected())
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit transaction: {e:?}");
            RepositoryError::transaction(e)
        })
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        self.tx.rollback().await.map_err(|e| {
            error!("❌ Failed to roll back transaction: {e:?}");
            RepositoryError::transaction(e)
        })
    }
}
