use crate::{
    abstract_trait::order::OrderQueryRepositoryTrait,
    model::{Order as OrderModel, OrderItemDetail, OrderSummary},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(
        &self,
        customer_id: Option<i32>,
    ) -> Result<Vec<OrderSummary>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT o.order_id, o.customer_id, c.first_name, c.last_name,
                   o.order_date, o.total_amount, o.status
            FROM orders o
            JOIN customers c ON c.customer_id = o.customer_id
            WHERE ($1::INTEGER IS NULL OR o.customer_id = $1)
            ORDER BY o.order_date DESC, o.order_id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} orders", orders.len());
        Ok(orders)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<OrderSummary>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT o.order_id, o.customer_id, c.first_name, c.last_name,
                   o.order_date, o.total_amount, o.status
            FROM orders o
            JOIN customers c ON c.customer_id = o.customer_id
            WHERE o.status = $1
            ORDER BY o.order_date DESC, o.order_id DESC
            "#,
        )
        .bind(status)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders with status {status}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, customer_id, order_date, total_amount, status
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order {id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItemDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderItemDetail>(
            r#"
            SELECT oi.order_item_id, oi.product_id, p.product_name, oi.quantity, oi.unit_price
            FROM order_items oi
            JOIN products p ON p.product_id = oi.product_id
            WHERE oi.order_id = $1
            ORDER BY oi.order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
