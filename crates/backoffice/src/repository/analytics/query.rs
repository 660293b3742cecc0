use crate::{
    abstract_trait::analytics::AnalyticsRepositoryTrait,
    model::{CustomerPurchases, OrderTotals, ProductSales},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

pub struct AnalyticsRepository {
    db: ConnectionPool,
}

impl AnalyticsRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnalyticsRepositoryTrait for AnalyticsRepository {
    async fn customer_purchases(&self) -> Result<Vec<CustomerPurchases>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CustomerPurchases>(
            r#"
            SELECT c.customer_id, c.first_name, c.last_name, c.email,
                   COALESCE(SUM(o.total_amount), 0)::NUMERIC AS total_purchases,
                   COUNT(o.order_id) AS order_count
            FROM customers c
            LEFT JOIN orders o ON o.customer_id = c.customer_id
            GROUP BY c.customer_id, c.first_name, c.last_name, c.email
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate customer purchases: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn product_sales(&self) -> Result<Vec<ProductSales>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, ProductSales>(
            r#"
            SELECT p.product_id, p.product_name, p.price,
                   COALESCE(SUM(oi.quantity), 0)::BIGINT AS total_sold,
                   COALESCE(SUM(oi.quantity * oi.unit_price), 0)::NUMERIC AS total_revenue
            FROM products p
            LEFT JOIN order_items oi ON oi.product_id = p.product_id
            GROUP BY p.product_id, p.product_name, p.price
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate product sales: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, OrderTotals>(
            r#"
            SELECT COUNT(*) AS total_orders,
                   COALESCE(SUM(total_amount), 0)::NUMERIC AS total_revenue
            FROM orders
            "#,
        )
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to aggregate order totals: {e:?}");
            RepositoryError::from(e)
        })
    }
}
