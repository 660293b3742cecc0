use crate::{abstract_trait::order::OrderCommandRepositoryTrait, model::Order as OrderModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn update_status(
        &self,
        order_id: i32,
        status: &str,
    ) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET status = $2
            WHERE order_id = $1
            RETURNING order_id, customer_id, order_date, total_amount, status
            "#,
        )
        .bind(order_id)
        .bind(status)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update status of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        if order.is_some() {
            info!("🔄 Order {order_id} is now '{status}'");
        }
        Ok(order)
    }
}
