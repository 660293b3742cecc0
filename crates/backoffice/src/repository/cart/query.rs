use crate::{abstract_trait::cart::CartQueryRepositoryTrait, model::CartLineDetail};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CartQueryRepository {
    db: ConnectionPool,
}

impl CartQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartQueryRepositoryTrait for CartQueryRepository {
    async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CartLineDetail>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, CartLineDetail>(
            r#"
            SELECT c.cart_id, c.product_id, p.product_name, p.price, c.quantity
            FROM carts c
            JOIN products p ON p.product_id = c.product_id
            WHERE c.customer_id = $1
            ORDER BY p.product_name, c.product_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cart of customer {customer_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("🛒 Cart of customer {customer_id} has {} lines", lines.len());
        Ok(lines)
    }
}
