use crate::{
    abstract_trait::customer::CustomerQueryRepositoryTrait, model::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CustomerQueryRepository {
    db: ConnectionPool,
}

impl CustomerQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for CustomerQueryRepository {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customers = sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT customer_id, first_name, last_name, email, address
            FROM customers
            ORDER BY last_name, first_name, customer_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customers: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} customers", customers.len());
        Ok(customers)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        sqlx::query_as::<_, CustomerModel>(
            r#"
            SELECT customer_id, first_name, last_name, email, address
            FROM customers
            WHERE customer_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch customer {id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
