use crate::{
    abstract_trait::customer::CustomerCommandRepositoryTrait,
    domain::requests::{CreateCustomerRequest, UpdateCustomerRecordRequest},
    model::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct CustomerCommandRepository {
    db: ConnectionPool,
}

impl CustomerCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for CustomerCommandRepository {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            INSERT INTO customers (first_name, last_name, email, address)
            VALUES ($1, $2, $3, $4)
            RETURNING customer_id, first_name, last_name, email, address
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.address)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create customer {}: {e:?}", req.email);
            RepositoryError::from(e)
        })?;

        info!("✅ Created customer ID {}", customer.customer_id);
        Ok(customer)
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRecordRequest,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let customer = sqlx::query_as::<_, CustomerModel>(
            r#"
            UPDATE customers
            SET first_name = COALESCE($2, first_name),
                last_name  = COALESCE($3, last_name),
                email      = COALESCE($4, email),
                address    = COALESCE($5, address)
            WHERE customer_id = $1
            RETURNING customer_id, first_name, last_name, email, address
            "#,
        )
        .bind(req.customer_id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(&req.address)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update customer {}: {e:?}", req.customer_id);
            RepositoryError::from(e)
        })?;

        if customer.is_some() {
            info!("🔄 Updated customer ID {}", req.customer_id);
        }
        Ok(customer)
    }
}
