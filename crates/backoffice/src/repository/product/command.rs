use crate::{
    abstract_trait::product::ProductCommandRepositoryTrait,
    domain::requests::CreateProductRequest, model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (product_name, description, price, stock_quantity)
            VALUES ($1, $2, $3, $4)
            RETURNING product_id, product_name, description, price, stock_quantity
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.price)
        .bind(req.stock)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create product '{}': {e:?}", req.name);
            RepositoryError::from(e)
        })?;

        info!("✅ Created product ID {} ({})", product.product_id, product.product_name);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        info!("🧨 Deleting product: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete product {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
