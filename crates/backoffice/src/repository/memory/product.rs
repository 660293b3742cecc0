use super::MemoryStore;
use crate::{
    abstract_trait::product::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
    domain::requests::CreateProductRequest,
    model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let state = self.state.lock().await;

        let mut products: Vec<ProductModel> = state.products.values().cloned().collect();
        products.sort_by(|a, b| {
            a.product_name
                .cmp(&b.product_name)
                .then(a.product_id.cmp(&b.product_id))
        });
        Ok(products)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        Ok(self.state.lock().await.products.get(&id).cloned())
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Ok(self.state.lock().await.products.len() as i64)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let product = self.state.lock().await.insert_product(req);
        info!("✅ Created product ID {} ({})", product.product_id, product.product_name);
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<bool, RepositoryError> {
        self.state.lock().await.delete_product(id)
    }
}
