use crate::{
    abstract_trait::product::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::{ApiResponse, ProductResponse},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    tracker: OperationTracker,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracker: OperationTracker::new(
                "product-query-service",
                registry,
                "ProductQueryService",
            ),
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_all_products",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = self
            .query
            .find_all()
            .await
            .map_err(ServiceError::Repo)
            .map(|products| {
                let message = if products.is_empty() {
                    "No products found".to_string()
                } else {
                    format!("Found {} products", products.len())
                };
                ApiResponse::success(
                    message,
                    products.into_iter().map(ProductResponse::from).collect(),
                )
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_product_by_id",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = match self.query.find_by_id(id).await {
            Ok(Some(product)) => Ok(ApiResponse::success(
                "Product retrieved successfully",
                ProductResponse::from(product),
            )),
            Ok(None) => Err(ServiceError::not_found("Product")),
            Err(err) => Err(ServiceError::Repo(err)),
        };

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }
}
