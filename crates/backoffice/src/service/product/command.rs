use crate::{
    abstract_trait::{
        product::{
            DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
        },
        unit_of_work::DynTransactionManager,
    },
    domain::{
        requests::{CreateProductRequest, UpdateStockRequest, validate_request},
        response::{ApiResponse, ProductResponse},
    },
    service::{inventory::InventoryLedger, unit_of_work::finish},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, OperationTracker},
};
use tracing::info;

#[derive(Clone)]
pub struct ProductCommandService {
    transactions: DynTransactionManager,
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
    tracker: OperationTracker,
}

pub struct ProductCommandServiceDeps {
    pub transactions: DynTransactionManager,
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(deps: ProductCommandServiceDeps, registry: &mut Registry) -> Self {
        let ProductCommandServiceDeps {
            transactions,
            query,
            command,
        } = deps;

        Self {
            transactions,
            query,
            command,
            tracker: OperationTracker::new(
                "product-command-service",
                registry,
                "ProductCommandService",
            ),
        }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🆕 Creating product '{}'", req.name);

        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "create_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", req.name.clone()),
            ],
        );

        let result = self
            .command
            .create_product(req)
            .await
            .map_err(ServiceError::Repo)
            .map(|product| {
                ApiResponse::success(
                    format!("Product '{}' added successfully", product.product_name),
                    ProductResponse::from(product),
                )
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }

    async fn delete_product(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🧨 Removing product {id}");

        let tracing_ctx = self.tracker.start(
            "delete_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = async {
            let product = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Product"))?;

            match self.command.delete_product(id).await {
                Ok(true) => Ok(ApiResponse::success(
                    format!("Product '{}' removed successfully", product.product_name),
                    (),
                )),
                Ok(false) => Err(ServiceError::not_found("Product")),
                Err(RepositoryError::ForeignKey(_)) => Err(ServiceError::InvalidReference(
                    format!(
                        "Product '{}' is referenced by existing orders",
                        product.product_name
                    ),
                )),
                Err(err) => Err(ServiceError::Repo(err)),
            }
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Delete, &result);
        result
    }

    async fn update_stock(
        &self,
        id: i32,
        req: &UpdateStockRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "update_stock",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "update_stock"),
                KeyValue::new("product.id", id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = InventoryLedger::adjust_absolute(&mut uow, id, req.stock).await;
            let product = finish(uow, outcome).await?;

            Ok::<_, ServiceError>(ApiResponse::success(
                format!("Stock of '{}' set to {}", product.product_name, product.stock_quantity),
                ProductResponse::from(product),
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Put, &result);
        result
    }
}
