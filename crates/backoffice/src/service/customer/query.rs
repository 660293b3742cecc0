use crate::{
    abstract_trait::customer::{CustomerQueryServiceTrait, DynCustomerQueryRepository},
    domain::response::{ApiResponse, CustomerResponse},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};

#[derive(Clone)]
pub struct CustomerQueryService {
    query: DynCustomerQueryRepository,
    tracker: OperationTracker,
}

impl CustomerQueryService {
    pub fn new(query: DynCustomerQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracker: OperationTracker::new(
                "customer-query-service",
                registry,
                "CustomerQueryService",
            ),
        }
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_all_customers",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = self
            .query
            .find_all()
            .await
            .map_err(ServiceError::Repo)
            .map(|customers| {
                let message = if customers.is_empty() {
                    "No customers found".to_string()
                } else {
                    format!("Found {} customers", customers.len())
                };
                ApiResponse::success(
                    message,
                    customers.into_iter().map(CustomerResponse::from).collect(),
                )
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_customer_by_id",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        let result = match self.query.find_by_id(id).await {
            Ok(Some(customer)) => Ok(ApiResponse::success(
                "Customer retrieved successfully",
                CustomerResponse::from(customer),
            )),
            Ok(None) => Err(ServiceError::not_found("Customer")),
            Err(err) => Err(ServiceError::Repo(err)),
        };

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }
}
