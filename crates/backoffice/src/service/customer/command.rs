use crate::{
    abstract_trait::{
        customer::{
            CustomerCommandServiceTrait, DynCustomerCommandRepository, DynCustomerQueryRepository,
        },
        unit_of_work::{DynTransactionManager, DynUnitOfWork},
    },
    domain::{
        requests::{
            CreateCustomerRequest, UpdateCustomerRecordRequest, UpdateCustomerRequest,
            validate_request,
        },
        response::{ApiResponse, CustomerResponse},
    },
    service::unit_of_work::finish,
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
pub struct CustomerCommandService {
    transactions: DynTransactionManager,
    query: DynCustomerQueryRepository,
    command: DynCustomerCommandRepository,
    tracker: OperationTracker,
}

pub struct CustomerCommandServiceDeps {
    pub transactions: DynTransactionManager,
    pub query: DynCustomerQueryRepository,
    pub command: DynCustomerCommandRepository,
}

impl CustomerCommandService {
    pub fn new(deps: CustomerCommandServiceDeps, registry: &mut Registry) -> Self {
        let CustomerCommandServiceDeps {
            transactions,
            query,
            command,
        } = deps;

        Self {
            transactions,
            query,
            command,
            tracker: OperationTracker::new(
                "customer-command-service",
                registry,
                "CustomerCommandService",
            ),
        }
    }

    async fn remove_customer(uow: &mut DynUnitOfWork, id: i32) -> Result<u64, ServiceError> {
        if uow.count_customer_orders(id).await? > 0 {
            return Err(ServiceError::Conflict(
                "Cannot delete customer with existing orders".into(),
            ));
        }

        let cart_lines = uow.delete_cart(id).await?;

        if !uow.delete_customer(id).await? {
            return Err(ServiceError::not_found("Customer"));
        }

        Ok(cart_lines)
    }
}

fn duplicate_email(err: RepositoryError, email: &str) -> ServiceError {
    match err {
        RepositoryError::AlreadyExists(_) => ServiceError::DuplicateEmail(email.to_string()),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("🆕 Creating customer {}", req.email);

        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "create_customer",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("operation", "create"),
            ],
        );

        let result = self
            .command
            .create_customer(req)
            .await
            .map_err(|err| duplicate_email(err, &req.email))
            .map(|customer| {
                ApiResponse::success(
                    format!(
                        "Customer '{} {}' added successfully",
                        customer.first_name, customer.last_name
                    ),
                    CustomerResponse::from(customer),
                )
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }

    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "update_customer",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("operation", "update"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        let record = UpdateCustomerRecordRequest::new(id, req);
        let email = req.email.clone().unwrap_or_default();

        let result = match self.command.update_customer(&record).await {
            Ok(Some(customer)) => Ok(ApiResponse::success(
                format!("Customer {id} updated successfully"),
                CustomerResponse::from(customer),
            )),
            Ok(None) => Err(ServiceError::not_found("Customer")),
            Err(err) => Err(duplicate_email(err, &email)),
        };

        self.tracker
            .record_outcome(&tracing_ctx, Method::Put, &result);
        result
    }

    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🧨 Removing customer {id}");

        let tracing_ctx = self.tracker.start(
            "delete_customer",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        let result = async {
            let customer = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Customer"))?;

            let mut uow = self.transactions.begin().await?;
            let outcome = Self::remove_customer(&mut uow, id).await;
            let cart_lines = finish(uow, outcome).await?;

            info!("✅ Customer {id} removed along with {cart_lines} cart lines");
            Ok::<_, ServiceError>(ApiResponse::success(
                format!(
                    "Customer '{} {}' removed successfully",
                    customer.first_name, customer.last_name
                ),
                (),
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Delete, &result);
        result
    }
}
