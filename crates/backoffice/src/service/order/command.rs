use crate::{
    abstract_trait::{
        order::{DynOrderCommandRepository, OrderCommandServiceTrait},
        unit_of_work::{DynTransactionManager, DynUnitOfWork},
    },
    domain::{
        requests::{
            CreateOrderItemRecordRequest, CreateOrderRecordRequest, CreateOrderRequest,
            UpdateOrderStatusRequest, validate_request,
        },
        response::{ApiResponse, OrderCreatedResponse, OrderResponse},
    },
    service::{inventory::InventoryLedger, unit_of_work::finish},
};
use async_trait::async_trait;
use chrono::Local;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};
use tracing::info;

#[derive(Clone)]
pub struct OrderCommandService {
    transactions: DynTransactionManager,
    command: DynOrderCommandRepository,
    tracker: OperationTracker,
}

pub struct OrderCommandServiceDeps {
    pub transactions: DynTransactionManager,
    pub command: DynOrderCommandRepository,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps, registry: &mut Registry) -> Self {
        let OrderCommandServiceDeps {
            transactions,
            command,
        } = deps;

        Self {
            transactions,
            command,
            tracker: OperationTracker::new(
                "order-command-service",
                registry,
                "OrderCommandService",
            ),
        }
    }

    async fn place_order(
        uow: &mut DynUnitOfWork,
        req: &CreateOrderRequest,
    ) -> Result<OrderCreatedResponse, ServiceError> {
        if !uow.customer_exists(req.customer_id).await? {
            return Err(ServiceError::InvalidReference(format!(
                "Customer ID {} not found",
                req.customer_id
            )));
        }

        let mut total = Decimal::ZERO;
        let mut reserved = Vec::with_capacity(req.items.len());

        for item in &req.items {
            let unit_price = InventoryLedger::reserve(uow, item.product_id, item.quantity).await?;
            total += unit_price * Decimal::from(item.quantity);
            reserved.push((item.product_id, item.quantity, unit_price));
        }

        let order = uow
            .insert_order(&CreateOrderRecordRequest {
                customer_id: req.customer_id,
                order_date: Local::now().date_naive(),
                total_amount: total,
                status: req.status().to_string(),
            })
            .await?;

        for (product_id, quantity, unit_price) in reserved {
            uow.insert_order_item(&CreateOrderItemRecordRequest {
                order_id: order.order_id,
                product_id,
                quantity,
                unit_price,
            })
            .await?;
        }

        Ok(OrderCreatedResponse {
            order_id: order.order_id,
            total,
        })
    }

    async fn cancel_order(uow: &mut DynUnitOfWork, order_id: i32) -> Result<usize, ServiceError> {
        uow.find_order_for_update(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order"))?;

        let items = uow.find_order_items(order_id).await?;

        for item in &items {
            InventoryLedger::release(uow, item.product_id, item.quantity).await?;
        }

        uow.delete_order_items(order_id).await?;

        if !uow.delete_order(order_id).await? {
            return Err(ServiceError::not_found("Order"));
        }

        Ok(items.len())
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderCreatedResponse>, ServiceError> {
        info!(
            "🏗️ Creating order for customer_id={} with {} items",
            req.customer_id,
            req.items.len()
        );

        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "create_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "create"),
                KeyValue::new("order.customer_id", req.customer_id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = Self::place_order(&mut uow, req).await;
            let created = finish(uow, outcome).await?;

            Ok::<_, ServiceError>(ApiResponse::success(
                format!("Order created successfully with ID {}", created.order_id),
                created,
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }

    async fn update_status(
        &self,
        id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "update_order_status",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "update_status"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = match self.command.update_status(id, &req.status).await {
            Ok(Some(order)) => Ok(ApiResponse::success(
                format!("Order {id} status updated to '{}'", order.status),
                OrderResponse::from(order),
            )),
            Ok(None) => Err(ServiceError::not_found("Order")),
            Err(err) => Err(ServiceError::Repo(err)),
        };

        self.tracker
            .record_outcome(&tracing_ctx, Method::Put, &result);
        result
    }

    async fn delete_order(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order {id}");

        let tracing_ctx = self.tracker.start(
            "delete_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = Self::cancel_order(&mut uow, id).await;
            let released = finish(uow, outcome).await?;

            info!("✅ Order {id} deleted, {released} items returned to stock");
            Ok::<_, ServiceError>(ApiResponse::success(
                format!("Order {id} deleted successfully"),
                (),
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Delete, &result);
        result
    }
}
