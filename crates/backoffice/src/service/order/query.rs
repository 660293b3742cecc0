use crate::{
    abstract_trait::order::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::{
        requests::{DEFAULT_ORDER_STATUS, FindAllOrders},
        response::{
            ApiResponse, OrderDetailResponse, OrderItemResponse, OrderResponse,
            OrderSummaryResponse,
        },
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};
use tracing::info;

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracker: OperationTracker,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracker: OperationTracker::new("order-query-service", registry, "OrderQueryService"),
        }
    }
}

fn listing_message(orders: &[OrderSummaryResponse], empty: &str, found: &str) -> String {
    if orders.is_empty() {
        empty.to_string()
    } else {
        format!("{found} ({})", orders.len())
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponse<Vec<OrderSummaryResponse>>, ServiceError> {
        info!("🔍 Listing orders, customer filter: {:?}", req.customer_id);

        let tracing_ctx = self.tracker.start(
            "find_all_orders",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let result = self
            .query
            .find_all(req.customer_id)
            .await
            .map_err(ServiceError::Repo)
            .map(|orders| {
                let data: Vec<OrderSummaryResponse> =
                    orders.into_iter().map(OrderSummaryResponse::from).collect();
                ApiResponse::success(listing_message(&data, "No orders found", "Orders found"), data)
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn find_pending(&self) -> Result<ApiResponse<Vec<OrderSummaryResponse>>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_pending_orders",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "find_pending"),
            ],
        );

        let result = self
            .query
            .find_by_status(DEFAULT_ORDER_STATUS)
            .await
            .map_err(ServiceError::Repo)
            .map(|orders| {
                let data: Vec<OrderSummaryResponse> =
                    orders.into_iter().map(OrderSummaryResponse::from).collect();
                ApiResponse::success(
                    listing_message(&data, "No pending orders found", "Pending orders found"),
                    data,
                )
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "find_order_by_id",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "find_by_id"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        let result = async {
            let order = self
                .query
                .find_by_id(id)
                .await?
                .ok_or_else(|| ServiceError::not_found("Order"))?;

            let items = self
                .query
                .find_items(id)
                .await?
                .into_iter()
                .map(OrderItemResponse::from)
                .collect();

            Ok::<_, ServiceError>(ApiResponse::success(
                "Order retrieved successfully",
                OrderDetailResponse {
                    order: OrderResponse::from(order),
                    items,
                },
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }
}
