use crate::{
    abstract_trait::{
        cart::{CartServiceTrait, DynCartQueryRepository},
        unit_of_work::{DynTransactionManager, DynUnitOfWork},
    },
    domain::{
        requests::{AddCartItemRequest, RemoveCartItemRequest, validate_request},
        response::{ApiResponse, CartClearedResponse, CartLineResponse, CartResponse},
    },
    service::unit_of_work::finish,
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
pub struct CartService {
    transactions: DynTransactionManager,
    query: DynCartQueryRepository,
    tracker: OperationTracker,
}

impl CartService {
    pub fn new(
        transactions: DynTransactionManager,
        query: DynCartQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        Self {
            transactions,
            query,
            tracker: OperationTracker::new("cart-service", registry, "CartService"),
        }
    }

    /// Stock is only checked here, never reserved.
    async fn put_in_cart(
        uow: &mut DynUnitOfWork,
        customer_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<(CartLineResponse, String), ServiceError> {
        if !uow.customer_exists(customer_id).await? {
            return Err(ServiceError::InvalidReference(format!(
                "Customer ID {customer_id} not found"
            )));
        }

        let product = uow
            .find_product_for_update(req.product_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Product ID {} not found", req.product_id))
            })?;

        if req.quantity > product.stock_quantity {
            return Err(ServiceError::InsufficientStock {
                product: product.product_name,
                requested: req.quantity,
                available: product.stock_quantity,
            });
        }

        let line = match uow.find_cart_line(customer_id, req.product_id).await? {
            Some(existing) => {
                let quantity = existing.quantity.checked_add(req.quantity).ok_or_else(|| {
                    ServiceError::Validation(vec![format!(
                        "quantity: cart already holds {} {}(s), adding {} exceeds the maximum",
                        existing.quantity, product.product_name, req.quantity
                    )])
                })?;
                uow.update_cart_line(existing.cart_id, quantity).await?
            }
            None => {
                uow.insert_cart_line(customer_id, req.product_id, req.quantity)
                    .await?
            }
        };

        let message = format!("Added {} {}(s) to cart", req.quantity, product.product_name);
        Ok((CartLineResponse::from(line), message))
    }

    async fn take_from_cart(
        uow: &mut DynUnitOfWork,
        customer_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<(Option<CartLineResponse>, String), ServiceError> {
        let line = uow
            .find_cart_line(customer_id, req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Item not found in cart".into()))?;

        match req.quantity {
            Some(quantity) if quantity < line.quantity => {
                let updated = uow
                    .update_cart_line(line.cart_id, line.quantity - quantity)
                    .await?;
                Ok((
                    Some(CartLineResponse::from(updated)),
                    format!("Removed {quantity} item(s) from cart"),
                ))
            }
            _ => {
                uow.delete_cart_line(line.cart_id).await?;
                Ok((None, "Item removed from cart".to_string()))
            }
        }
    }

    async fn empty_cart(uow: &mut DynUnitOfWork, customer_id: i32) -> Result<u64, ServiceError> {
        let removed = uow.delete_cart(customer_id).await?;
        if removed == 0 {
            return Err(ServiceError::NotFound("Cart is already empty".into()));
        }
        Ok(removed)
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn show_cart(&self, customer_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "show_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "show"),
                KeyValue::new("cart.customer_id", customer_id.to_string()),
            ],
        );

        let result = self
            .query
            .find_by_customer(customer_id)
            .await
            .map_err(ServiceError::Repo)
            .map(|lines| {
                let cart = CartResponse::from(lines);
                let message = if cart.items.is_empty() {
                    "Cart is empty".to_string()
                } else {
                    format!("Cart has {} item(s)", cart.count)
                };
                ApiResponse::success(message, cart)
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn add_item(
        &self,
        customer_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartLineResponse>, ServiceError> {
        info!(
            "🛒 Adding {} x product {} to cart of customer {customer_id}",
            req.quantity, req.product_id
        );

        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "add_to_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "add"),
                KeyValue::new("cart.customer_id", customer_id.to_string()),
                KeyValue::new("cart.product_id", req.product_id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = Self::put_in_cart(&mut uow, customer_id, req).await;
            let (line, message) = finish(uow, outcome).await?;
            Ok::<_, ServiceError>(ApiResponse::success(message, line))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }

    async fn remove_item(
        &self,
        customer_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<ApiResponse<Option<CartLineResponse>>, ServiceError> {
        validate_request(req)?;

        let tracing_ctx = self.tracker.start(
            "remove_from_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "remove"),
                KeyValue::new("cart.customer_id", customer_id.to_string()),
                KeyValue::new("cart.product_id", req.product_id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = Self::take_from_cart(&mut uow, customer_id, req).await;
            let (line, message) = finish(uow, outcome).await?;
            Ok::<_, ServiceError>(ApiResponse::success(message, line))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }

    async fn clear_cart(
        &self,
        customer_id: i32,
    ) -> Result<ApiResponse<CartClearedResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "clear_cart",
            vec![
                KeyValue::new("component", "cart"),
                KeyValue::new("operation", "clear"),
                KeyValue::new("cart.customer_id", customer_id.to_string()),
            ],
        );

        let result = async {
            let mut uow = self.transactions.begin().await?;
            let outcome = Self::empty_cart(&mut uow, customer_id).await;
            let removed_items = finish(uow, outcome).await?;
            Ok::<_, ServiceError>(ApiResponse::success(
                format!("Cart cleared. {removed_items} item(s) removed"),
                CartClearedResponse { removed_items },
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Delete, &result);
        result
    }
}
