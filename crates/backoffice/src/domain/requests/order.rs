use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_ORDER_STATUS: &str = "pending";

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    pub customer_id: i32,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CreateOrderItemRequest>,

    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

impl CreateOrderRequest {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(DEFAULT_ORDER_STATUS)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateOrderItemRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, max = 50))]
    pub status: String,
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams, Clone)]
#[into_params(parameter_in = Query)]
pub struct FindAllOrders {
    pub customer_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateOrderRecordRequest {
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct CreateOrderItemRecordRequest {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
}
