use crate::model::{Order as OrderModel, OrderItemDetail, OrderSummary};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderCreatedResponse {
    pub order_id: i32,
    #[schema(value_type = String)]
    pub total: Decimal,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer_id: i32,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub total: Decimal,
    pub status: String,
}

impl From<OrderModel> for OrderResponse {
    fn from(value: OrderModel) -> Self {
        OrderResponse {
            order_id: value.order_id,
            customer_id: value.customer_id,
            date: value.order_date,
            total: value.total_amount,
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderSummaryResponse {
    pub order_id: i32,
    pub customer_id: i32,
    pub customer: String,
    pub date: NaiveDate,
    #[schema(value_type = String)]
    pub total: Decimal,
    pub status: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(value: OrderSummary) -> Self {
        OrderSummaryResponse {
            order_id: value.order_id,
            customer_id: value.customer_id,
            customer: format!("{} {}", value.first_name, value.last_name),
            date: value.order_date,
            total: value.total_amount,
            status: value.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub order_item_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub unit_price: Decimal,
    #[schema(value_type = String)]
    pub line_total: Decimal,
}

impl From<OrderItemDetail> for OrderItemResponse {
    fn from(value: OrderItemDetail) -> Self {
        OrderItemResponse {
            order_item_id: value.order_item_id,
            product_id: value.product_id,
            product_name: value.product_name,
            quantity: value.quantity,
            unit_price: value.unit_price,
            line_total: value.unit_price * Decimal::from(value.quantity),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}
