use crate::model::{CartLine as CartLineModel, CartLineDetail};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub cart_id: i32,
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub quantity: i32,
    #[schema(value_type = String)]
    pub total: Decimal,
}

impl From<CartLineDetail> for CartItemResponse {
    fn from(value: CartLineDetail) -> Self {
        CartItemResponse {
            cart_id: value.cart_id,
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            quantity: value.quantity,
            total: value.price * Decimal::from(value.quantity),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    #[schema(value_type = String)]
    pub total: Decimal,
    pub count: usize,
}

impl From<Vec<CartLineDetail>> for CartResponse {
    fn from(lines: Vec<CartLineDetail>) -> Self {
        let items: Vec<CartItemResponse> = lines.into_iter().map(CartItemResponse::from).collect();
        let total = items.iter().map(|item| item.total).sum();

        CartResponse {
            count: items.len(),
            items,
            total,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub cart_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl From<CartLineModel> for CartLineResponse {
    fn from(value: CartLineModel) -> Self {
        CartLineResponse {
            cart_id: value.cart_id,
            customer_id: value.customer_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartClearedResponse {
    pub removed_items: u64,
}
