use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLine {
    pub cart_id: i32,
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// A cart line joined with the live product it points at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLineDetail {
    pub cart_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
}
