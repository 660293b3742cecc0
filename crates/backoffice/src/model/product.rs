use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock_quantity: i32,
}
