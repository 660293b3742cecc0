use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderSummary {
    pub order_id: i32,
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub order_date: NaiveDate,
    pub total_amount: Decimal,
    pub status: String,
}
