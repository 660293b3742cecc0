use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerPurchases {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub total_purchases: Decimal,
    pub order_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductSales {
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub total_sold: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct OrderTotals {
    pub total_orders: i64,
    pub total_revenue: Decimal,
}
