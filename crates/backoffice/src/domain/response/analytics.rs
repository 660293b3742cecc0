use crate::model::{CustomerPurchases, ProductSales};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CustomerPurchasesResponse {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub total_purchases: Decimal,
    pub order_count: i64,
}

impl From<CustomerPurchases> for CustomerPurchasesResponse {
    fn from(value: CustomerPurchases) -> Self {
        CustomerPurchasesResponse {
            customer_id: value.customer_id,
            name: format!("{} {}", value.first_name, value.last_name),
            email: value.email,
            total_purchases: value.total_purchases,
            order_count: value.order_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductSalesResponse {
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = String)]
    pub price: Decimal,
    pub total_sold: i64,
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
}

impl From<ProductSales> for ProductSalesResponse {
    fn from(value: ProductSales) -> Self {
        ProductSalesResponse {
            product_id: value.product_id,
            product_name: value.product_name,
            price: value.price,
            total_sold: value.total_sold,
            total_revenue: value.total_revenue,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct SalesSummaryResponse {
    pub total_orders: i64,
    #[schema(value_type = String)]
    pub total_revenue: Decimal,
    #[schema(value_type = String)]
    pub average_order_value: Decimal,
    pub most_popular_product: String,
    pub most_popular_quantity: i64,
}
