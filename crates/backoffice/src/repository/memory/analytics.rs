use super::MemoryStore;
use crate::{
    abstract_trait::analytics::AnalyticsRepositoryTrait,
    model::{CustomerPurchases, OrderTotals, ProductSales},
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::RepositoryError;

#[async_trait]
impl AnalyticsRepositoryTrait for MemoryStore {
    async fn customer_purchases(&self) -> Result<Vec<CustomerPurchases>, RepositoryError> {
        let state = self.state.lock().await;

        Ok(state
            .customers
            .values()
            .map(|customer| {
                let orders = state
                    .orders
                    .values()
                    .filter(|o| o.customer_id == customer.customer_id);

                let (total_purchases, order_count) = orders
                    .fold((Decimal::ZERO, 0i64), |(total, count), o| {
                        (total + o.total_amount, count + 1)
                    });

                CustomerPurchases {
                    customer_id: customer.customer_id,
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    email: customer.email.clone(),
                    total_purchases,
                    order_count,
                }
            })
            .collect())
    }

    async fn product_sales(&self) -> Result<Vec<ProductSales>, RepositoryError> {
        let state = self.state.lock().await;

        Ok(state
            .products
            .values()
            .map(|product| {
                let (total_sold, total_revenue) = state
                    .order_items
                    .values()
                    .filter(|item| item.product_id == product.product_id)
                    .fold((0i64, Decimal::ZERO), |(sold, revenue), item| {
                        (
                            sold + i64::from(item.quantity),
                            revenue + item.unit_price * Decimal::from(item.quantity),
                        )
                    });

                ProductSales {
                    product_id: product.product_id,
                    product_name: product.product_name.clone(),
                    price: product.price,
                    total_sold,
                    total_revenue,
                }
            })
            .collect())
    }

    async fn order_totals(&self) -> Result<OrderTotals, RepositoryError> {
        let state = self.state.lock().await;

        Ok(OrderTotals {
            total_orders: state.orders.len() as i64,
            total_revenue: state.orders.values().map(|o| o.total_amount).sum(),
        })
    }
}
