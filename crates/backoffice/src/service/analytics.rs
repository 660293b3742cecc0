use crate::{
    abstract_trait::analytics::{AnalyticsServiceTrait, DynAnalyticsRepository},
    domain::response::{
        ApiResponse, CustomerPurchasesResponse, ProductSalesResponse, SalesSummaryResponse,
    },
    model::{CustomerPurchases, OrderTotals, ProductSales},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Top,
    Bottom,
}

/// Highest spenders first; equal totals keep customer id order.
pub fn rank_customers(mut rows: Vec<CustomerPurchases>) -> Vec<CustomerPurchases> {
    rows.sort_by(|a, b| {
        b.total_purchases
            .cmp(&a.total_purchases)
            .then(a.customer_id.cmp(&b.customer_id))
    });
    rows
}

/// Orders products by units sold and keeps the first `n`. Ties always go to
/// the lower product id, whichever direction is requested.
pub fn rank_products(mut rows: Vec<ProductSales>, ranking: Ranking, n: usize) -> Vec<ProductSales> {
    rows.sort_by(|a, b| {
        let by_units = match ranking {
            Ranking::Top => b.total_sold.cmp(&a.total_sold),
            Ranking::Bottom => a.total_sold.cmp(&b.total_sold),
        };
        by_units.then(a.product_id.cmp(&b.product_id))
    });
    rows.truncate(n);
    rows
}

pub fn summarize(totals: &OrderTotals, sales: &[ProductSales]) -> SalesSummaryResponse {
    let average_order_value = if totals.total_orders == 0 {
        Decimal::ZERO
    } else {
        (totals.total_revenue / Decimal::from(totals.total_orders)).round_dp(2)
    };

    let best_seller = sales
        .iter()
        .filter(|p| p.total_sold > 0)
        .min_by(|a, b| {
            b.total_sold
                .cmp(&a.total_sold)
                .then(a.product_id.cmp(&b.product_id))
        });

    SalesSummaryResponse {
        total_orders: totals.total_orders,
        total_revenue: totals.total_revenue,
        average_order_value,
        most_popular_product: best_seller
            .map(|p| p.product_name.clone())
            .unwrap_or_else(|| "None".to_string()),
        most_popular_quantity: best_seller.map(|p| p.total_sold).unwrap_or(0),
    }
}

#[derive(Clone)]
pub struct AnalyticsService {
    repository: DynAnalyticsRepository,
    tracker: OperationTracker,
}

impl AnalyticsService {
    pub fn new(repository: DynAnalyticsRepository, registry: &mut Registry) -> Self {
        Self {
            repository,
            tracker: OperationTracker::new("analytics-service", registry, "AnalyticsService"),
        }
    }

    async fn ranked_products(
        &self,
        ranking: Ranking,
        n: usize,
    ) -> Result<ApiResponse<Vec<ProductSalesResponse>>, ServiceError> {
        if n == 0 {
            return Err(ServiceError::Validation(vec![
                "n: must be at least 1".into(),
            ]));
        }

        let label = match ranking {
            Ranking::Top => "Top",
            Ranking::Bottom => "Bottom",
        };

        let tracing_ctx = self.tracker.start(
            "ranked_products",
            vec![
                KeyValue::new("component", "analytics"),
                KeyValue::new("operation", label.to_lowercase()),
                KeyValue::new("analytics.n", n as i64),
            ],
        );

        let result = self
            .repository
            .product_sales()
            .await
            .map_err(ServiceError::Repo)
            .map(|rows| {
                let data: Vec<ProductSalesResponse> = rank_products(rows, ranking, n)
                    .into_iter()
                    .map(ProductSalesResponse::from)
                    .collect();

                let message = if data.is_empty() {
                    "No products found".to_string()
                } else {
                    format!("{label} {n} products by sales volume")
                };
                ApiResponse::success(message, data)
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    async fn customer_purchases(
        &self,
    ) -> Result<ApiResponse<Vec<CustomerPurchasesResponse>>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "customer_purchases",
            vec![
                KeyValue::new("component", "analytics"),
                KeyValue::new("operation", "customer_purchases"),
            ],
        );

        let result = self
            .repository
            .customer_purchases()
            .await
            .map_err(ServiceError::Repo)
            .map(|rows| {
                let data: Vec<CustomerPurchasesResponse> = rank_customers(rows)
                    .into_iter()
                    .map(CustomerPurchasesResponse::from)
                    .collect();

                let message = if data.is_empty() {
                    "No customers found".to_string()
                } else {
                    "Customers sorted by total purchases".to_string()
                };
                ApiResponse::success(message, data)
            });

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }

    async fn top_products(
        &self,
        n: usize,
    ) -> Result<ApiResponse<Vec<ProductSalesResponse>>, ServiceError> {
        self.ranked_products(Ranking::Top, n).await
    }

    async fn bottom_products(
        &self,
        n: usize,
    ) -> Result<ApiResponse<Vec<ProductSalesResponse>>, ServiceError> {
        self.ranked_products(Ranking::Bottom, n).await
    }

    async fn summary(&self) -> Result<ApiResponse<SalesSummaryResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "sales_summary",
            vec![
                KeyValue::new("component", "analytics"),
                KeyValue::new("operation", "summary"),
            ],
        );

        let result = async {
            let totals = self.repository.order_totals().await?;
            let sales = self.repository.product_sales().await?;

            Ok::<_, ServiceError>(ApiResponse::success(
                "Sales summary",
                summarize(&totals, &sales),
            ))
        }
        .await;

        self.tracker
            .record_outcome(&tracing_ctx, Method::Get, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    fn sales(product_id: i32, name: &str, total_sold: i64) -> ProductSales {
        ProductSales {
            product_id,
            product_name: name.to_string(),
            price: dec("10.00"),
            total_sold,
            total_revenue: dec("10.00") * Decimal::from(total_sold),
        }
    }

    fn purchases(customer_id: i32, total: &str) -> CustomerPurchases {
        CustomerPurchases {
            customer_id,
            first_name: format!("First{customer_id}"),
            last_name: format!("Last{customer_id}"),
            email: format!("c{customer_id}@example.com"),
            total_purchases: dec(total),
            order_count: 1,
        }
    }

    fn ids(rows: &[ProductSales]) -> Vec<i32> {
        rows.iter().map(|r| r.product_id).collect()
    }

    #[test]
    fn top_ranking_breaks_ties_by_product_id() {
        let rows = vec![
            sales(4, "Monitor", 1),
            sales(2, "Mouse", 2),
            sales(3, "Keyboard", 1),
            sales(1, "Laptop", 1),
            sales(5, "Headphones", 0),
        ];

        let top = rank_products(rows, Ranking::Top, 3);
        assert_eq!(ids(&top), vec![2, 1, 3]);
    }

    #[test]
    fn bottom_ranking_breaks_ties_by_product_id() {
        let rows = vec![
            sales(3, "Keyboard", 0),
            sales(2, "Mouse", 2),
            sales(1, "Laptop", 0),
            sales(4, "Monitor", 1),
        ];

        let bottom = rank_products(rows, Ranking::Bottom, 5);
        assert_eq!(ids(&bottom), vec![1, 3, 4, 2]);
    }

    #[test]
    fn customers_rank_by_total_then_id() {
        let ranked = rank_customers(vec![
            purchases(3, "79.99"),
            purchases(2, "229.98"),
            purchases(1, "229.98"),
            purchases(4, "0"),
        ]);

        let order: Vec<i32> = ranked.iter().map(|c| c.customer_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn summary_rounds_average_to_cents() {
        let totals = OrderTotals {
            total_orders: 3,
            total_revenue: dec("1339.95"),
        };
        let rows = vec![sales(1, "Laptop", 1), sales(2, "Mouse", 2), sales(3, "Keyboard", 2)];

        let summary = summarize(&totals, &rows);

        assert_eq!(summary.average_order_value, dec("446.65"));
        assert_eq!(summary.most_popular_product, "Mouse");
        assert_eq!(summary.most_popular_quantity, 2);
    }

    #[test]
    fn summary_without_orders_reports_none() {
        let summary = summarize(&OrderTotals::default(), &[sales(1, "Laptop", 0)]);

        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.average_order_value, Decimal::ZERO);
        assert_eq!(summary.most_popular_product, "None");
        assert_eq!(summary.most_popular_quantity, 0);
    }
}
