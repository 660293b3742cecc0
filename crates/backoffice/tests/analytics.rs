mod common;

use common::{add_customer, add_product, dec, order_of, services};
use rust_decimal::Decimal;
use shared::errors::ServiceError;

#[tokio::test]
async fn empty_store_summary_has_no_best_seller() {
    let di = services();

    let summary = di.analytics.summary().await.unwrap().data;

    assert_eq!(summary.total_orders, 0);
    assert_eq!(summary.total_revenue, Decimal::ZERO);
    assert_eq!(summary.average_order_value, Decimal::ZERO);
    assert_eq!(summary.most_popular_product, "None");
    assert_eq!(summary.most_popular_quantity, 0);
}

#[tokio::test]
async fn summary_rounds_the_average_to_cents() {
    let di = services();
    let customer = add_customer(&di, "John", "john@example.com").await;
    let ten = add_product(&di, "Ten", "10.00", 10).await;
    let cent = add_product(&di, "Cent", "10.01", 10).await;

    for product in [ten, ten, cent] {
        di.order_command
            .create_order(&order_of(customer, &[(product, 1)]))
            .await
            .unwrap();
    }

    let summary = di.analytics.summary().await.unwrap().data;

    assert_eq!(summary.total_orders, 3);
    assert_eq!(summary.total_revenue, dec("30.01"));
    assert_eq!(summary.average_order_value, dec("10.00"));
    assert_eq!(summary.most_popular_product, "Ten");
    assert_eq!(summary.most_popular_quantity, 2);
}

#[tokio::test]
async fn product_rankings_break_ties_by_id() {
    let di = services();
    let customer = add_customer(&di, "Jane", "jane@example.com").await;
    let a = add_product(&di, "A", "1.00", 100).await;
    let b = add_product(&di, "B", "1.00", 100).await;
    let c = add_product(&di, "C", "1.00", 100).await;
    let d = add_product(&di, "D", "1.00", 100).await;

    di.order_command
        .create_order(&order_of(customer, &[(a, 2), (b, 5), (c, 5)]))
        .await
        .unwrap();

    let top: Vec<i32> = di
        .analytics
        .top_products(3)
        .await
        .unwrap()
        .data
        .iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(top, vec![b, c, a]);

    let bottom = di.analytics.bottom_products(2).await.unwrap().data;
    let bottom_ids: Vec<i32> = bottom.iter().map(|p| p.product_id).collect();
    assert_eq!(bottom_ids, vec![d, a]);
    assert_eq!(bottom[0].total_sold, 0);
    assert_eq!(bottom[1].total_revenue, dec("2.00"));
}

#[tokio::test]
async fn ranking_size_must_be_positive() {
    let di = services();

    let err = di.analytics.top_products(0).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn customers_are_ranked_by_total_spend() {
    let di = services();
    let john = add_customer(&di, "John", "john@example.com").await;
    let jane = add_customer(&di, "Jane", "jane@example.com").await;
    let idle = add_customer(&di, "Idle", "idle@example.com").await;
    let laptop = add_product(&di, "Laptop", "999.99", 10).await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    di.order_command
        .create_order(&order_of(john, &[(mouse, 2)]))
        .await
        .unwrap();
    di.order_command
        .create_order(&order_of(jane, &[(laptop, 1)]))
        .await
        .unwrap();
    di.order_command
        .create_order(&order_of(jane, &[(mouse, 1)]))
        .await
        .unwrap();

    let ranked = di.analytics.customer_purchases().await.unwrap().data;
    let ids: Vec<i32> = ranked.iter().map(|c| c.customer_id).collect();

    assert_eq!(ids, vec![jane, john, idle]);
    assert_eq!(ranked[0].total_purchases, dec("1029.98"));
    assert_eq!(ranked[0].order_count, 2);
    assert_eq!(ranked[0].name, "Jane Tester");
    assert_eq!(ranked[2].total_purchases, Decimal::ZERO);
}

#[tokio::test]
async fn deleted_orders_drop_out_of_the_figures() {
    let di = services();
    let customer = add_customer(&di, "Bob", "bob@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let order_id = di
        .order_command
        .create_order(&order_of(customer, &[(mouse, 3)]))
        .await
        .unwrap()
        .data
        .order_id;
    di.order_command.delete_order(order_id).await.unwrap();

    let summary = di.analytics.summary().await.unwrap().data;
    assert_eq!(summary.total_orders, 0);
    assert_eq!(summary.most_popular_product, "None");
}
