mod common;

use backoffice::domain::requests::{FindAllOrders, UpdateOrderStatusRequest};
use backoffice::repository::memory::MemoryStore;
use common::faults::{Fault, order_engine_with_fault};
use common::{add_customer, add_product, dec, order_of, services, services_on, stock_of};
use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::errors::ServiceError;

#[tokio::test]
async fn order_total_matches_items_and_stock_is_reserved() {
    let di = services();
    let customer = add_customer(&di, "John", "john@example.com").await;
    let laptop = add_product(&di, "Laptop", "999.99", 10).await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let created = di
        .order_command
        .create_order(&order_of(customer, &[(laptop, 1), (mouse, 2)]))
        .await
        .unwrap();

    assert!(created.success);
    assert_eq!(created.data.total, dec("1059.97"));
    assert_eq!(
        created.message,
        format!("Order created successfully with ID {}", created.data.order_id)
    );
    assert_eq!(stock_of(&di, laptop).await, 9);
    assert_eq!(stock_of(&di, mouse).await, 48);

    let detail = di
        .order_query
        .find_by_id(created.data.order_id)
        .await
        .unwrap()
        .data;
    assert_eq!(detail.order.status, "pending");
    assert_eq!(detail.items.len(), 2);

    let line_sum: Decimal = detail.items.iter().map(|item| item.line_total).sum();
    assert_eq!(line_sum, detail.order.total);
}

#[tokio::test]
async fn deleting_an_order_returns_its_stock() {
    let di = services();
    let customer = add_customer(&di, "Jane", "jane@example.com").await;
    let keyboard = add_product(&di, "Keyboard", "79.99", 25).await;
    let monitor = add_product(&di, "Monitor", "199.99", 15).await;

    let order_id = di
        .order_command
        .create_order(&order_of(customer, &[(keyboard, 3), (monitor, 2)]))
        .await
        .unwrap()
        .data
        .order_id;

    let deleted = di.order_command.delete_order(order_id).await.unwrap();
    assert_eq!(deleted.message, format!("Order {order_id} deleted successfully"));

    assert_eq!(stock_of(&di, keyboard).await, 25);
    assert_eq!(stock_of(&di, monitor).await, 15);
    assert!(matches!(
        di.order_query.find_by_id(order_id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn insufficient_stock_leaves_product_untouched() {
    let di = services();
    let customer = add_customer(&di, "Bob", "bob@example.com").await;
    let headphones = add_product(&di, "Headphones", "149.99", 5).await;

    let err = di
        .order_command
        .create_order(&order_of(customer, &[(headphones, 6)]))
        .await
        .unwrap_err();

    match err {
        ServiceError::InsufficientStock {
            product,
            requested,
            available,
        } => {
            assert_eq!(product, "Headphones");
            assert_eq!(requested, 6);
            assert_eq!(available, 5);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(stock_of(&di, headphones).await, 5);
}

#[tokio::test]
async fn failing_second_item_rolls_back_the_first() {
    let di = services();
    let customer = add_customer(&di, "Ann", "ann@example.com").await;
    let plenty = add_product(&di, "Cable", "9.99", 100).await;
    let scarce = add_product(&di, "Webcam", "59.99", 1).await;

    let result = di
        .order_command
        .create_order(&order_of(customer, &[(plenty, 10), (scarce, 2)]))
        .await;

    assert!(matches!(result, Err(ServiceError::InsufficientStock { .. })));
    assert_eq!(stock_of(&di, plenty).await, 100);
    assert_eq!(stock_of(&di, scarce).await, 1);

    let orders = di
        .order_query
        .find_all(&FindAllOrders::default())
        .await
        .unwrap();
    assert!(orders.data.is_empty());
}

#[tokio::test]
async fn unknown_customer_is_rejected_before_touching_stock() {
    let di = services();
    let laptop = add_product(&di, "Laptop", "999.99", 10).await;

    let err = di
        .order_command
        .create_order(&order_of(999, &[(laptop, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidReference(_)));
    assert_eq!(err.to_string(), "Customer ID 999 not found");
    assert_eq!(stock_of(&di, laptop).await, 10);
}

#[tokio::test]
async fn unknown_product_rolls_back_earlier_reservations() {
    let di = services();
    let customer = add_customer(&di, "Eve", "eve@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let err = di
        .order_command
        .create_order(&order_of(customer, &[(mouse, 5), (mouse + 100, 1)]))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(stock_of(&di, mouse).await, 50);
}

#[tokio::test]
async fn empty_order_fails_validation() {
    let di = services();
    let customer = add_customer(&di, "Tom", "tom@example.com").await;

    let err = di
        .order_command
        .create_order(&order_of(customer, &[]))
        .await
        .unwrap_err();

    match err {
        ServiceError::Validation(messages) => {
            assert_eq!(messages, vec!["items: Order must contain at least one item"])
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn deleting_a_missing_order_is_not_found() {
    let di = services();

    let err = di.order_command.delete_order(42).await.unwrap_err();
    assert_eq!(err.to_string(), "Order not found");
}

#[tokio::test]
async fn status_updates_move_orders_out_of_pending() {
    let di = services();
    let customer = add_customer(&di, "Liz", "liz@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let first = di
        .order_command
        .create_order(&order_of(customer, &[(mouse, 1)]))
        .await
        .unwrap()
        .data
        .order_id;
    let second = di
        .order_command
        .create_order(&order_of(customer, &[(mouse, 2)]))
        .await
        .unwrap()
        .data
        .order_id;

    let updated = di
        .order_command
        .update_status(
            first,
            &UpdateOrderStatusRequest {
                status: "shipped".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.data.status, "shipped");
    assert_eq!(
        updated.message,
        format!("Order {first} status updated to 'shipped'")
    );

    let pending = di.order_query.find_pending().await.unwrap().data;
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].order_id, second);

    let missing = di
        .order_command
        .update_status(
            9999,
            &UpdateOrderStatusRequest {
                status: "shipped".into(),
            },
        )
        .await;
    assert!(matches!(missing, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn orders_can_be_filtered_by_customer() {
    let di = services();
    let john = add_customer(&di, "John", "john@example.com").await;
    let jane = add_customer(&di, "Jane", "jane@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    for customer in [john, jane, jane] {
        di.order_command
            .create_order(&order_of(customer, &[(mouse, 1)]))
            .await
            .unwrap();
    }

    let janes = di
        .order_query
        .find_all(&FindAllOrders {
            customer_id: Some(jane),
        })
        .await
        .unwrap()
        .data;

    assert_eq!(janes.len(), 2);
    assert!(janes.iter().all(|order| order.customer_id == jane));
}

#[tokio::test]
async fn failed_item_write_returns_reserved_stock() {
    let store = MemoryStore::new();
    let di = services_on(&store);
    let customer = add_customer(&di, "John", "john@example.com").await;
    let laptop = add_product(&di, "Laptop", "999.99", 10).await;
    let engine = order_engine_with_fault(&store, Fault::InsertOrderItem);

    let err = engine
        .create_order(&order_of(customer, &[(laptop, 4)]))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(_)));
    assert_eq!(stock_of(&di, laptop).await, 10);
    let orders = di
        .order_query
        .find_all(&FindAllOrders { customer_id: None })
        .await
        .unwrap()
        .data;
    assert!(orders.is_empty());
}

#[tokio::test]
async fn failed_order_removal_keeps_stock_reserved() {
    let store = MemoryStore::new();
    let di = services_on(&store);
    let customer = add_customer(&di, "Jane", "jane@example.com").await;
    let keyboard = add_product(&di, "Keyboard", "79.99", 25).await;
    let order_id = di
        .order_command
        .create_order(&order_of(customer, &[(keyboard, 3)]))
        .await
        .unwrap()
        .data
        .order_id;
    let engine = order_engine_with_fault(&store, Fault::DeleteOrder);

    let err = engine.delete_order(order_id).await.unwrap_err();

    assert!(matches!(err, ServiceError::Repo(_)));
    assert_eq!(stock_of(&di, keyboard).await, 22);
    let detail = di.order_query.find_by_id(order_id).await.unwrap().data;
    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].quantity, 3);
}

#[tokio::test]
async fn refused_stock_update_reports_missing_product() {
    let store = MemoryStore::new();
    let di = services_on(&store);
    let customer = add_customer(&di, "Tom", "tom@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;
    let engine = order_engine_with_fault(&store, Fault::RefuseStockUpdate);

    let err = engine
        .create_order(&order_of(customer, &[(mouse, 2)]))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(err.to_string(), format!("Product ID {mouse} not found"));
    assert_eq!(stock_of(&di, mouse).await, 50);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn reservations_are_all_or_nothing(
        lines in prop::collection::vec((0i32..20, 1i32..25, 1i64..100_000), 1..4)
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let di = services();
            let customer = add_customer(&di, "Prop", "prop@example.com").await;

            let mut products = Vec::new();
            for (index, (stock, quantity, cents)) in lines.iter().enumerate() {
                let price = Decimal::new(*cents, 2).to_string();
                let id = add_product(&di, &format!("Item {index}"), &price, *stock).await;
                products.push((id, *stock, *quantity, Decimal::new(*cents, 2)));
            }

            let request_lines: Vec<(i32, i32)> =
                products.iter().map(|&(id, _, quantity, _)| (id, quantity)).collect();
            let fits = products.iter().all(|&(_, stock, quantity, _)| quantity <= stock);

            let result = di
                .order_command
                .create_order(&order_of(customer, &request_lines))
                .await;

            if fits {
                let created = result.unwrap().data;
                let expected: Decimal = products
                    .iter()
                    .map(|&(_, _, quantity, price)| price * Decimal::from(quantity))
                    .sum();
                assert_eq!(created.total, expected);

                for &(id, stock, quantity, _) in &products {
                    assert_eq!(stock_of(&di, id).await, stock - quantity);
                }

                di.order_command.delete_order(created.order_id).await.unwrap();
            } else {
                assert!(matches!(result, Err(ServiceError::InsufficientStock { .. })));
            }

            for &(id, stock, _, _) in &products {
                assert_eq!(stock_of(&di, id).await, stock);
            }
        });
    }
}
