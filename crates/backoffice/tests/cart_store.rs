mod common;

use backoffice::domain::requests::{AddCartItemRequest, RemoveCartItemRequest};
use common::{add_customer, add_product, dec, services, stock_of};
use shared::errors::ServiceError;

fn add(product_id: i32, quantity: i32) -> AddCartItemRequest {
    AddCartItemRequest {
        product_id,
        quantity,
    }
}

fn remove(product_id: i32, quantity: Option<i32>) -> RemoveCartItemRequest {
    RemoveCartItemRequest {
        product_id,
        quantity,
    }
}

#[tokio::test]
async fn adding_the_same_product_twice_merges_lines() {
    let di = services();
    let customer = add_customer(&di, "John", "john@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    di.cart.add_item(customer, &add(mouse, 2)).await.unwrap();
    let second = di.cart.add_item(customer, &add(mouse, 3)).await.unwrap();

    assert_eq!(second.data.quantity, 5);
    assert_eq!(second.message, "Added 3 Mouse(s) to cart");

    let cart = di.cart.show_cart(customer).await.unwrap().data;
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.count, 1);
    assert_eq!(cart.items[0].quantity, 5);
    assert_eq!(cart.total, dec("149.95"));

    assert_eq!(stock_of(&di, mouse).await, 50);
}

#[tokio::test]
async fn removing_more_than_the_line_holds_deletes_it() {
    let di = services();
    let customer = add_customer(&di, "Jane", "jane@example.com").await;
    let keyboard = add_product(&di, "Keyboard", "79.99", 25).await;

    di.cart.add_item(customer, &add(keyboard, 5)).await.unwrap();

    let removed = di
        .cart
        .remove_item(customer, &remove(keyboard, Some(10)))
        .await
        .unwrap();

    assert!(removed.data.is_none());
    assert_eq!(removed.message, "Item removed from cart");

    let cart = di.cart.show_cart(customer).await.unwrap();
    assert!(cart.data.items.is_empty());
    assert_eq!(cart.message, "Cart is empty");
}

#[tokio::test]
async fn partial_removal_decreases_quantity() {
    let di = services();
    let customer = add_customer(&di, "Bob", "bob@example.com").await;
    let monitor = add_product(&di, "Monitor", "199.99", 15).await;

    di.cart.add_item(customer, &add(monitor, 4)).await.unwrap();

    let removed = di
        .cart
        .remove_item(customer, &remove(monitor, Some(1)))
        .await
        .unwrap();

    assert_eq!(removed.data.map(|line| line.quantity), Some(3));
    assert_eq!(removed.message, "Removed 1 item(s) from cart");
}

#[tokio::test]
async fn removing_without_quantity_drops_the_whole_line() {
    let di = services();
    let customer = add_customer(&di, "Ann", "ann@example.com").await;
    let monitor = add_product(&di, "Monitor", "199.99", 15).await;

    di.cart.add_item(customer, &add(monitor, 4)).await.unwrap();
    di.cart
        .remove_item(customer, &remove(monitor, None))
        .await
        .unwrap();

    assert!(di.cart.show_cart(customer).await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn removing_an_absent_line_fails() {
    let di = services();
    let customer = add_customer(&di, "Eve", "eve@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let err = di
        .cart
        .remove_item(customer, &remove(mouse, Some(1)))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Item not found in cart");
}

#[tokio::test]
async fn clearing_reports_removed_lines_and_fails_when_empty() {
    let di = services();
    let customer = add_customer(&di, "Liz", "liz@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;
    let keyboard = add_product(&di, "Keyboard", "79.99", 25).await;

    di.cart.add_item(customer, &add(mouse, 1)).await.unwrap();
    di.cart.add_item(customer, &add(keyboard, 2)).await.unwrap();

    let cleared = di.cart.clear_cart(customer).await.unwrap();
    assert_eq!(cleared.data.removed_items, 2);
    assert_eq!(cleared.message, "Cart cleared. 2 item(s) removed");

    let err = di.cart.clear_cart(customer).await.unwrap_err();
    assert_eq!(err.to_string(), "Cart is already empty");
}

#[tokio::test]
async fn adding_beyond_stock_is_rejected() {
    let di = services();
    let customer = add_customer(&di, "Tom", "tom@example.com").await;
    let laptop = add_product(&di, "Laptop", "999.99", 2).await;

    let err = di.cart.add_item(customer, &add(laptop, 3)).await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::InsufficientStock {
            requested: 3,
            available: 2,
            ..
        }
    ));
    assert!(di.cart.show_cart(customer).await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn merged_quantity_past_the_integer_limit_is_rejected() {
    let di = services();
    let customer = add_customer(&di, "Ann", "ann@example.com").await;
    let bolts = add_product(&di, "Bolt", "0.10", i32::MAX).await;

    di.cart.add_item(customer, &add(bolts, i32::MAX)).await.unwrap();
    let err = di.cart.add_item(customer, &add(bolts, i32::MAX)).await.unwrap_err();

    assert!(matches!(err, ServiceError::Validation(_)));
    let cart = di.cart.show_cart(customer).await.unwrap().data;
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, i32::MAX);
}

#[tokio::test]
async fn unknown_customer_or_product_is_rejected() {
    let di = services();
    let customer = add_customer(&di, "Sam", "sam@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let err = di.cart.add_item(customer + 50, &add(mouse, 1)).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidReference(_)));

    let err = di.cart.add_item(customer, &add(mouse + 50, 1)).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn carts_are_isolated_per_customer() {
    let di = services();
    let john = add_customer(&di, "John", "john@example.com").await;
    let jane = add_customer(&di, "Jane", "jane@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    di.cart.add_item(john, &add(mouse, 2)).await.unwrap();
    di.cart.add_item(jane, &add(mouse, 1)).await.unwrap();

    assert_eq!(di.cart.show_cart(john).await.unwrap().data.items[0].quantity, 2);
    assert_eq!(di.cart.show_cart(jane).await.unwrap().data.items[0].quantity, 1);
}
