mod common;

use backoffice::domain::requests::{
    AddCartItemRequest, CreateCustomerRequest, UpdateCustomerRequest, UpdateStockRequest,
};
use common::{add_customer, add_product, order_of, services, stock_of};
use shared::errors::ServiceError;

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let di = services();
    add_customer(&di, "John", "john@example.com").await;

    let err = di
        .customer_command
        .create_customer(&CreateCustomerRequest {
            first_name: "Johnny".into(),
            last_name: "Other".into(),
            email: "john@example.com".into(),
            address: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateEmail(ref email) if email == "john@example.com"));
}

#[tokio::test]
async fn partial_update_keeps_unspecified_fields() {
    let di = services();
    let id = add_customer(&di, "Jane", "jane@example.com").await;

    let updated = di
        .customer_command
        .update_customer(
            id,
            &UpdateCustomerRequest {
                address: Some("456 Oak Ave".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .data;

    assert_eq!(updated.first_name, "Jane");
    assert_eq!(updated.email, "jane@example.com");
    assert_eq!(updated.address.as_deref(), Some("456 Oak Ave"));
}

#[tokio::test]
async fn update_to_a_taken_email_is_rejected() {
    let di = services();
    add_customer(&di, "John", "john@example.com").await;
    let jane = add_customer(&di, "Jane", "jane@example.com").await;

    let err = di
        .customer_command
        .update_customer(
            jane,
            &UpdateCustomerRequest {
                email: Some("john@example.com".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DuplicateEmail(_)));
}

#[tokio::test]
async fn customer_with_orders_cannot_be_deleted() {
    let di = services();
    let customer = add_customer(&di, "Bob", "bob@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    di.order_command
        .create_order(&order_of(customer, &[(mouse, 1)]))
        .await
        .unwrap();

    let err = di
        .customer_command
        .delete_customer(customer)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    assert_eq!(err.to_string(), "Cannot delete customer with existing orders");
    assert!(di.customer_query.find_by_id(customer).await.is_ok());
}

#[tokio::test]
async fn deleting_a_customer_discards_their_cart() {
    let di = services();
    let customer = add_customer(&di, "Ann", "ann@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    di.cart
        .add_item(
            customer,
            &AddCartItemRequest {
                product_id: mouse,
                quantity: 2,
            },
        )
        .await
        .unwrap();

    let deleted = di.customer_command.delete_customer(customer).await.unwrap();
    assert_eq!(deleted.message, "Customer 'Ann Tester' removed successfully");

    assert!(matches!(
        di.customer_query.find_by_id(customer).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(di.cart.show_cart(customer).await.unwrap().data.items.is_empty());
}

#[tokio::test]
async fn ordered_products_cannot_be_deleted() {
    let di = services();
    let customer = add_customer(&di, "Eve", "eve@example.com").await;
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;
    let spare = add_product(&di, "Spare", "1.00", 1).await;

    di.order_command
        .create_order(&order_of(customer, &[(mouse, 1)]))
        .await
        .unwrap();

    let err = di.product_command.delete_product(mouse).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidReference(_)));

    di.product_command.delete_product(spare).await.unwrap();
    let err = di.product_command.delete_product(spare).await.unwrap_err();
    assert_eq!(err.to_string(), "Product not found");
}

#[tokio::test]
async fn stock_can_be_overwritten_but_not_negative() {
    let di = services();
    let mouse = add_product(&di, "Mouse", "29.99", 50).await;

    let updated = di
        .product_command
        .update_stock(mouse, &UpdateStockRequest { stock: 7 })
        .await
        .unwrap();
    assert_eq!(updated.data.stock, 7);
    assert_eq!(stock_of(&di, mouse).await, 7);

    let err = di
        .product_command
        .update_stock(mouse, &UpdateStockRequest { stock: -1 })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(stock_of(&di, mouse).await, 7);
}

#[tokio::test]
async fn listings_are_sorted_by_name() {
    let di = services();
    add_product(&di, "Webcam", "59.99", 3).await;
    add_product(&di, "Cable", "9.99", 3).await;
    add_customer(&di, "Zed", "zed@example.com").await;
    let amy = di
        .customer_command
        .create_customer(&CreateCustomerRequest {
            first_name: "Amy".into(),
            last_name: "Adams".into(),
            email: "amy@example.com".into(),
            address: None,
        })
        .await
        .unwrap()
        .data;

    let products = di.product_query.find_all().await.unwrap().data;
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cable", "Webcam"]);

    let customers = di.customer_query.find_all().await.unwrap().data;
    assert_eq!(customers[0].id, amy.id);
}
