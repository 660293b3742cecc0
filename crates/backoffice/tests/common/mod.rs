#![allow(dead_code)]

pub mod faults;

use backoffice::{
    di::DependenciesInject,
    domain::requests::{
        CreateCustomerRequest, CreateOrderItemRequest, CreateOrderRequest, CreateProductRequest,
    },
    repository::{Repositories, memory::MemoryStore},
};
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use std::str::FromStr;

pub fn services() -> DependenciesInject {
    services_on(&MemoryStore::new())
}

pub fn services_on(store: &MemoryStore) -> DependenciesInject {
    let mut registry = Registry::default();
    DependenciesInject::new(Repositories::memory(store.clone()), &mut registry)
}

pub fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub async fn add_product(di: &DependenciesInject, name: &str, price: &str, stock: i32) -> i32 {
    di.product_command
        .create_product(&CreateProductRequest {
            name: name.to_string(),
            description: None,
            price: dec(price),
            stock,
        })
        .await
        .unwrap()
        .data
        .id
}

pub async fn add_customer(di: &DependenciesInject, first_name: &str, email: &str) -> i32 {
    di.customer_command
        .create_customer(&CreateCustomerRequest {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: email.to_string(),
            address: None,
        })
        .await
        .unwrap()
        .data
        .id
}

pub async fn stock_of(di: &DependenciesInject, product_id: i32) -> i32 {
    di.product_query
        .find_by_id(product_id)
        .await
        .unwrap()
        .data
        .stock
}

pub fn order_of(customer_id: i32, lines: &[(i32, i32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id,
        items: lines
            .iter()
            .map(|&(product_id, quantity)| CreateOrderItemRequest {
                product_id,
                quantity,
            })
            .collect(),
        status: None,
    }
}
