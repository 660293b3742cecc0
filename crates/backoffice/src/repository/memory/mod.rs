//! In-process store with the same constraints as the Postgres schema.
//!
//! A single async mutex guards the whole state. Query and command
//! repositories hold it for one call; a unit of work holds it until it
//! finishes, working on a copy that replaces the shared state on commit.

mod analytics;
mod cart;
mod customer;
mod order;
mod product;
mod unit_of_work;

pub use self::unit_of_work::{MemoryTransactionManager, MemoryUnitOfWork};

use crate::{
    domain::requests::{
        CreateCustomerRequest, CreateOrderItemRecordRequest, CreateOrderRecordRequest,
        CreateProductRequest, UpdateCustomerRecordRequest,
    },
    model::{
        CartLine, CartLineDetail, Customer as CustomerModel, Order as OrderModel,
        OrderItem as OrderItemModel, OrderItemDetail, OrderSummary, Product as ProductModel,
    },
};
use shared::errors::RepositoryError;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    products: BTreeMap<i32, ProductModel>,
    customers: BTreeMap<i32, CustomerModel>,
    orders: BTreeMap<i32, OrderModel>,
    order_items: BTreeMap<i32, OrderItemModel>,
    carts: BTreeMap<i32, CartLine>,
    sequences: Sequences,
}

#[derive(Debug, Clone, Default)]
struct Sequences {
    product: i32,
    customer: i32,
    order: i32,
    order_item: i32,
    cart: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemoryState {
    fn insert_product(&mut self, req: &CreateProductRequest) -> ProductModel {
        let product = ProductModel {
            product_id: next_id(&mut self.sequences.product),
            product_name: req.name.clone(),
            description: req.description.clone(),
            price: req.price,
            stock_quantity: req.stock,
        };
        self.products.insert(product.product_id, product.clone());
        product
    }

    fn delete_product(&mut self, product_id: i32) -> Result<bool, RepositoryError> {
        if !self.products.contains_key(&product_id) {
            return Ok(false);
        }
        if self.order_items.values().any(|item| item.product_id == product_id) {
            return Err(RepositoryError::ForeignKey(
                "order_items_product_id_fkey".into(),
            ));
        }

        self.carts.retain(|_, line| line.product_id != product_id);
        self.products.remove(&product_id);
        Ok(true)
    }

    fn update_stock(&mut self, product_id: i32, delta: i32) -> bool {
        match self.products.get_mut(&product_id) {
            Some(product) => match product.stock_quantity.checked_add(delta) {
                Some(stock) if stock >= 0 => {
                    product.stock_quantity = stock;
                    true
                }
                _ => false,
            },
            None => false,
        }
    }

    fn set_stock(
        &mut self,
        product_id: i32,
        stock: i32,
    ) -> Result<Option<ProductModel>, RepositoryError> {
        if stock < 0 {
            return Err(RepositoryError::Custom(
                "products_stock_quantity_check".into(),
            ));
        }

        Ok(self.products.get_mut(&product_id).map(|product| {
            product.stock_quantity = stock;
            product.clone()
        }))
    }

    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.customers
            .values()
            .any(|c| c.email == email && Some(c.customer_id) != except)
    }

    fn insert_customer(
        &mut self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        if self.email_taken(&req.email, None) {
            return Err(RepositoryError::AlreadyExists("customers_email_key".into()));
        }

        let customer = CustomerModel {
            customer_id: next_id(&mut self.sequences.customer),
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            email: req.email.clone(),
            address: req.address.clone(),
        };
        self.customers.insert(customer.customer_id, customer.clone());
        Ok(customer)
    }

    fn update_customer(
        &mut self,
        req: &UpdateCustomerRecordRequest,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        if let Some(email) = &req.email {
            if self.email_taken(email, Some(req.customer_id)) {
                return Err(RepositoryError::AlreadyExists("customers_email_key".into()));
            }
        }

        let Some(customer) = self.customers.get_mut(&req.customer_id) else {
            return Ok(None);
        };

        if let Some(first_name) = &req.first_name {
            customer.first_name = first_name.clone();
        }
        if let Some(last_name) = &req.last_name {
            customer.last_name = last_name.clone();
        }
        if let Some(email) = &req.email {
            customer.email = email.clone();
        }
        if let Some(address) = &req.address {
            customer.address = Some(address.clone());
        }

        Ok(Some(customer.clone()))
    }

    fn count_customer_orders(&self, customer_id: i32) -> i64 {
        self.orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .count() as i64
    }

    fn delete_customer(&mut self, customer_id: i32) -> Result<bool, RepositoryError> {
        if !self.customers.contains_key(&customer_id) {
            return Ok(false);
        }
        if self.count_customer_orders(customer_id) > 0 {
            return Err(RepositoryError::ForeignKey("orders_customer_id_fkey".into()));
        }

        self.carts.retain(|_, line| line.customer_id != customer_id);
        self.customers.remove(&customer_id);
        Ok(true)
    }

    fn insert_order(
        &mut self,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        if !self.customers.contains_key(&req.customer_id) {
            return Err(RepositoryError::ForeignKey("orders_customer_id_fkey".into()));
        }

        let order = OrderModel {
            order_id: next_id(&mut self.sequences.order),
            customer_id: req.customer_id,
            order_date: req.order_date,
            total_amount: req.total_amount,
            status: req.status.clone(),
        };
        self.orders.insert(order.order_id, order.clone());
        Ok(order)
    }

    fn insert_order_item(
        &mut self,
        req: &CreateOrderItemRecordRequest,
    ) -> Result<OrderItemModel, RepositoryError> {
        if !self.orders.contains_key(&req.order_id) {
            return Err(RepositoryError::ForeignKey("order_items_order_id_fkey".into()));
        }
        if !self.products.contains_key(&req.product_id) {
            return Err(RepositoryError::ForeignKey(
                "order_items_product_id_fkey".into(),
            ));
        }

        let item = OrderItemModel {
            order_item_id: next_id(&mut self.sequences.order_item),
            order_id: req.order_id,
            product_id: req.product_id,
            quantity: req.quantity,
            unit_price: req.unit_price,
        };
        self.order_items.insert(item.order_item_id, item.clone());
        Ok(item)
    }

    fn order_items_of(&self, order_id: i32) -> Vec<OrderItemModel> {
        self.order_items
            .values()
            .filter(|item| item.order_id == order_id)
            .cloned()
            .collect()
    }

    fn delete_order_items(&mut self, order_id: i32) -> u64 {
        let before = self.order_items.len();
        self.order_items.retain(|_, item| item.order_id != order_id);
        (before - self.order_items.len()) as u64
    }

    fn delete_order(&mut self, order_id: i32) -> bool {
        if self.orders.remove(&order_id).is_none() {
            return false;
        }
        self.delete_order_items(order_id);
        true
    }

    fn order_summaries<F>(&self, predicate: F) -> Vec<OrderSummary>
    where
        F: Fn(&OrderModel) -> bool,
    {
        let mut summaries: Vec<OrderSummary> = self
            .orders
            .values()
            .filter(|order| predicate(order))
            .filter_map(|order| {
                self.customers
                    .get(&order.customer_id)
                    .map(|customer| OrderSummary {
                        order_id: order.order_id,
                        customer_id: order.customer_id,
                        first_name: customer.first_name.clone(),
                        last_name: customer.last_name.clone(),
                        order_date: order.order_date,
                        total_amount: order.total_amount,
                        status: order.status.clone(),
                    })
            })
            .collect();

        summaries.sort_by(|a, b| {
            b.order_date
                .cmp(&a.order_date)
                .then(b.order_id.cmp(&a.order_id))
        });
        summaries
    }

    fn order_item_details(&self, order_id: i32) -> Vec<OrderItemDetail> {
        self.order_items_of(order_id)
            .into_iter()
            .filter_map(|item| {
                self.products.get(&item.product_id).map(|product| OrderItemDetail {
                    order_item_id: item.order_item_id,
                    product_id: item.product_id,
                    product_name: product.product_name.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
            })
            .collect()
    }

    fn find_cart_line(&self, customer_id: i32, product_id: i32) -> Option<CartLine> {
        self.carts
            .values()
            .find(|line| line.customer_id == customer_id && line.product_id == product_id)
            .cloned()
    }

    fn insert_cart_line(
        &mut self,
        customer_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<CartLine, RepositoryError> {
        if !self.customers.contains_key(&customer_id) {
            return Err(RepositoryError::ForeignKey("carts_customer_id_fkey".into()));
        }
        if !self.products.contains_key(&product_id) {
            return Err(RepositoryError::ForeignKey("carts_product_id_fkey".into()));
        }
        if self.find_cart_line(customer_id, product_id).is_some() {
            return Err(RepositoryError::AlreadyExists(
                "carts_customer_product_key".into(),
            ));
        }

        let line = CartLine {
            cart_id: next_id(&mut self.sequences.cart),
            customer_id,
            product_id,
            quantity,
        };
        self.carts.insert(line.cart_id, line.clone());
        Ok(line)
    }

    fn update_cart_line(&mut self, cart_id: i32, quantity: i32) -> Result<CartLine, RepositoryError> {
        let line = self.carts.get_mut(&cart_id).ok_or(RepositoryError::NotFound)?;
        line.quantity = quantity;
        Ok(line.clone())
    }

    fn delete_cart(&mut self, customer_id: i32) -> u64 {
        let before = self.carts.len();
        self.carts.retain(|_, line| line.customer_id != customer_id);
        (before - self.carts.len()) as u64
    }

    fn cart_details(&self, customer_id: i32) -> Vec<CartLineDetail> {
        let mut lines: Vec<CartLineDetail> = self
            .carts
            .values()
            .filter(|line| line.customer_id == customer_id)
            .filter_map(|line| {
                self.products.get(&line.product_id).map(|product| CartLineDetail {
                    cart_id: line.cart_id,
                    product_id: line.product_id,
                    product_name: product.product_name.clone(),
                    price: product.price,
                    quantity: line.quantity,
                })
            })
            .collect();

        lines.sort_by(|a, b| {
            a.product_name
                .cmp(&b.product_name)
                .then(a.product_id.cmp(&b.product_id))
        });
        lines
    }
}
