use crate::{
    abstract_trait::{
        cart::DynCartService,
        customer::DynCustomerCommandRepository,
        order::{DynOrderCommandService, DynOrderQueryRepository},
        product::{DynProductCommandRepository, DynProductQueryRepository},
        seed::SeedServiceTrait,
    },
    domain::{
        requests::{
            AddCartItemRequest, CreateCustomerRequest, CreateOrderItemRequest, CreateOrderRequest,
            CreateProductRequest,
        },
        response::{ApiResponse, SeedResponse},
    },
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use rust_decimal::Decimal;
use shared::{
    errors::ServiceError,
    utils::{Method, OperationTracker},
};
use tracing::info;

const SAMPLE_CUSTOMERS: [(&str, &str, &str, &str); 3] = [
    ("John", "Doe", "john.doe@email.com", "123 Main St"),
    ("Jane", "Smith", "jane.smith@email.com", "456 Oak Ave"),
    ("Bob", "Johnson", "bob.johnson@email.com", "789 Pine Rd"),
];

/// Name, description, price in cents, stock.
const SAMPLE_PRODUCTS: [(&str, &str, i64, i32); 5] = [
    ("Laptop", "High-performance laptop", 99999, 10),
    ("Mouse", "Wireless optical mouse", 2999, 50),
    ("Keyboard", "Mechanical keyboard", 7999, 25),
    ("Monitor", "24-inch LED monitor", 19999, 15),
    ("Headphones", "Noise-canceling headphones", 14999, 30),
];

/// Customer index, status, (product index, quantity) lines.
const SAMPLE_ORDERS: [(usize, &str, &[(usize, i32)]); 3] = [
    (0, "completed", &[(0, 1), (1, 1)]),
    (1, "pending", &[(3, 1), (1, 1)]),
    (2, "shipped", &[(2, 1)]),
];

/// Customer index, product index, quantity.
const SAMPLE_CART: [(usize, usize, i32); 3] = [(1, 4, 1), (2, 0, 1), (2, 2, 2)];

pub struct SeedServiceDeps {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub customer_command: DynCustomerCommandRepository,
    pub order_query: DynOrderQueryRepository,
    pub orders: DynOrderCommandService,
    pub cart: DynCartService,
}

/// Loads the demo data set. Orders go through the order engine so stock and
/// totals line up with the items.
#[derive(Clone)]
pub struct SeedService {
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
    customer_command: DynCustomerCommandRepository,
    order_query: DynOrderQueryRepository,
    orders: DynOrderCommandService,
    cart: DynCartService,
    tracker: OperationTracker,
}

impl SeedService {
    pub fn new(deps: SeedServiceDeps, registry: &mut Registry) -> Self {
        let SeedServiceDeps {
            product_query,
            product_command,
            customer_command,
            order_query,
            orders,
            cart,
        } = deps;

        Self {
            product_query,
            product_command,
            customer_command,
            order_query,
            orders,
            cart,
            tracker: OperationTracker::new("seed-service", registry, "SeedService"),
        }
    }

    async fn load_sample_data(&self) -> Result<SeedResponse, ServiceError> {
        let mut customer_ids = Vec::with_capacity(SAMPLE_CUSTOMERS.len());
        for (first_name, last_name, email, address) in SAMPLE_CUSTOMERS {
            let customer = self
                .customer_command
                .create_customer(&CreateCustomerRequest {
                    first_name: first_name.into(),
                    last_name: last_name.into(),
                    email: email.into(),
                    address: Some(address.into()),
                })
                .await?;
            customer_ids.push(customer.customer_id);
        }

        let mut product_ids = Vec::with_capacity(SAMPLE_PRODUCTS.len());
        for (name, description, cents, stock) in SAMPLE_PRODUCTS {
            let product = self
                .product_command
                .create_product(&CreateProductRequest {
                    name: name.into(),
                    description: Some(description.into()),
                    price: Decimal::new(cents, 2),
                    stock,
                })
                .await?;
            product_ids.push(product.product_id);
        }

        for (customer, status, lines) in SAMPLE_ORDERS {
            let items = lines
                .iter()
                .map(|&(product, quantity)| CreateOrderItemRequest {
                    product_id: product_ids[product],
                    quantity,
                })
                .collect();

            self.orders
                .create_order(&CreateOrderRequest {
                    customer_id: customer_ids[customer],
                    items,
                    status: Some(status.into()),
                })
                .await?;
        }

        for (customer, product, quantity) in SAMPLE_CART {
            self.cart
                .add_item(
                    customer_ids[customer],
                    &AddCartItemRequest {
                        product_id: product_ids[product],
                        quantity,
                    },
                )
                .await?;
        }

        let orders = self.order_query.find_all(None).await?.len();

        Ok(SeedResponse {
            customers: customer_ids.len(),
            products: product_ids.len(),
            orders,
            cart_lines: SAMPLE_CART.len(),
        })
    }
}

#[async_trait]
impl SeedServiceTrait for SeedService {
    async fn seed(&self) -> Result<ApiResponse<SeedResponse>, ServiceError> {
        let tracing_ctx = self.tracker.start(
            "seed_sample_data",
            vec![
                KeyValue::new("component", "seed"),
                KeyValue::new("operation", "seed"),
            ],
        );

        let result = match self.product_query.count().await {
            Ok(0) => self.load_sample_data().await.map(|seeded| {
                info!(
                    "🌱 Seeded {} customers, {} products, {} orders",
                    seeded.customers, seeded.products, seeded.orders
                );
                ApiResponse::success("Database initialized with sample data", seeded)
            }),
            Ok(_) => Ok(ApiResponse::success(
                "Database already initialized",
                SeedResponse::default(),
            )),
            Err(err) => Err(ServiceError::Repo(err)),
        };

        self.tracker
            .record_outcome(&tracing_ctx, Method::Post, &result);
        result
    }
}
