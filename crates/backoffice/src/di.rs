use crate::{
    abstract_trait::{
        analytics::DynAnalyticsService,
        cart::DynCartService,
        customer::{DynCustomerCommandService, DynCustomerQueryService},
        order::{DynOrderCommandService, DynOrderQueryService},
        product::{DynProductCommandService, DynProductQueryService},
        seed::DynSeedService,
    },
    repository::Repositories,
    service::{
        AnalyticsService, CartService, CustomerCommandService, CustomerCommandServiceDeps,
        CustomerQueryService, OrderCommandService, OrderCommandServiceDeps, OrderQueryService,
        ProductCommandService, ProductCommandServiceDeps, ProductQueryService, SeedService,
        SeedServiceDeps,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub customer_query: DynCustomerQueryService,
    pub customer_command: DynCustomerCommandService,
    pub cart: DynCartService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub analytics: DynAnalyticsService,
    pub seed: DynSeedService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("customer_query", &"CustomerQueryService")
            .field("customer_command", &"CustomerCommandService")
            .field("cart", &"CartService")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("analytics", &"AnalyticsService")
            .field("seed", &"SeedService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repos: Repositories, registry: &mut Registry) -> Self {
        let Repositories {
            transactions,
            product_query: product_query_repo,
            product_command: product_command_repo,
            customer_query: customer_query_repo,
            customer_command: customer_command_repo,
            cart_query: cart_query_repo,
            order_query: order_query_repo,
            order_command: order_command_repo,
            analytics: analytics_repo,
        } = repos;

        let product_query = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            registry,
        )) as DynProductQueryService;

        let product_command = Arc::new(ProductCommandService::new(
            ProductCommandServiceDeps {
                transactions: transactions.clone(),
                query: product_query_repo.clone(),
                command: product_command_repo.clone(),
            },
            registry,
        )) as DynProductCommandService;

        let customer_query = Arc::new(CustomerQueryService::new(
            customer_query_repo.clone(),
            registry,
        )) as DynCustomerQueryService;

        let customer_command = Arc::new(CustomerCommandService::new(
            CustomerCommandServiceDeps {
                transactions: transactions.clone(),
                query: customer_query_repo,
                command: customer_command_repo.clone(),
            },
            registry,
        )) as DynCustomerCommandService;

        let cart = Arc::new(CartService::new(
            transactions.clone(),
            cart_query_repo,
            registry,
        )) as DynCartService;

        let order_query = Arc::new(OrderQueryService::new(order_query_repo.clone(), registry))
            as DynOrderQueryService;

        let order_command = Arc::new(OrderCommandService::new(
            OrderCommandServiceDeps {
                transactions,
                command: order_command_repo,
            },
            registry,
        )) as DynOrderCommandService;

        let analytics =
            Arc::new(AnalyticsService::new(analytics_repo, registry)) as DynAnalyticsService;

        let seed = Arc::new(SeedService::new(
            SeedServiceDeps {
                product_query: product_query_repo,
                product_command: product_command_repo,
                customer_command: customer_command_repo,
                order_query: order_query_repo,
                orders: order_command.clone(),
                cart: cart.clone(),
            },
            registry,
        )) as DynSeedService;

        Self {
            product_query,
            product_command,
            customer_query,
            customer_command,
            cart,
            order_query,
            order_command,
            analytics,
            seed,
        }
    }
}
