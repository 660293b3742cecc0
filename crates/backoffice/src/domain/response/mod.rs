mod analytics;
mod cart;
mod customer;
mod order;
mod product;
mod seed;
mod system;

pub use self::analytics::{CustomerPurchasesResponse, ProductSalesResponse, SalesSummaryResponse};
pub use self::cart::{CartClearedResponse, CartItemResponse, CartLineResponse, CartResponse};
pub use self::customer::CustomerResponse;
pub use self::order::{
    OrderCreatedResponse, OrderDetailResponse, OrderItemResponse, OrderResponse,
    OrderSummaryResponse,
};
pub use self::product::ProductResponse;
pub use self::seed::SeedResponse;
pub use self::system::{ApiInfoResponse, HealthResponse};
pub use shared::domain::ApiResponse;
