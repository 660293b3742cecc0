pub mod analytics;
pub mod cart;
pub mod customer;
pub mod inventory;
pub mod order;
pub mod product;
pub mod seed;
mod unit_of_work;

pub use self::analytics::AnalyticsService;
pub use self::cart::CartService;
pub use self::customer::{CustomerCommandService, CustomerCommandServiceDeps, CustomerQueryService};
pub use self::inventory::InventoryLedger;
pub use self::order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService};
pub use self::product::{ProductCommandService, ProductCommandServiceDeps, ProductQueryService};
pub use self::seed::{SeedService, SeedServiceDeps};
