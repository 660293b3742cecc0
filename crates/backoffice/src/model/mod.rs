mod analytics;
mod cart;
mod customer;
mod order;
mod order_item;
mod product;

pub use self::analytics::{CustomerPurchases, OrderTotals, ProductSales};
pub use self::cart::{CartLine, CartLineDetail};
pub use self::customer::Customer;
pub use self::order::{Order, OrderSummary};
pub use self::order_item::{OrderItem, OrderItemDetail};
pub use self::product::Product;
