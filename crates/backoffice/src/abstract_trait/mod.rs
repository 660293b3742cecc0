pub mod analytics;
pub mod cart;
pub mod customer;
pub mod order;
pub mod product;
pub mod seed;
pub mod unit_of_work;
