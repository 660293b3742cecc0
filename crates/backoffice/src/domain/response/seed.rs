use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Clone)]
pub struct SeedResponse {
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
    pub cart_lines: usize,
}
