use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct AddCartItemRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// Without a quantity the whole line is removed.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct RemoveCartItemRequest {
    #[validate(range(min = 1))]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
}
