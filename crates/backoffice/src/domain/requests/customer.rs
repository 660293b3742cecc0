use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(length(min = 1, max = 255))]
    pub email: String,

    pub address: Option<String>,
}

/// Absent fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub email: Option<String>,

    pub address: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateCustomerRecordRequest {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl UpdateCustomerRecordRequest {
    pub fn new(customer_id: i32, req: &UpdateCustomerRequest) -> Self {
        Self {
            customer_id,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
            email: req.email.clone(),
            address: req.address.clone(),
        }
    }
}
