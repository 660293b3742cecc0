use crate::model::Customer as CustomerModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CustomerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: Option<String>,
}

impl From<CustomerModel> for CustomerResponse {
    fn from(value: CustomerModel) -> Self {
        CustomerResponse {
            id: value.customer_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            address: value.address,
        }
    }
}
