use crate::domain::{
    requests::{CreateCustomerRequest, UpdateCustomerRequest},
    response::{ApiResponse, CustomerResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;
pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
}

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update_customer(
        &self,
        id: i32,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete_customer(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
