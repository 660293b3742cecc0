use crate::{
    domain::requests::{CreateCustomerRequest, UpdateCustomerRecordRequest},
    model::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;
pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError>;
}

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError>;
    async fn update_customer(
        &self,
        req: &UpdateCustomerRecordRequest,
    ) -> Result<Option<CustomerModel>, RepositoryError>;
}
