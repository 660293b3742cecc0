use super::MemoryStore;
use crate::{
    abstract_trait::customer::{CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait},
    domain::requests::{CreateCustomerRequest, UpdateCustomerRecordRequest},
    model::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
impl CustomerQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError> {
        let state = self.state.lock().await;

        let mut customers: Vec<CustomerModel> = state.customers.values().cloned().collect();
        customers.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then(a.customer_id.cmp(&b.customer_id))
        });
        Ok(customers)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<CustomerModel>, RepositoryError> {
        Ok(self.state.lock().await.customers.get(&id).cloned())
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for MemoryStore {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerModel, RepositoryError> {
        self.state.lock().await.insert_customer(req)
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRecordRequest,
    ) -> Result<Option<CustomerModel>, RepositoryError> {
        self.state.lock().await.update_customer(req)
    }
}
