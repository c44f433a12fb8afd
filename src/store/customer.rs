use async_trait::async_trait;
use tracing::debug;

use crate::domain::core::{Customer, CustomerId, CustomerPatch, NewCustomer};
use crate::domain::{position, Entity, Repository, StoreError};
use crate::infrastructure::JsonFileRepository;

use super::EntityManager;

/// 顧客ストア
pub struct CustomerStore<R = JsonFileRepository<Customer>> {
    repository: R,
}

impl<R: Repository<Customer>> CustomerStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: Repository<Customer>> EntityManager for CustomerStore<R> {
    type Entity = Customer;
    type Draft = NewCustomer;
    type Patch = CustomerPatch;

    async fn create(&mut self, draft: NewCustomer) -> Result<Customer, StoreError> {
        let customer = Customer::create(draft.customer_id, draft.name, draft.email)?;
        let mut customers = self.repository.load().await?;
        if position(&customers, customer.id()).is_some() {
            return Err(StoreError::duplicate::<Customer>(customer.id()));
        }
        customers.push(customer.clone());
        self.repository.save(&customers).await?;
        debug!(customer_id = %customer.id(), "customer created");
        Ok(customer)
    }

    async fn delete(&mut self, id: &CustomerId) -> Result<(), StoreError> {
        let mut customers = self.repository.load().await?;
        let index =
            position(&customers, id).ok_or_else(|| StoreError::not_found::<Customer>(id))?;
        customers.remove(index);
        self.repository.save(&customers).await?;
        debug!(customer_id = %id, "customer deleted");
        Ok(())
    }

    async fn find(&self, id: &CustomerId) -> Result<Customer, StoreError> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| StoreError::not_found::<Customer>(id))
    }

    async fn list(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.repository.load().await?)
    }

    async fn modify(
        &mut self,
        id: &CustomerId,
        patch: CustomerPatch,
    ) -> Result<Customer, StoreError> {
        let mut customers = self.repository.load().await?;
        let index =
            position(&customers, id).ok_or_else(|| StoreError::not_found::<Customer>(id))?;
        let customer = &mut customers[index];
        if let Some(name) = patch.name {
            customer.change_name(name);
        }
        if let Some(email) = patch.email {
            customer.change_email(email);
        }
        let customer = customer.clone();
        self.repository.save(&customers).await?;
        debug!(customer_id = %id, "customer modified");
        Ok(customer)
    }
}
