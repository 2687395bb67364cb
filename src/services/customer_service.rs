// src/services/customer_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::CustomerRepository,
    models::customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload},
};

#[derive(Clone)]
pub struct CustomerService {
    repo: CustomerRepository,
}

impl CustomerService {
    pub fn new(repo: CustomerRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateCustomerPayload) -> Customer {
        self.repo.insert(payload).await
    }

    pub async fn list(&self) -> Vec<Customer> {
        self.repo.list().await
    }

    pub async fn search(&self, term: &str) -> Vec<Customer> {
        self.repo.search(term).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Customer, AppError> {
        self.repo.find_by_id(id).await.ok_or(AppError::CustomerNotFound)
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateCustomerPayload,
    ) -> Result<Customer, AppError> {
        self.repo
            .apply_update(id, payload)
            .await
            .ok_or(AppError::CustomerNotFound)
    }

    /// Exclusão definitiva; agendamentos antigos guardam nome/telefone
    /// desnormalizados e não são afetados.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await == 0 {
            return Err(AppError::CustomerNotFound);
        }
        Ok(())
    }

    pub async fn active_count(&self) -> usize {
        self.repo.active().await.len()
    }
}
