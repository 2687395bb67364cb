// src/services/catalog_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ServiceRepository,
    models::catalog::{CreateServicePayload, Service, UpdateServicePayload},
};

#[derive(Clone)]
pub struct CatalogService {
    repo: ServiceRepository,
}

impl CatalogService {
    pub fn new(repo: ServiceRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateServicePayload) -> Service {
        self.repo.insert(payload).await
    }

    pub async fn list(&self) -> Vec<Service> {
        self.repo.list().await
    }

    pub async fn active(&self) -> Vec<Service> {
        self.repo.active().await
    }

    pub async fn by_category(&self, category: &str) -> Vec<Service> {
        self.repo.by_category(category).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Service, AppError> {
        self.repo.find_by_id(id).await.ok_or(AppError::ServiceNotFound)
    }

    // Edição em-lugar, sem versionamento: agendamentos antigos guardam os
    // totais derivados na época da reserva.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateServicePayload,
    ) -> Result<Service, AppError> {
        self.repo
            .apply_update(id, payload)
            .await
            .ok_or(AppError::ServiceNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await == 0 {
            return Err(AppError::ServiceNotFound);
        }
        Ok(())
    }
}
