// src/db/service_repo.rs

use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::catalog::{CreateServicePayload, Service, UpdateServicePayload},
};

#[derive(Clone, Default)]
pub struct ServiceRepository {
    services: Collection<Service>,
}

impl ServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, payload: CreateServicePayload) -> Service {
        let service = Service {
            id: Uuid::new_v4(),
            name: payload.name,
            category: payload.category,
            price: payload.price,
            duration: payload.duration,
            description: payload.description,
            is_active: payload.is_active,
        };
        self.services.insert(service).await
    }

    pub async fn list(&self) -> Vec<Service> {
        self.services.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Service> {
        self.services.find_one(|s| s.id == id).await
    }

    /// Resolve ids na ordem da seleção; `None` quando algum id não existe.
    /// A ordem importa: o rótulo do agendamento é montado nessa sequência.
    pub async fn find_many(&self, ids: &[Uuid]) -> Option<Vec<Service>> {
        let all = self.services.all().await;
        ids.iter()
            .map(|id| all.iter().find(|s| s.id == *id).cloned())
            .collect()
    }

    pub async fn active(&self) -> Vec<Service> {
        self.services.select(|s| s.is_active).await
    }

    pub async fn by_category(&self, category: &str) -> Vec<Service> {
        let category = category.to_owned();
        self.services
            .select(|s| s.category == category && s.is_active)
            .await
    }

    pub async fn apply_update(&self, id: Uuid, payload: UpdateServicePayload) -> Option<Service> {
        self.services
            .update_one(
                |s| s.id == id,
                |s| {
                    if let Some(name) = payload.name {
                        s.name = name;
                    }
                    if let Some(category) = payload.category {
                        s.category = category;
                    }
                    if let Some(price) = payload.price {
                        s.price = price;
                    }
                    if let Some(duration) = payload.duration {
                        s.duration = duration;
                    }
                    if let Some(description) = payload.description {
                        s.description = description;
                    }
                    if let Some(is_active) = payload.is_active {
                        s.is_active = is_active;
                    }
                },
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> usize {
        self.services.delete(|s| s.id == id).await
    }
}
