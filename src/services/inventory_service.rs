// src/services/inventory_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::ProductRepository,
    models::inventory::{
        CreateProductPayload, Product, StockOperation, UpdateProductPayload,
    },
};

#[derive(Clone)]
pub struct InventoryService {
    repo: ProductRepository,
}

impl InventoryService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub async fn create(&self, payload: CreateProductPayload) -> Product {
        self.repo.insert(payload).await
    }

    pub async fn list(&self) -> Vec<Product> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        self.repo.find_by_id(id).await.ok_or(AppError::ProductNotFound)
    }

    pub async fn low_stock(&self) -> Vec<Product> {
        self.repo.low_stock().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateProductPayload,
    ) -> Result<Product, AppError> {
        self.repo
            .apply_update(id, payload)
            .await
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn adjust_stock(
        &self,
        id: Uuid,
        quantity: u32,
        operation: StockOperation,
    ) -> Result<Product, AppError> {
        self.repo
            .adjust_stock(id, quantity, operation)
            .await
            .ok_or(AppError::ProductNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await == 0 {
            return Err(AppError::ProductNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    async fn seeded() -> (InventoryService, Uuid) {
        let service = InventoryService::new(ProductRepository::new());
        let product = service
            .create(CreateProductPayload {
                name: "Base Coat".into(),
                category: "Unhas".into(),
                brand: "Risqué".into(),
                price: Decimal::new(1590, 2),
                cost: Decimal::new(900, 2),
                stock: 3,
                min_stock: 5,
                description: "Base protetora para unhas".into(),
                supplier: None,
                barcode: None,
            })
            .await;
        (service, product.id)
    }

    #[tokio::test]
    async fn stock_subtraction_saturates_at_zero() {
        let (service, id) = seeded().await;

        let product = service
            .adjust_stock(id, 10, StockOperation::Subtract)
            .await
            .expect("produto existe");
        assert_eq!(product.stock, 0);

        let product = service
            .adjust_stock(id, 4, StockOperation::Add)
            .await
            .expect("produto existe");
        assert_eq!(product.stock, 4);
    }

    #[tokio::test]
    async fn low_stock_flags_products_at_or_below_threshold() {
        let (service, id) = seeded().await;

        // 3 <= 5: já em alerta
        assert_eq!(service.low_stock().await.len(), 1);

        service
            .adjust_stock(id, 10, StockOperation::Add)
            .await
            .expect("produto existe");
        assert!(service.low_stock().await.is_empty());
    }
}
