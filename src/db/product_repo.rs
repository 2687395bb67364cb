// src/db/product_repo.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::inventory::{CreateProductPayload, Product, StockOperation, UpdateProductPayload},
};

#[derive(Clone, Default)]
pub struct ProductRepository {
    products: Collection<Product>,
}

impl ProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, payload: CreateProductPayload) -> Product {
        let today = Utc::now().date_naive();
        let product = Product {
            id: Uuid::new_v4(),
            name: payload.name,
            category: payload.category,
            brand: payload.brand,
            price: payload.price,
            cost: payload.cost,
            stock: payload.stock,
            min_stock: payload.min_stock,
            description: payload.description,
            is_active: true,
            supplier: payload.supplier,
            barcode: payload.barcode,
            created_at: today,
            updated_at: today,
        };
        self.products.insert(product).await
    }

    pub async fn list(&self) -> Vec<Product> {
        self.products.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Product> {
        self.products.find_one(|p| p.id == id).await
    }

    pub async fn low_stock(&self) -> Vec<Product> {
        self.products
            .select(|p| p.is_active && p.stock <= p.min_stock)
            .await
    }

    pub async fn apply_update(&self, id: Uuid, payload: UpdateProductPayload) -> Option<Product> {
        let today = Utc::now().date_naive();
        self.products
            .update_one(
                |p| p.id == id,
                |p| {
                    if let Some(name) = payload.name {
                        p.name = name;
                    }
                    if let Some(category) = payload.category {
                        p.category = category;
                    }
                    if let Some(brand) = payload.brand {
                        p.brand = brand;
                    }
                    if let Some(price) = payload.price {
                        p.price = price;
                    }
                    if let Some(cost) = payload.cost {
                        p.cost = cost;
                    }
                    if let Some(min_stock) = payload.min_stock {
                        p.min_stock = min_stock;
                    }
                    if let Some(description) = payload.description {
                        p.description = description;
                    }
                    if let Some(is_active) = payload.is_active {
                        p.is_active = is_active;
                    }
                    if let Some(supplier) = payload.supplier {
                        p.supplier = Some(supplier);
                    }
                    if let Some(barcode) = payload.barcode {
                        p.barcode = Some(barcode);
                    }
                    p.updated_at = today;
                },
            )
            .await
    }

    /// Baixa de estoque satura em zero; entrada soma direto.
    pub async fn adjust_stock(
        &self,
        id: Uuid,
        quantity: u32,
        operation: StockOperation,
    ) -> Option<Product> {
        let today = Utc::now().date_naive();
        self.products
            .update_one(
                |p| p.id == id,
                |p| {
                    p.stock = match operation {
                        StockOperation::Add => p.stock + quantity,
                        StockOperation::Subtract => p.stock.saturating_sub(quantity),
                    };
                    p.updated_at = today;
                },
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> usize {
        self.products.delete(|p| p.id == id).await
    }
}
