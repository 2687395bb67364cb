// src/models/inventory.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub brand: String,
    #[schema(example = "45.90")]
    pub price: Decimal,
    #[schema(example = "25.00")]
    pub cost: Decimal,
    pub stock: u32,
    /// Abaixo ou igual a este limite o produto entra no alerta de reposição.
    pub min_stock: u32,
    pub description: String,
    pub is_active: bool,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    #[serde(default)]
    pub brand: String,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Decimal,

    #[serde(default)]
    pub stock: u32,

    #[serde(default)]
    pub min_stock: u32,

    #[serde(default)]
    pub description: String,

    pub supplier: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "A categoria não pode ficar vazia."))]
    pub category: Option<String>,

    pub brand: Option<String>,

    #[validate(custom(function = "validate_not_negative"))]
    pub price: Option<Decimal>,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Option<Decimal>,

    pub min_stock: Option<u32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StockOperation {
    Add,
    Subtract,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStockPayload {
    #[validate(range(min = 1, message = "A quantidade deve ser maior que zero."))]
    pub quantity: u32,

    pub operation: StockOperation,
}
