// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

// O serviço agendável do catálogo (corte, coloração, manicure...)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[schema(example = "45.00")]
    pub price: Decimal,
    /// Duração em minutos.
    pub duration: u32,
    pub description: String,
    pub is_active: bool,
}

fn validate_positive_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_positive() && !price.is_zero() {
        return Ok(());
    }
    let mut err = ValidationError::new("range");
    err.message = Some("O preço deve ser maior que zero.".into());
    Err(err)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateServicePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A categoria é obrigatória."))]
    pub category: String,

    #[validate(custom(function = "validate_positive_price"))]
    pub price: Decimal,

    #[validate(range(min = 1, message = "A duração deve ser maior que zero."))]
    pub duration: u32,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServicePayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "A categoria não pode ficar vazia."))]
    pub category: Option<String>,

    #[validate(custom(function = "validate_positive_price"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 1, message = "A duração deve ser maior que zero."))]
    pub duration: Option<u32>,

    pub description: Option<String>,
    pub is_active: Option<bool>,
}
