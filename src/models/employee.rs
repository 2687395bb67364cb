// src/models/employee.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_phone;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkingHours {
    #[validate(length(min = 5, max = 5, message = "Horário no formato HH:MM."))]
    pub start: String,
    #[validate(length(min = 5, max = 5, message = "Horário no formato HH:MM."))]
    pub end: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    /// Função no salão (ex: "Cabeleireira", "Manicure").
    pub position: String,
    pub email: String,
    pub phone: String,
    pub specialties: Vec<String>,
    pub is_active: bool,
    pub hire_date: NaiveDate,
    pub working_hours: WorkingHours,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeePayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[validate(length(min = 1, message = "A função é obrigatória."))]
    pub position: String,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[serde(default)]
    pub specialties: Vec<String>,

    pub hire_date: NaiveDate,

    #[validate(nested)]
    pub working_hours: WorkingHours,
}

// Atualização explícita, campo a campo: nada de merge dinâmico de shapes.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeePayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "A função não pode ficar vazia."))]
    pub position: Option<String>,

    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: Option<String>,

    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,

    pub specialties: Option<Vec<String>>,
    pub is_active: Option<bool>,

    #[validate(nested)]
    pub working_hours: Option<WorkingHours>,
}
