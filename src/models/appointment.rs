// src/models/appointment.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::{validate_phone, validate_slot_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    /// Nome informado na reserva; o vínculo forte é `customer_id`.
    pub customer_name: String,
    pub phone: String,
    pub customer_id: Option<Uuid>,
    /// `None` = sem profissional atribuído (aguardando reatribuição).
    pub employee_id: Option<Uuid>,
    pub date: NaiveDate,
    /// Horário de grade `HH:MM`.
    pub time: String,
    /// Rótulo derivado: nomes dos serviços na ordem da seleção.
    pub service_label: String,
    pub services: Vec<Uuid>,
    /// Derivado: soma das durações dos serviços selecionados.
    pub duration_minutes: u32,
    /// Derivado: soma dos preços dos serviços selecionados.
    #[schema(example = "75.00")]
    pub price: Decimal,
    pub status: AppointmentStatus,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Reserva vinda do widget público (status sempre `scheduled`).
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub customer_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub employee_id: Uuid,

    pub date: NaiveDate,

    #[validate(custom(function = "validate_slot_time"))]
    pub time: String,

    #[validate(length(min = 1, message = "Selecione pelo menos um serviço."))]
    pub services: Vec<Uuid>,

    pub observations: Option<String>,
}

/// Entrada direta do admin: igual à reserva pública, mas permite escolher
/// o status inicial e apontar um cliente já cadastrado.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub customer_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub customer_id: Option<Uuid>,

    pub employee_id: Uuid,

    pub date: NaiveDate,

    #[validate(custom(function = "validate_slot_time"))]
    pub time: String,

    #[validate(length(min = 1, message = "Selecione pelo menos um serviço."))]
    pub services: Vec<Uuid>,

    pub status: Option<AppointmentStatus>,

    pub observations: Option<String>,
}

/// Substituição integral dos campos editáveis; preço, duração e rótulo são
/// sempre recalculados a partir de `services`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub customer_name: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    pub customer_id: Option<Uuid>,

    pub employee_id: Option<Uuid>,

    pub date: NaiveDate,

    #[validate(custom(function = "validate_slot_time"))]
    pub time: String,

    #[validate(length(min = 1, message = "Selecione pelo menos um serviço."))]
    pub services: Vec<Uuid>,

    pub status: AppointmentStatus,

    pub observations: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SlotQuery {
    pub date: NaiveDate,
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AppointmentQuery {
    pub date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableSlots {
    pub date: NaiveDate,
    pub slots: Vec<String>,
}
