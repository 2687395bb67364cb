// src/models/payment.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::common::validation::validate_slot_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Pix,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    /// Ausente em despesas (fornecedores etc.).
    pub customer_id: Option<Uuid>,
    /// Snapshot desnormalizado do nome na hora do lançamento.
    pub customer_name: String,
    #[schema(example = "75.00")]
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub description: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: PaymentKind,
    /// Sequencial atribuído na criação: REC001, REC002, ...
    pub receipt_number: String,
    pub created_at: DateTime<Utc>,
}

fn validate_positive_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_positive() && !amount.is_zero() {
        return Ok(());
    }
    let mut err = ValidationError::new("range");
    err.message = Some("O valor deve ser maior que zero.".into());
    Err(err)
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentPayload {
    pub customer_id: Option<Uuid>,

    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub customer_name: String,

    #[validate(custom(function = "validate_positive_amount"))]
    pub amount: Decimal,

    pub payment_method: PaymentMethod,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,

    pub date: NaiveDate,

    #[validate(custom(function = "validate_slot_time"))]
    pub time: String,

    #[serde(rename = "type")]
    pub kind: PaymentKind,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub customer_name: Option<String>,

    pub payment_method: Option<PaymentMethod>,

    #[validate(length(min = 1, message = "A descrição não pode ficar vazia."))]
    pub description: Option<String>,

    pub date: Option<NaiveDate>,

    #[validate(custom(function = "validate_slot_time"))]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SummaryPeriod {
    Day,
    Week,
    Month,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaymentQuery {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub customer_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    pub period: SummaryPeriod,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSummary {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[schema(example = "1250.00")]
    pub total_income: Decimal,
    #[schema(example = "200.00")]
    pub total_expenses: Decimal,
}
