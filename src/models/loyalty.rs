// src/models/loyalty.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;

/// Níveis do programa, do menor para o maior — a ordem de declaração
/// sustenta `PartialOrd`/`Ord` (bronze < prata < ouro < diamante).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LoyaltyLevel {
    Bronze,
    Prata,
    Ouro,
    Diamante,
}

/// Estado de fidelidade de um cliente inscrito. O saldo aqui é a fonte de
/// verdade; o log de transações é apenas auditoria.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyMember {
    pub customer_id: Uuid,
    pub points: i64,
    pub level: LoyaltyLevel,
    pub joined_date: NaiveDate,
}

/// Visão derivada: cadastro do cliente + estado de fidelidade.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCustomer {
    #[serde(flatten)]
    pub customer: Customer,
    pub points: i64,
    pub level: LoyaltyLevel,
    pub joined_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Earned,
    Redeemed,
}

// Log apenas-escrita; nunca é alterado nem usado para recalcular saldo.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsTransaction {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub points: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub points_cost: i64,
    pub available: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollPayload {
    pub customer_id: Uuid,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsPayload {
    #[validate(range(min = 1, message = "A quantidade de pontos deve ser positiva."))]
    pub points: i64,

    #[validate(length(min = 1, message = "A descrição é obrigatória."))]
    pub description: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LevelPayload {
    pub level: LoyaltyLevel,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 1, message = "O custo em pontos deve ser positivo."))]
    pub points_cost: i64,

    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRewardPayload {
    #[validate(length(min = 1, message = "O nome não pode ficar vazio."))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 1, message = "O custo em pontos deve ser positivo."))]
    pub points_cost: Option<i64>,

    pub available: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRewardPayload {
    pub customer_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedeemOutcome {
    pub redeemed: bool,
    /// Saldo após a operação (inalterado quando `redeemed == false`).
    pub balance: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransactionQuery {
    pub customer_id: Option<Uuid>,
}
