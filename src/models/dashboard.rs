// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub appointments_today: usize,
    pub scheduled_today: usize,
    pub confirmed_today: usize,
    pub completed_today: usize,
    #[schema(example = "320.00")]
    pub revenue_today: Decimal,
    #[schema(example = "1250.00")]
    pub revenue_week: Decimal,
    #[schema(example = "5400.00")]
    pub revenue_month: Decimal,
    #[schema(example = "900.00")]
    pub expenses_month: Decimal,
    pub active_customers: usize,
    pub loyalty_members: usize,
    pub low_stock_products: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueChartEntry {
    pub date: NaiveDate,
    #[schema(example = "320.00")]
    pub income: Decimal,
    #[schema(example = "80.00")]
    pub expenses: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopServiceEntry {
    pub service: String,
    /// Quantas vezes o serviço apareceu em agendamentos concluídos.
    pub count: usize,
}
