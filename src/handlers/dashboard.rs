// src/handlers/dashboard.rs

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    config::AppState,
    models::{
        dashboard::{DashboardSummary, RevenueChartEntry, TopServiceEntry},
        inventory::Product,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChartQuery {
    pub days: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TopQuery {
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses((status = 200, body = DashboardSummary)),
    tag = "Dashboard",
    security(("session_token" = []))
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Json<DashboardSummary> {
    let today = Utc::now().date_naive();
    Json(app_state.dashboard_service.summary(today).await)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/revenue-chart",
    params(ChartQuery),
    responses((status = 200, body = Vec<RevenueChartEntry>)),
    tag = "Dashboard",
    security(("session_token" = []))
)]
pub async fn get_revenue_chart(
    State(app_state): State<AppState>,
    Query(query): Query<ChartQuery>,
) -> Json<Vec<RevenueChartEntry>> {
    let today = Utc::now().date_naive();
    let days = query.days.unwrap_or(30);
    Json(app_state.dashboard_service.revenue_chart(today, days).await)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/top-services",
    params(TopQuery),
    responses((status = 200, body = Vec<TopServiceEntry>)),
    tag = "Dashboard",
    security(("session_token" = []))
)]
pub async fn get_top_services(
    State(app_state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Json<Vec<TopServiceEntry>> {
    let limit = query.limit.unwrap_or(5);
    Json(app_state.dashboard_service.top_services(limit).await)
}

#[utoipa::path(
    get,
    path = "/api/dashboard/low-stock",
    responses((status = 200, body = Vec<Product>)),
    tag = "Dashboard",
    security(("session_token" = []))
)]
pub async fn get_low_stock(State(app_state): State<AppState>) -> Json<Vec<Product>> {
    Json(app_state.dashboard_service.low_stock().await)
}
