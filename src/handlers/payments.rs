// src/handlers/payments.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::payment::{
        CreatePaymentPayload, Payment, PaymentQuery, RevenueSummary, SummaryQuery,
        UpdatePaymentPayload,
    },
};

#[utoipa::path(
    get,
    path = "/api/payments",
    params(PaymentQuery),
    responses((status = 200, body = Vec<Payment>)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn list_payments(
    State(app_state): State<AppState>,
    Query(query): Query<PaymentQuery>,
) -> Json<Vec<Payment>> {
    let service = &app_state.payment_service;
    let payments = if let Some(customer_id) = query.customer_id {
        service.by_customer(customer_id).await
    } else if let Some(date) = query.date {
        service.by_date(date).await
    } else if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        service.by_period(start, end).await
    } else {
        service.list().await
    };
    Json(payments)
}

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = CreatePaymentPayload,
    responses((status = 201, body = Payment)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn create_payment(
    State(app_state): State<AppState>,
    Json(payload): Json<CreatePaymentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let payment = app_state.payment_service.add(payload).await;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/payments/summary",
    params(SummaryQuery),
    responses((status = 200, body = RevenueSummary)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn revenue_summary(
    State(app_state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Json<RevenueSummary> {
    let reference = query.date.unwrap_or_else(|| Utc::now().date_naive());
    Json(app_state.payment_service.summary(query.period, reference).await)
}

#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Payment), (status = 404)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn get_payment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Payment>, AppError> {
    Ok(Json(app_state.payment_service.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/payments/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdatePaymentPayload,
    responses((status = 200, body = Payment), (status = 404)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn update_payment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePaymentPayload>,
) -> Result<Json<Payment>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.payment_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/payments/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Payments",
    security(("session_token" = []))
)]
pub async fn delete_payment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.payment_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
