// src/handlers/customers.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::customer::{CreateCustomerPayload, Customer, UpdateCustomerPayload},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchQuery {
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/customers",
    params(CustomerSearchQuery),
    responses((status = 200, body = Vec<Customer>)),
    tag = "Customers",
    security(("session_token" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    Query(query): Query<CustomerSearchQuery>,
) -> Json<Vec<Customer>> {
    let customers = match query.search.as_deref() {
        Some(term) if !term.is_empty() => app_state.customer_service.search(term).await,
        _ => app_state.customer_service.list().await,
    };
    Json(customers)
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerPayload,
    responses((status = 201, body = Customer)),
    tag = "Customers",
    security(("session_token" = []))
)]
pub async fn create_customer(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateCustomerPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let customer = app_state.customer_service.create(payload).await;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Customer), (status = 404)),
    tag = "Customers",
    security(("session_token" = []))
)]
pub async fn get_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, AppError> {
    Ok(Json(app_state.customer_service.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateCustomerPayload,
    responses((status = 200, body = Customer), (status = 404)),
    tag = "Customers",
    security(("session_token" = []))
)]
pub async fn update_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCustomerPayload>,
) -> Result<Json<Customer>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.customer_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Customers",
    security(("session_token" = []))
)]
pub async fn delete_customer(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.customer_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
