// src/handlers/employees.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::employee::{CreateEmployeePayload, Employee, UpdateEmployeePayload},
};

#[utoipa::path(
    get,
    path = "/api/employees",
    responses((status = 200, body = Vec<Employee>)),
    tag = "Employees",
    security(("session_token" = []))
)]
pub async fn list_employees(State(app_state): State<AppState>) -> Json<Vec<Employee>> {
    Json(app_state.employee_service.list().await)
}

#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployeePayload,
    responses((status = 201, body = Employee)),
    tag = "Employees",
    security(("session_token" = []))
)]
pub async fn create_employee(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateEmployeePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let employee = app_state.employee_service.create(payload).await;
    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Employee), (status = 404)),
    tag = "Employees",
    security(("session_token" = []))
)]
pub async fn get_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(app_state.employee_service.find_by_id(id).await?))
}

// A atualização dispara a varredura de reatribuição quando o funcionário
// sai do conjunto ativo.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateEmployeePayload,
    responses((status = 200, body = Employee), (status = 404)),
    tag = "Employees",
    security(("session_token" = []))
)]
pub async fn update_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeePayload>,
) -> Result<Json<Employee>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.employee_service.update(id, payload).await?))
}

// "Excluir" um funcionário é desativá-lo; o registro permanece.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Employee), (status = 404)),
    tag = "Employees",
    security(("session_token" = []))
)]
pub async fn deactivate_employee(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, AppError> {
    Ok(Json(app_state.employee_service.deactivate(id).await?))
}
