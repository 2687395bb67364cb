// src/handlers/catalog.rs

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
    models::catalog::{CreateServicePayload, Service, UpdateServicePayload},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/services",
    params(CatalogQuery),
    responses((status = 200, body = Vec<Service>)),
    tag = "Services",
    security(("session_token" = []))
)]
pub async fn list_services(
    State(app_state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<Vec<Service>> {
    let services = match query.category.as_deref() {
        Some(category) if !category.is_empty() => {
            app_state.catalog_service.by_category(category).await
        }
        _ => app_state.catalog_service.list().await,
    };
    Json(services)
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServicePayload,
    responses((status = 201, body = Service)),
    tag = "Services",
    security(("session_token" = []))
)]
pub async fn create_service(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateServicePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let service = app_state.catalog_service.create(payload).await;
    Ok((StatusCode::CREATED, Json(service)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateServicePayload,
    responses((status = 200, body = Service), (status = 404)),
    tag = "Services",
    security(("session_token" = []))
)]
pub async fn update_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServicePayload>,
) -> Result<Json<Service>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.catalog_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Services",
    security(("session_token" = []))
)]
pub async fn delete_service(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.catalog_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
