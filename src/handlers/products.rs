// src/handlers/products.rs

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
    models::inventory::{
        AdjustStockPayload, CreateProductPayload, Product, UpdateProductPayload,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    #[serde(default)]
    pub low_stock: bool,
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(ProductQuery),
    responses((status = 200, body = Vec<Product>)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let products = if query.low_stock {
        app_state.inventory_service.low_stock().await
    } else {
        app_state.inventory_service.list().await
    };
    Json(products)
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductPayload,
    responses((status = 201, body = Product)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn create_product(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let product = app_state.inventory_service.create(payload).await;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Product), (status = 404)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    Ok(Json(app_state.inventory_service.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateProductPayload,
    responses((status = 200, body = Product), (status = 404)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProductPayload>,
) -> Result<Json<Product>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.inventory_service.update(id, payload).await?))
}

// Entrada soma; baixa satura em zero.
#[utoipa::path(
    post,
    path = "/api/products/{id}/stock",
    params(("id" = Uuid, Path)),
    request_body = AdjustStockPayload,
    responses((status = 200, body = Product), (status = 404)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn adjust_stock(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AdjustStockPayload>,
) -> Result<Json<Product>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(
        app_state
            .inventory_service
            .adjust_stock(id, payload.quantity, payload.operation)
            .await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Inventory",
    security(("session_token" = []))
)]
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.inventory_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
