// src/handlers/loyalty.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::loyalty::{
        CreateRewardPayload, EnrollPayload, LevelPayload, LoyaltyCustomer, LoyaltyMember,
        PointsPayload, PointsTransaction, RedeemOutcome, RedeemRewardPayload, Reward,
        TransactionQuery, UpdateRewardPayload,
    },
};

// =========================================================================
//  MEMBROS
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/loyalty/members",
    responses((status = 200, body = Vec<LoyaltyCustomer>)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn list_members(State(app_state): State<AppState>) -> Json<Vec<LoyaltyCustomer>> {
    Json(app_state.loyalty_service.members().await)
}

// Inscrição idempotente: repetir a chamada não zera nem duplica nada.
#[utoipa::path(
    post,
    path = "/api/loyalty/members",
    request_body = EnrollPayload,
    responses((status = 201, body = LoyaltyMember), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn enroll_member(
    State(app_state): State<AppState>,
    Json(payload): Json<EnrollPayload>,
) -> Result<impl IntoResponse, AppError> {
    let member = app_state.loyalty_service.enroll(payload.customer_id).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/api/loyalty/members/{customer_id}",
    params(("customer_id" = Uuid, Path)),
    responses((status = 200, body = LoyaltyCustomer), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn get_member(
    State(app_state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<LoyaltyCustomer>, AppError> {
    Ok(Json(app_state.loyalty_service.member(customer_id).await?))
}

// Remoção descarta pontos/nível/data; reinscrição começa do zero.
#[utoipa::path(
    delete,
    path = "/api/loyalty/members/{customer_id}",
    params(("customer_id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn remove_member(
    State(app_state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.loyalty_service.remove(customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/loyalty/members/{customer_id}/points",
    params(("customer_id" = Uuid, Path)),
    request_body = PointsPayload,
    responses((status = 200, body = LoyaltyMember), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn add_points(
    State(app_state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(payload): Json<PointsPayload>,
) -> Result<Json<LoyaltyMember>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(
        app_state
            .loyalty_service
            .add_points(customer_id, payload.points, &payload.description)
            .await?,
    ))
}

// Saldo insuficiente não é erro HTTP: devolve `redeemed: false`.
#[utoipa::path(
    post,
    path = "/api/loyalty/members/{customer_id}/redeem",
    params(("customer_id" = Uuid, Path)),
    request_body = PointsPayload,
    responses((status = 200, body = RedeemOutcome)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn redeem_points(
    State(app_state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(payload): Json<PointsPayload>,
) -> Result<Json<RedeemOutcome>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(
        app_state
            .loyalty_service
            .redeem_points(customer_id, payload.points, &payload.description)
            .await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/loyalty/members/{customer_id}/level",
    params(("customer_id" = Uuid, Path)),
    request_body = LevelPayload,
    responses((status = 200, body = LoyaltyMember), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn override_level(
    State(app_state): State<AppState>,
    Path(customer_id): Path<Uuid>,
    Json(payload): Json<LevelPayload>,
) -> Result<Json<LoyaltyMember>, AppError> {
    Ok(Json(
        app_state
            .loyalty_service
            .override_level(customer_id, payload.level)
            .await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/loyalty/transactions",
    params(TransactionQuery),
    responses((status = 200, body = Vec<PointsTransaction>)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> Json<Vec<PointsTransaction>> {
    Json(app_state.loyalty_service.transactions(query.customer_id).await)
}

// =========================================================================
//  RECOMPENSAS
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/loyalty/rewards",
    responses((status = 200, body = Vec<Reward>)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn list_rewards(State(app_state): State<AppState>) -> Json<Vec<Reward>> {
    Json(app_state.loyalty_service.rewards().await)
}

#[utoipa::path(
    post,
    path = "/api/loyalty/rewards",
    request_body = CreateRewardPayload,
    responses((status = 201, body = Reward)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn create_reward(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateRewardPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let reward = app_state.loyalty_service.add_reward(payload).await;
    Ok((StatusCode::CREATED, Json(reward)))
}

#[utoipa::path(
    put,
    path = "/api/loyalty/rewards/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateRewardPayload,
    responses((status = 200, body = Reward), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn update_reward(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRewardPayload>,
) -> Result<Json<Reward>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.loyalty_service.update_reward(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/loyalty/rewards/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn delete_reward(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.loyalty_service.delete_reward(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// Recompensa indisponível ou saldo insuficiente: `redeemed: false`, sem efeito.
#[utoipa::path(
    post,
    path = "/api/loyalty/rewards/{id}/redeem",
    params(("id" = Uuid, Path)),
    request_body = RedeemRewardPayload,
    responses((status = 200, body = RedeemOutcome)),
    tag = "Loyalty",
    security(("session_token" = []))
)]
pub async fn redeem_reward(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RedeemRewardPayload>,
) -> Result<Json<RedeemOutcome>, AppError> {
    Ok(Json(
        app_state
            .loyalty_service
            .redeem_reward(payload.customer_id, id)
            .await?,
    ))
}
