// src/handlers/appointments.rs
//
// Agenda administrativa: consulta, entrada direta (com status), edição
// integral, cancelamento e exclusão definitiva.

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
    models::appointment::{
        Appointment, AppointmentQuery, AvailableSlots, CreateAppointmentPayload, SlotQuery,
        UpdateAppointmentPayload,
    },
};

#[utoipa::path(
    get,
    path = "/api/appointments",
    params(AppointmentQuery),
    responses((status = 200, body = Vec<Appointment>)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn list_appointments(
    State(app_state): State<AppState>,
    Query(query): Query<AppointmentQuery>,
) -> Json<Vec<Appointment>> {
    let appointments = match (query.date, query.employee_id) {
        (Some(date), _) => app_state.scheduling_service.by_date(date).await,
        (None, Some(employee_id)) => {
            app_state.scheduling_service.by_employee(employee_id).await
        }
        (None, None) => app_state.scheduling_service.list().await,
    };
    Json(appointments)
}

// Grade administrativa (abre às 08:00, uma hora antes do widget).
#[utoipa::path(
    get,
    path = "/api/appointments/slots",
    params(SlotQuery),
    responses((status = 200, body = AvailableSlots)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn available_slots(
    State(app_state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Json<AvailableSlots> {
    let hours = app_state.business_hours;
    let slots = app_state
        .scheduling_service
        .available_slots(query.date, query.employee_id, hours.open_hour, hours.close_hour)
        .await;
    Json(AvailableSlots {
        date: query.date,
        slots,
    })
}

#[utoipa::path(
    post,
    path = "/api/appointments",
    request_body = CreateAppointmentPayload,
    responses((status = 201, body = Appointment), (status = 400, description = "Campos inválidos")),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn create_appointment(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateAppointmentPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let appointment = app_state.scheduling_service.book(payload).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Appointment), (status = 404)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn get_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    Ok(Json(app_state.scheduling_service.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    params(("id" = Uuid, Path)),
    request_body = UpdateAppointmentPayload,
    responses((status = 200, body = Appointment), (status = 404)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn update_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentPayload>,
) -> Result<Json<Appointment>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    Ok(Json(app_state.scheduling_service.update(id, payload).await?))
}

// Cancelamento com retenção: o agendamento fica, com status `cancelled`,
// e a vaga volta a ficar disponível.
#[utoipa::path(
    post,
    path = "/api/appointments/{id}/cancel",
    params(("id" = Uuid, Path)),
    responses((status = 200, body = Appointment), (status = 404)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn cancel_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, AppError> {
    Ok(Json(app_state.scheduling_service.cancel(id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    params(("id" = Uuid, Path)),
    responses((status = 204), (status = 404)),
    tag = "Appointments",
    security(("session_token" = []))
)]
pub async fn delete_appointment(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    app_state.scheduling_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
