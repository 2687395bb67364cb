// src/handlers/booking.rs
//
// A superfície pública do widget de agendamento: profissionais ativos,
// serviços ativos, horários livres e a própria reserva.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::{
        appointment::{
            Appointment, AvailableSlots, BookingPayload, CreateAppointmentPayload, SlotQuery,
        },
        catalog::Service,
        employee::Employee,
    },
};

#[utoipa::path(
    get,
    path = "/api/booking/employees",
    responses((status = 200, body = Vec<Employee>)),
    tag = "Booking"
)]
pub async fn list_active_employees(State(app_state): State<AppState>) -> Json<Vec<Employee>> {
    Json(app_state.employee_service.active().await)
}

#[utoipa::path(
    get,
    path = "/api/booking/services",
    responses((status = 200, body = Vec<Service>)),
    tag = "Booking"
)]
pub async fn list_active_services(State(app_state): State<AppState>) -> Json<Vec<Service>> {
    Json(app_state.catalog_service.active().await)
}

// Grade pública (abre às 09:00); recalculada a cada consulta, nada em cache.
#[utoipa::path(
    get,
    path = "/api/booking/slots",
    params(SlotQuery),
    responses((status = 200, body = AvailableSlots)),
    tag = "Booking"
)]
pub async fn available_slots(
    State(app_state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Json<AvailableSlots> {
    let hours = app_state.business_hours;
    let slots = app_state
        .scheduling_service
        .available_slots(
            query.date,
            query.employee_id,
            hours.public_open_hour,
            hours.close_hour,
        )
        .await;
    Json(AvailableSlots {
        date: query.date,
        slots,
    })
}

#[utoipa::path(
    post,
    path = "/api/booking",
    request_body = BookingPayload,
    responses((status = 201, body = Appointment), (status = 400, description = "Campos inválidos")),
    tag = "Booking"
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    Json(payload): Json<BookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let appointment = app_state
        .scheduling_service
        .book(CreateAppointmentPayload {
            customer_name: payload.customer_name,
            phone: payload.phone,
            customer_id: None,
            employee_id: payload.employee_id,
            date: payload.date,
            time: payload.time,
            services: payload.services,
            status: None,
            observations: payload.observations,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}

// Portal do cliente logado: seus agendamentos, casados pelo nome da reserva.
#[utoipa::path(
    get,
    path = "/api/booking/my-appointments",
    responses((status = 200, body = Vec<Appointment>)),
    tag = "Booking",
    security(("session_token" = []))
)]
pub async fn my_appointments(
    State(app_state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Json<Vec<Appointment>> {
    Json(app_state.scheduling_service.by_customer_name(&user.name).await)
}
