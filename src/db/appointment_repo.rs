// src/db/appointment_repo.rs

use std::collections::HashSet;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::appointment::{Appointment, AppointmentStatus},
};

#[derive(Clone, Default)]
pub struct AppointmentRepository {
    appointments: Collection<Appointment>,
}

impl AppointmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, appointment: Appointment) -> Appointment {
        self.appointments.insert(appointment).await
    }

    pub async fn list(&self) -> Vec<Appointment> {
        self.appointments.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Appointment> {
        self.appointments.find_one(|a| a.id == id).await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments.select(|a| a.date == date).await
    }

    pub async fn by_employee(&self, employee_id: Uuid) -> Vec<Appointment> {
        self.appointments
            .select(|a| a.employee_id == Some(employee_id))
            .await
    }

    pub async fn by_customer_name(&self, name: &str) -> Vec<Appointment> {
        let name = name.to_owned();
        self.appointments.select(|a| a.customer_name == name).await
    }

    /// Existe agendamento não-cancelado ocupando exatamente este
    /// (profissional, data, horário)? Cancelados liberam a vaga.
    pub async fn slot_taken(&self, date: NaiveDate, time: &str, employee_id: Uuid) -> bool {
        let time = time.to_owned();
        self.appointments
            .find_one(|a| {
                a.employee_id == Some(employee_id)
                    && a.date == date
                    && a.time == time
                    && a.status != AppointmentStatus::Cancelled
            })
            .await
            .is_some()
    }

    /// Substituição integral do agendamento (edição do admin).
    pub async fn replace(&self, id: Uuid, appointment: Appointment) -> Option<Appointment> {
        self.appointments.replace_one(|a| a.id == id, appointment).await
    }

    pub async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> Option<Appointment> {
        self.appointments
            .update_one(|a| a.id == id, |a| a.status = status)
            .await
    }

    /// Remoção definitiva do conjunto de trabalho.
    pub async fn delete(&self, id: Uuid) -> usize {
        self.appointments.delete(|a| a.id == id).await
    }

    /// A varredura de desativação: todo agendamento cujo profissional não
    /// está no conjunto ativo — inclusive os já sem atribuição — perde o
    /// vínculo e volta para `scheduled`, qualquer que fosse o status.
    pub async fn sweep_unassigned(&self, active_ids: &HashSet<Uuid>) -> usize {
        self.appointments
            .update(
                |a| !a.employee_id.is_some_and(|id| active_ids.contains(&id)),
                |a| {
                    a.employee_id = None;
                    a.status = AppointmentStatus::Scheduled;
                },
            )
            .await
    }
}
