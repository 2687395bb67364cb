// src/services/scheduling_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AppointmentRepository, CustomerRepository, EmployeeRepository, ServiceRepository},
    models::appointment::{
        Appointment, AppointmentStatus, CreateAppointmentPayload, UpdateAppointmentPayload,
    },
};

/// Grade fixa de meia em meia hora, abertura inclusiva e fechamento
/// exclusivo. Função pura: nenhum estado persistido.
pub fn time_slot_grid(open_hour: u32, close_hour: u32) -> Vec<String> {
    let mut slots = Vec::new();
    for hour in open_hour..close_hour {
        slots.push(format!("{hour:02}:00"));
        slots.push(format!("{hour:02}:30"));
    }
    slots
}

#[derive(Clone)]
pub struct SchedulingService {
    appointments: AppointmentRepository,
    employees: EmployeeRepository,
    customers: CustomerRepository,
    catalog: ServiceRepository,
}

impl SchedulingService {
    pub fn new(
        appointments: AppointmentRepository,
        employees: EmployeeRepository,
        customers: CustomerRepository,
        catalog: ServiceRepository,
    ) -> Self {
        Self {
            appointments,
            employees,
            customers,
            catalog,
        }
    }

    // =========================================================================
    //  DISPONIBILIDADE
    // =========================================================================

    /// Sem profissional selecionado, toda vaga está livre. Com profissional,
    /// a vaga está livre se nenhum agendamento não-cancelado ocupa o mesmo
    /// (data, horário, profissional). Leitura pura.
    pub async fn is_slot_available(
        &self,
        date: NaiveDate,
        time: &str,
        employee_id: Option<Uuid>,
    ) -> bool {
        match employee_id {
            None => true,
            Some(id) => !self.appointments.slot_taken(date, time, id).await,
        }
    }

    pub async fn available_slots(
        &self,
        date: NaiveDate,
        employee_id: Option<Uuid>,
        open_hour: u32,
        close_hour: u32,
    ) -> Vec<String> {
        let mut available = Vec::new();
        for slot in time_slot_grid(open_hour, close_hour) {
            if self.is_slot_available(date, &slot, employee_id).await {
                available.push(slot);
            }
        }
        available
    }

    // =========================================================================
    //  RESERVA
    // =========================================================================

    /// Cria um agendamento com os totais derivados do conjunto de serviços.
    ///
    /// O caminho de escrita não revalida a disponibilidade da vaga — a
    /// checagem pertence à consulta de slots que alimenta o formulário, e
    /// duas reservas simultâneas para a mesma vaga podem ambas ser aceitas.
    pub async fn book(&self, payload: CreateAppointmentPayload) -> Result<Appointment, AppError> {
        if payload.customer_name.trim().is_empty() {
            return Err(validation_error(
                "customerName",
                "required",
                "O nome é obrigatório.",
            ));
        }
        if payload.phone.trim().is_empty() {
            return Err(validation_error("phone", "required", "O telefone é obrigatório."));
        }
        if payload.time.trim().is_empty() {
            return Err(validation_error("time", "required", "O horário é obrigatório."));
        }
        if payload.services.is_empty() {
            return Err(validation_error(
                "services",
                "required",
                "Selecione pelo menos um serviço.",
            ));
        }

        let services = self
            .catalog
            .find_many(&payload.services)
            .await
            .ok_or(AppError::ServiceNotFound)?;

        let duration_minutes: u32 = services.iter().map(|s| s.duration).sum();
        let price: Decimal = services.iter().map(|s| s.price).sum();
        let service_label = services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        // Resolve o cadastro pelo telefone; sem correspondência, nasce um
        // cliente novo sem histórico.
        let customer_id = match payload.customer_id {
            Some(id) => self.customers.find_by_id(id).await.map(|c| c.id),
            None => None,
        };
        let customer_id = match customer_id {
            Some(id) => id,
            None => match self.customers.find_by_phone(&payload.phone).await {
                Some(customer) => customer.id,
                None => {
                    let created = self
                        .customers
                        .insert_walk_in(&payload.customer_name, &payload.phone)
                        .await;
                    tracing::info!(
                        "Cliente criado automaticamente pela reserva: {}",
                        created.name
                    );
                    created.id
                }
            },
        };

        let status = payload.status.unwrap_or(AppointmentStatus::Scheduled);
        let appointment = Appointment {
            id: Uuid::new_v4(),
            customer_name: payload.customer_name,
            phone: payload.phone,
            customer_id: Some(customer_id),
            employee_id: Some(payload.employee_id),
            date: payload.date,
            time: payload.time,
            service_label,
            services: payload.services,
            duration_minutes,
            price,
            status,
            observations: payload.observations,
            created_at: chrono::Utc::now(),
        };

        let appointment = self.appointments.insert(appointment).await;

        // Entrada direta já concluída dispara o toque imediatamente.
        if appointment.status == AppointmentStatus::Completed {
            self.touch_customer(&appointment).await;
        }

        Ok(appointment)
    }

    // =========================================================================
    //  EDIÇÃO / CANCELAMENTO
    // =========================================================================

    /// Substituição integral dos campos editáveis; preço, duração e rótulo
    /// são recalculados aqui a partir do conjunto de serviços enviado, nunca
    /// aceitos do chamador.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateAppointmentPayload,
    ) -> Result<Appointment, AppError> {
        if payload.services.is_empty() {
            return Err(validation_error(
                "services",
                "required",
                "Selecione pelo menos um serviço.",
            ));
        }

        let previous = self
            .appointments
            .find_by_id(id)
            .await
            .ok_or(AppError::AppointmentNotFound)?;

        let services = self
            .catalog
            .find_many(&payload.services)
            .await
            .ok_or(AppError::ServiceNotFound)?;

        let duration_minutes: u32 = services.iter().map(|s| s.duration).sum();
        let price: Decimal = services.iter().map(|s| s.price).sum();
        let service_label = services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let updated = Appointment {
            id: previous.id,
            customer_name: payload.customer_name,
            phone: payload.phone,
            customer_id: payload.customer_id.or(previous.customer_id),
            employee_id: payload.employee_id,
            date: payload.date,
            time: payload.time,
            service_label,
            services: payload.services,
            duration_minutes,
            price,
            status: payload.status,
            observations: payload.observations,
            created_at: previous.created_at,
        };

        let updated = self
            .appointments
            .replace(id, updated)
            .await
            .ok_or(AppError::AppointmentNotFound)?;

        // O toque dispara exatamente uma vez, na transição para `completed`.
        if previous.status != AppointmentStatus::Completed
            && updated.status == AppointmentStatus::Completed
        {
            self.touch_customer(&updated).await;
        }

        Ok(updated)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Appointment, AppError> {
        self.appointments
            .set_status(id, AppointmentStatus::Cancelled)
            .await
            .ok_or(AppError::AppointmentNotFound)
    }

    /// Remoção definitiva do conjunto de trabalho (cancelar-e-excluir do
    /// admin); a retenção com status `cancelled` fica por conta de `cancel`.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.appointments.delete(id).await == 0 {
            return Err(AppError::AppointmentNotFound);
        }
        Ok(())
    }

    // =========================================================================
    //  CONSULTAS
    // =========================================================================

    pub async fn list(&self) -> Vec<Appointment> {
        self.appointments.list().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Appointment, AppError> {
        self.appointments
            .find_by_id(id)
            .await
            .ok_or(AppError::AppointmentNotFound)
    }

    pub async fn by_date(&self, date: NaiveDate) -> Vec<Appointment> {
        self.appointments.by_date(date).await
    }

    pub async fn by_employee(&self, employee_id: Uuid) -> Vec<Appointment> {
        self.appointments.by_employee(employee_id).await
    }

    pub async fn by_customer_name(&self, name: &str) -> Vec<Appointment> {
        self.appointments.by_customer_name(name).await
    }

    // =========================================================================
    //  MANUTENÇÃO REATIVA
    // =========================================================================

    /// A varredura de desativação, invocada explicitamente por quem muta o
    /// conjunto de funcionários: agendamentos de profissionais fora do
    /// conjunto ativo perdem o vínculo e voltam para `scheduled`.
    pub async fn on_employee_set_changed(&self) -> usize {
        let active_ids = self.employees.active_ids().await;
        let swept = self.appointments.sweep_unassigned(&active_ids).await;
        if swept > 0 {
            tracing::info!(
                "🧹 {} agendamento(s) desvinculados para reatribuição",
                swept
            );
        }
        swept
    }

    /// O toque de conclusão: localiza o cliente por nome exato OU telefone
    /// exato (primeiro encontrado vence) e registra a visita. Sem
    /// correspondência, segue silencioso.
    async fn touch_customer(&self, appointment: &Appointment) {
        let customer = self
            .customers
            .find_by_name_or_phone(&appointment.customer_name, &appointment.phone)
            .await;
        if let Some(customer) = customer {
            self.customers
                .apply_visit(customer.id, appointment.date, appointment.price)
                .await;
        }
    }
}

fn validation_error(field: &'static str, code: &'static str, message: &str) -> AppError {
    let mut errors = validator::ValidationErrors::new();
    let mut err = validator::ValidationError::new(code);
    err.message = Some(message.to_string().into());
    errors.add(field, err);
    AppError::ValidationError(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        catalog::CreateServicePayload,
        employee::{CreateEmployeePayload, UpdateEmployeePayload, WorkingHours},
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("data de teste válida")
    }

    async fn seeded() -> (SchedulingService, EmployeeRepository, CustomerRepository, Vec<Uuid>, Uuid)
    {
        let employees = EmployeeRepository::new();
        let customers = CustomerRepository::new();
        let catalog = ServiceRepository::new();
        let appointments = AppointmentRepository::new();

        let employee = employees
            .insert(CreateEmployeePayload {
                name: "João Silva".into(),
                position: "Cabeleireiro".into(),
                email: "joao@salao.com".into(),
                phone: "(11) 9876-4321".into(),
                specialties: vec!["Corte Feminino".into(), "Escova".into()],
                hire_date: date("2021-01-15"),
                working_hours: WorkingHours {
                    start: "08:00".into(),
                    end: "18:00".into(),
                },
            })
            .await;

        let corte = catalog
            .insert(CreateServicePayload {
                name: "Corte Feminino".into(),
                category: "Cabelo".into(),
                price: Decimal::new(4500, 2),
                duration: 60,
                description: String::new(),
                is_active: true,
            })
            .await;
        let escova = catalog
            .insert(CreateServicePayload {
                name: "Escova".into(),
                category: "Cabelo".into(),
                price: Decimal::new(3000, 2),
                duration: 45,
                description: String::new(),
                is_active: true,
            })
            .await;

        let service = SchedulingService::new(
            appointments,
            employees.clone(),
            customers.clone(),
            catalog,
        );
        (service, employees, customers, vec![corte.id, escova.id], employee.id)
    }

    fn booking(
        employee_id: Uuid,
        day: &str,
        time: &str,
        services: Vec<Uuid>,
    ) -> CreateAppointmentPayload {
        CreateAppointmentPayload {
            customer_name: "Maria Silva".into(),
            phone: "(11) 9999-9999".into(),
            customer_id: None,
            employee_id,
            date: date(day),
            time: time.into(),
            services,
            status: None,
            observations: None,
        }
    }

    #[test]
    fn grid_is_half_hourly_open_inclusive_close_exclusive() {
        let slots = time_slot_grid(9, 18);
        assert_eq!(slots.len(), 18);
        assert_eq!(slots.first().map(String::as_str), Some("09:00"));
        assert_eq!(slots.last().map(String::as_str), Some("17:30"));
        assert!(!slots.contains(&"18:00".to_string()));

        // grade do admin começa uma hora antes
        let admin = time_slot_grid(8, 18);
        assert_eq!(admin.first().map(String::as_str), Some("08:00"));
        assert_eq!(admin.len(), 20);
    }

    #[tokio::test]
    async fn slot_without_employee_is_always_available() {
        let (service, _, _, _, _) = seeded().await;
        assert!(
            service
                .is_slot_available(date("2025-06-10"), "09:00", None)
                .await
        );
    }

    #[tokio::test]
    async fn booked_slot_blocks_and_cancellation_frees_it() {
        let (service, _, _, services, employee) = seeded().await;
        let day = date("2025-06-10");

        let appointment = service
            .book(booking(employee, "2025-06-10", "09:00", vec![services[0]]))
            .await
            .expect("reserva válida");

        assert!(!service.is_slot_available(day, "09:00", Some(employee)).await);
        assert!(service.is_slot_available(day, "09:30", Some(employee)).await);

        service.cancel(appointment.id).await.expect("cancelamento");
        assert!(service.is_slot_available(day, "09:00", Some(employee)).await);
    }

    #[tokio::test]
    async fn booking_derives_price_duration_and_label() {
        let (service, _, _, services, employee) = seeded().await;

        let appointment = service
            .book(booking(employee, "2025-06-10", "09:00", services.clone()))
            .await
            .expect("reserva válida");

        assert_eq!(appointment.price, Decimal::new(7500, 2));
        assert_eq!(appointment.duration_minutes, 105);
        assert_eq!(appointment.service_label, "Corte Feminino, Escova");
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    }

    #[tokio::test]
    async fn booking_requires_at_least_one_service() {
        let (service, _, _, _, employee) = seeded().await;

        let err = service
            .book(booking(employee, "2025-06-10", "09:00", Vec::new()))
            .await
            .expect_err("deve rejeitar");
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn booking_creates_customer_for_unknown_phone_and_links_known_one() {
        let (service, _, customers, services, employee) = seeded().await;

        let first = service
            .book(booking(employee, "2025-06-10", "09:00", vec![services[0]]))
            .await
            .expect("reserva válida");

        let created = customers
            .find_by_phone("(11) 9999-9999")
            .await
            .expect("cliente criado pela reserva");
        assert_eq!(first.customer_id, Some(created.id));
        assert_eq!(created.total_visits, 0);

        // segunda reserva com o mesmo telefone reaproveita o cadastro
        let second = service
            .book(booking(employee, "2025-06-11", "10:00", vec![services[1]]))
            .await
            .expect("reserva válida");
        assert_eq!(second.customer_id, Some(created.id));
        assert_eq!(customers.list().await.len(), 1);
    }

    #[tokio::test]
    async fn completion_touches_customer_exactly_once() {
        let (service, _, customers, services, employee) = seeded().await;

        let appointment = service
            .book(booking(employee, "2025-06-10", "09:00", services.clone()))
            .await
            .expect("reserva válida");

        let update = |status: AppointmentStatus| UpdateAppointmentPayload {
            customer_name: appointment.customer_name.clone(),
            phone: appointment.phone.clone(),
            customer_id: appointment.customer_id,
            employee_id: appointment.employee_id,
            date: appointment.date,
            time: appointment.time.clone(),
            services: services.clone(),
            status,
            observations: None,
        };

        service
            .update(appointment.id, update(AppointmentStatus::Completed))
            .await
            .expect("atualização");

        let customer = customers
            .find_by_phone("(11) 9999-9999")
            .await
            .expect("cliente");
        assert_eq!(customer.total_visits, 1);
        assert_eq!(customer.total_spent, Decimal::new(7500, 2));
        assert_eq!(customer.last_visit, Some(date("2025-06-10")));

        // permanecer em `completed` não repete o toque
        service
            .update(appointment.id, update(AppointmentStatus::Completed))
            .await
            .expect("atualização");
        let customer = customers
            .find_by_phone("(11) 9999-9999")
            .await
            .expect("cliente");
        assert_eq!(customer.total_visits, 1);
    }

    #[tokio::test]
    async fn deactivation_sweep_unassigns_and_reschedules() {
        let (service, employees, _, services, employee) = seeded().await;

        let kept = service
            .book(booking(employee, "2025-06-10", "09:00", vec![services[0]]))
            .await
            .expect("reserva válida");
        let completed = service
            .book(CreateAppointmentPayload {
                status: Some(AppointmentStatus::Completed),
                ..booking(employee, "2025-06-09", "10:00", vec![services[1]])
            })
            .await
            .expect("reserva válida");

        employees
            .apply_update(
                employee,
                UpdateEmployeePayload {
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .expect("funcionário existe");
        let swept = service.on_employee_set_changed().await;
        assert_eq!(swept, 2);

        for id in [kept.id, completed.id] {
            let appointment = service.find_by_id(id).await.expect("agendamento");
            assert_eq!(appointment.employee_id, None);
            assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        }
    }

    #[tokio::test]
    async fn update_recomputes_derived_totals_from_services() {
        let (service, _, _, services, employee) = seeded().await;

        let appointment = service
            .book(booking(employee, "2025-06-10", "09:00", services.clone()))
            .await
            .expect("reserva válida");

        let updated = service
            .update(
                appointment.id,
                UpdateAppointmentPayload {
                    customer_name: appointment.customer_name.clone(),
                    phone: appointment.phone.clone(),
                    customer_id: appointment.customer_id,
                    employee_id: appointment.employee_id,
                    date: appointment.date,
                    time: "11:00".into(),
                    services: vec![services[1]],
                    status: AppointmentStatus::Confirmed,
                    observations: Some("trocou para só escova".into()),
                },
            )
            .await
            .expect("atualização");

        assert_eq!(updated.price, Decimal::new(3000, 2));
        assert_eq!(updated.duration_minutes, 45);
        assert_eq!(updated.service_label, "Escova");
    }
}
