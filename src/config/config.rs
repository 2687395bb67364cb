// src/config/config.rs

use std::env;

use crate::{
    db::{
        AppointmentRepository, CustomerRepository, EmployeeRepository, LoyaltyRepository,
        PaymentRepository, ProductRepository, ServiceRepository, UserRepository,
    },
    services::{
        auth::AuthService, catalog_service::CatalogService, customer_service::CustomerService,
        dashboard_service::DashboardService, employee_service::EmployeeService,
        inventory_service::InventoryService, loyalty_service::LoyaltyService,
        payment_service::PaymentService, scheduling_service::SchedulingService,
    },
};

/// Fonte única de verdade do horário comercial: o widget público abre uma
/// hora depois da grade administrativa, ambos derivados daqui.
#[derive(Clone, Copy, Debug)]
pub struct BusinessHours {
    pub open_hour: u32,
    pub public_open_hour: u32,
    pub close_hour: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_hour: 8,
            public_open_hour: 9,
            close_hour: 18,
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação: cada
// registro e serviço é construído uma vez aqui e injetado nos consumidores.
#[derive(Clone)]
pub struct AppState {
    pub business_hours: BusinessHours,
    pub auth_service: AuthService,
    pub employee_service: EmployeeService,
    pub customer_service: CustomerService,
    pub catalog_service: CatalogService,
    pub scheduling_service: SchedulingService,
    pub inventory_service: InventoryService,
    pub payment_service: PaymentService,
    pub loyalty_service: LoyaltyService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let business_hours = BusinessHours {
            open_hour: env_hour("OPEN_HOUR", 8)?,
            public_open_hour: env_hour("PUBLIC_OPEN_HOUR", 9)?,
            close_hour: env_hour("CLOSE_HOUR", 18)?,
        };
        anyhow::ensure!(
            business_hours.open_hour <= business_hours.public_open_hour
                && business_hours.public_open_hour < business_hours.close_hour,
            "Horário comercial inválido: abertura deve vir antes do fechamento"
        );

        // --- Coleções ---
        let user_repo = UserRepository::new();
        let employee_repo = EmployeeRepository::new();
        let customer_repo = CustomerRepository::new();
        let service_repo = ServiceRepository::new();
        let appointment_repo = AppointmentRepository::new();
        let product_repo = ProductRepository::new();
        let payment_repo = PaymentRepository::new();
        let loyalty_repo = LoyaltyRepository::new();

        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(user_repo, customer_repo.clone());
        let scheduling_service = SchedulingService::new(
            appointment_repo.clone(),
            employee_repo.clone(),
            customer_repo.clone(),
            service_repo.clone(),
        );
        let employee_service =
            EmployeeService::new(employee_repo, scheduling_service.clone());
        let customer_service = CustomerService::new(customer_repo.clone());
        let catalog_service = CatalogService::new(service_repo);
        let inventory_service = InventoryService::new(product_repo.clone());
        let payment_service = PaymentService::new(payment_repo.clone());
        let loyalty_service = LoyaltyService::new(loyalty_repo, customer_repo.clone());
        let dashboard_service = DashboardService::new(
            appointment_repo,
            customer_repo,
            product_repo,
            payment_repo,
            payment_service.clone(),
            loyalty_service.clone(),
        );

        // Conta administrativa inicial (apenas na primeira subida)
        let admin_email =
            env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@salao.com".to_owned());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_owned());
        auth_service
            .bootstrap_admin("Administrador", &admin_email, &admin_password)
            .await?;

        Ok(Self {
            business_hours,
            auth_service,
            employee_service,
            customer_service,
            catalog_service,
            scheduling_service,
            inventory_service,
            payment_service,
            loyalty_service,
            dashboard_service,
        })
    }
}

fn env_hour(name: &str, default: u32) -> anyhow::Result<u32> {
    match env::var(name) {
        Ok(value) => {
            let hour: u32 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("{} deve ser uma hora entre 0 e 23", name))?;
            anyhow::ensure!(hour < 24, "{} deve ser uma hora entre 0 e 23", name);
            Ok(hour)
        }
        Err(_) => Ok(default),
    }
}

// Cenário atravessando os serviços já injetados: o fluxo completo de um dia
// de salão, do agendamento público à fidelidade.
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{
        appointment::{AppointmentStatus, CreateAppointmentPayload, UpdateAppointmentPayload},
        catalog::CreateServicePayload,
        employee::{CreateEmployeePayload, WorkingHours},
        payment::{CreatePaymentPayload, PaymentKind, PaymentMethod},
    };

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("data de teste válida")
    }

    #[tokio::test]
    async fn full_salon_flow_from_booking_to_loyalty() {
        let state = AppState::new().await.expect("estado inicial");

        // catálogo e equipe
        let corte = state
            .catalog_service
            .create(CreateServicePayload {
                name: "Corte Feminino".into(),
                category: "Cabelo".into(),
                price: Decimal::new(4500, 2),
                duration: 60,
                description: String::new(),
                is_active: true,
            })
            .await;
        let escova = state
            .catalog_service
            .create(CreateServicePayload {
                name: "Escova".into(),
                category: "Cabelo".into(),
                price: Decimal::new(3000, 2),
                duration: 45,
                description: String::new(),
                is_active: true,
            })
            .await;
        let employee = state
            .employee_service
            .create(CreateEmployeePayload {
                name: "João Silva".into(),
                position: "Cabeleireiro".into(),
                email: "joao@salao.com".into(),
                phone: "(11) 9876-4321".into(),
                specialties: vec!["Corte Feminino".into()],
                hire_date: date("2021-01-15"),
                working_hours: WorkingHours {
                    start: "08:00".into(),
                    end: "18:00".into(),
                },
            })
            .await;

        // a grade pública abre às 09:00, a administrativa às 08:00
        let hours = state.business_hours;
        let public = state
            .scheduling_service
            .available_slots(
                date("2025-06-10"),
                Some(employee.id),
                hours.public_open_hour,
                hours.close_hour,
            )
            .await;
        assert_eq!(public.first().map(String::as_str), Some("09:00"));
        let admin = state
            .scheduling_service
            .available_slots(
                date("2025-06-10"),
                Some(employee.id),
                hours.open_hour,
                hours.close_hour,
            )
            .await;
        assert_eq!(admin.first().map(String::as_str), Some("08:00"));

        // reserva pública cria o cliente pelo telefone desconhecido
        let appointment = state
            .scheduling_service
            .book(CreateAppointmentPayload {
                customer_name: "Maria Silva".into(),
                phone: "(11) 9999-9999".into(),
                customer_id: None,
                employee_id: employee.id,
                date: date("2025-06-10"),
                time: "09:00".into(),
                services: vec![corte.id, escova.id],
                status: None,
                observations: None,
            })
            .await
            .expect("reserva");
        assert_eq!(appointment.price, Decimal::new(7500, 2));

        let slots_after = state
            .scheduling_service
            .available_slots(
                date("2025-06-10"),
                Some(employee.id),
                hours.public_open_hour,
                hours.close_hour,
            )
            .await;
        assert!(!slots_after.contains(&"09:00".to_string()));

        // conclusão toca o cadastro do cliente
        state
            .scheduling_service
            .update(
                appointment.id,
                UpdateAppointmentPayload {
                    customer_name: appointment.customer_name.clone(),
                    phone: appointment.phone.clone(),
                    customer_id: appointment.customer_id,
                    employee_id: appointment.employee_id,
                    date: appointment.date,
                    time: appointment.time.clone(),
                    services: appointment.services.clone(),
                    status: AppointmentStatus::Completed,
                    observations: None,
                },
            )
            .await
            .expect("conclusão");

        let customer = state
            .customer_service
            .search("(11) 9999-9999")
            .await
            .into_iter()
            .next()
            .expect("cliente criado pela reserva");
        assert_eq!(customer.total_visits, 1);
        assert_eq!(customer.total_spent, Decimal::new(7500, 2));

        // caixa e fidelidade fecham o ciclo
        state
            .payment_service
            .add(CreatePaymentPayload {
                customer_id: Some(customer.id),
                customer_name: customer.name.clone(),
                amount: appointment.price,
                payment_method: PaymentMethod::Pix,
                description: appointment.service_label.clone(),
                date: appointment.date,
                time: "10:45".into(),
                kind: PaymentKind::Income,
            })
            .await;

        state
            .loyalty_service
            .enroll(customer.id)
            .await
            .expect("inscrição");
        state
            .loyalty_service
            .add_points(customer.id, 75, "Visita concluída")
            .await
            .expect("crédito");

        let summary = state.dashboard_service.summary(date("2025-06-10")).await;
        assert_eq!(summary.revenue_today, Decimal::new(7500, 2));
        assert_eq!(summary.loyalty_members, 1);

        // desativar o profissional varre o agendamento de volta para a fila
        state
            .employee_service
            .deactivate(employee.id)
            .await
            .expect("desativação");
        let swept = state
            .scheduling_service
            .find_by_id(appointment.id)
            .await
            .expect("agendamento");
        assert_eq!(swept.employee_id, None);
        assert_eq!(swept.status, AppointmentStatus::Scheduled);
    }
}
