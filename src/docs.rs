// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::get_me,

        // --- Booking (widget público) ---
        handlers::booking::list_active_employees,
        handlers::booking::list_active_services,
        handlers::booking::available_slots,
        handlers::booking::create_booking,
        handlers::booking::my_appointments,

        // --- Employees ---
        handlers::employees::list_employees,
        handlers::employees::create_employee,
        handlers::employees::get_employee,
        handlers::employees::update_employee,
        handlers::employees::deactivate_employee,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::create_customer,
        handlers::customers::get_customer,
        handlers::customers::update_customer,
        handlers::customers::delete_customer,

        // --- Services ---
        handlers::catalog::list_services,
        handlers::catalog::create_service,
        handlers::catalog::update_service,
        handlers::catalog::delete_service,

        // --- Appointments ---
        handlers::appointments::list_appointments,
        handlers::appointments::available_slots,
        handlers::appointments::create_appointment,
        handlers::appointments::get_appointment,
        handlers::appointments::update_appointment,
        handlers::appointments::cancel_appointment,
        handlers::appointments::delete_appointment,

        // --- Inventory ---
        handlers::products::list_products,
        handlers::products::create_product,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::adjust_stock,
        handlers::products::delete_product,

        // --- Payments ---
        handlers::payments::list_payments,
        handlers::payments::create_payment,
        handlers::payments::revenue_summary,
        handlers::payments::get_payment,
        handlers::payments::update_payment,
        handlers::payments::delete_payment,

        // --- Loyalty ---
        handlers::loyalty::list_members,
        handlers::loyalty::enroll_member,
        handlers::loyalty::get_member,
        handlers::loyalty::remove_member,
        handlers::loyalty::add_points,
        handlers::loyalty::redeem_points,
        handlers::loyalty::override_level,
        handlers::loyalty::list_transactions,
        handlers::loyalty::list_rewards,
        handlers::loyalty::create_reward,
        handlers::loyalty::update_reward,
        handlers::loyalty::delete_reward,
        handlers::loyalty::redeem_reward,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_revenue_chart,
        handlers::dashboard::get_top_services,
        handlers::dashboard::get_low_stock,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::Role,
            models::auth::User,
            models::auth::RegisterUserPayload,
            models::auth::LoginUserPayload,
            models::auth::AuthResponse,

            // --- Employees ---
            models::employee::WorkingHours,
            models::employee::Employee,
            models::employee::CreateEmployeePayload,
            models::employee::UpdateEmployeePayload,

            // --- Customers ---
            models::customer::CustomerStatus,
            models::customer::Customer,
            models::customer::CreateCustomerPayload,
            models::customer::UpdateCustomerPayload,

            // --- Services ---
            models::catalog::Service,
            models::catalog::CreateServicePayload,
            models::catalog::UpdateServicePayload,

            // --- Appointments ---
            models::appointment::AppointmentStatus,
            models::appointment::Appointment,
            models::appointment::AvailableSlots,
            models::appointment::BookingPayload,
            models::appointment::CreateAppointmentPayload,
            models::appointment::UpdateAppointmentPayload,

            // --- Inventory ---
            models::inventory::Product,
            models::inventory::CreateProductPayload,
            models::inventory::UpdateProductPayload,
            models::inventory::StockOperation,
            models::inventory::AdjustStockPayload,

            // --- Payments ---
            models::payment::PaymentMethod,
            models::payment::PaymentKind,
            models::payment::Payment,
            models::payment::CreatePaymentPayload,
            models::payment::UpdatePaymentPayload,
            models::payment::SummaryPeriod,
            models::payment::RevenueSummary,

            // --- Loyalty ---
            models::loyalty::LoyaltyLevel,
            models::loyalty::LoyaltyMember,
            models::loyalty::LoyaltyCustomer,
            models::loyalty::TransactionKind,
            models::loyalty::PointsTransaction,
            models::loyalty::Reward,
            models::loyalty::EnrollPayload,
            models::loyalty::PointsPayload,
            models::loyalty::LevelPayload,
            models::loyalty::CreateRewardPayload,
            models::loyalty::UpdateRewardPayload,
            models::loyalty::RedeemRewardPayload,
            models::loyalty::RedeemOutcome,

            // --- Dashboard ---
            models::dashboard::DashboardSummary,
            models::dashboard::RevenueChartEntry,
            models::dashboard::TopServiceEntry,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e Registro"),
        (name = "Booking", description = "Widget público de agendamento"),
        (name = "Employees", description = "Gestão de Funcionários"),
        (name = "Customers", description = "Gestão de Clientes"),
        (name = "Services", description = "Catálogo de Serviços"),
        (name = "Appointments", description = "Agenda Administrativa"),
        (name = "Inventory", description = "Gestão de Estoque e Produtos"),
        (name = "Payments", description = "Caixa e Lançamentos"),
        (name = "Loyalty", description = "Programa de Fidelidade"),
        (name = "Dashboard", description = "Indicadores e Relatórios")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_token",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
