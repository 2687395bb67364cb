// src/main.rs

use axum::{
    Json, Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;

// Declaração dos nossos módulos
mod common;
mod config;
mod db;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;

use crate::config::AppState;
use crate::middleware::auth::{admin_guard, auth_guard};

#[tokio::main]
async fn main() {
    // Inicializa o logger uma única vez, no main.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new()
        .await
        .expect("Falha ao inicializar o estado da aplicação.");

    // Rotas de autenticação: registro e login são públicos, o restante exige sessão
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let session_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/logout", post(handlers::auth::logout))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // O widget público de agendamento: sem guarda
    let booking_routes = Router::new()
        .route("/", post(handlers::booking::create_booking))
        .route("/employees", get(handlers::booking::list_active_employees))
        .route("/services", get(handlers::booking::list_active_services))
        .route("/slots", get(handlers::booking::available_slots));

    // Portal do cliente logado
    let customer_portal_routes = Router::new()
        .route("/my-appointments", get(handlers::booking::my_appointments))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    let employee_routes = Router::new()
        .route(
            "/",
            post(handlers::employees::create_employee).get(handlers::employees::list_employees),
        )
        .route(
            "/{id}",
            get(handlers::employees::get_employee)
                .put(handlers::employees::update_employee)
                .delete(handlers::employees::deactivate_employee),
        );

    let customer_routes = Router::new()
        .route(
            "/",
            post(handlers::customers::create_customer).get(handlers::customers::list_customers),
        )
        .route(
            "/{id}",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        );

    let service_routes = Router::new()
        .route(
            "/",
            post(handlers::catalog::create_service).get(handlers::catalog::list_services),
        )
        .route(
            "/{id}",
            put(handlers::catalog::update_service).delete(handlers::catalog::delete_service),
        );

    let appointment_routes = Router::new()
        .route(
            "/",
            post(handlers::appointments::create_appointment)
                .get(handlers::appointments::list_appointments),
        )
        .route("/slots", get(handlers::appointments::available_slots))
        .route(
            "/{id}",
            get(handlers::appointments::get_appointment)
                .put(handlers::appointments::update_appointment)
                .delete(handlers::appointments::delete_appointment),
        )
        .route("/{id}/cancel", post(handlers::appointments::cancel_appointment));

    let product_routes = Router::new()
        .route(
            "/",
            post(handlers::products::create_product).get(handlers::products::list_products),
        )
        .route(
            "/{id}",
            get(handlers::products::get_product)
                .put(handlers::products::update_product)
                .delete(handlers::products::delete_product),
        )
        .route("/{id}/stock", post(handlers::products::adjust_stock));

    let payment_routes = Router::new()
        .route(
            "/",
            post(handlers::payments::create_payment).get(handlers::payments::list_payments),
        )
        .route("/summary", get(handlers::payments::revenue_summary))
        .route(
            "/{id}",
            get(handlers::payments::get_payment)
                .put(handlers::payments::update_payment)
                .delete(handlers::payments::delete_payment),
        );

    let loyalty_routes = Router::new()
        .route(
            "/members",
            post(handlers::loyalty::enroll_member).get(handlers::loyalty::list_members),
        )
        .route(
            "/members/{customer_id}",
            get(handlers::loyalty::get_member).delete(handlers::loyalty::remove_member),
        )
        .route(
            "/members/{customer_id}/points",
            post(handlers::loyalty::add_points),
        )
        .route(
            "/members/{customer_id}/redeem",
            post(handlers::loyalty::redeem_points),
        )
        .route(
            "/members/{customer_id}/level",
            put(handlers::loyalty::override_level),
        )
        .route("/transactions", get(handlers::loyalty::list_transactions))
        .route(
            "/rewards",
            post(handlers::loyalty::create_reward).get(handlers::loyalty::list_rewards),
        )
        .route(
            "/rewards/{id}",
            put(handlers::loyalty::update_reward).delete(handlers::loyalty::delete_reward),
        )
        .route("/rewards/{id}/redeem", post(handlers::loyalty::redeem_reward));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/revenue-chart", get(handlers::dashboard::get_revenue_chart))
        .route("/top-services", get(handlers::dashboard::get_top_services))
        .route("/low-stock", get(handlers::dashboard::get_low_stock));

    // Toda a área administrativa fica atrás do guardião de ADMIN
    let admin_routes = Router::new()
        .nest("/employees", employee_routes)
        .nest("/customers", customer_routes)
        .nest("/services", service_routes)
        .nest("/appointments", appointment_routes)
        .nest("/products", product_routes)
        .nest("/payments", payment_routes)
        .nest("/loyalty", loyalty_routes)
        .nest("/dashboard", dashboard_routes)
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            admin_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route(
            "/api/docs/openapi.json",
            get(|| async { Json(docs::ApiDoc::openapi()) }),
        )
        .nest("/api/auth", auth_routes)
        .nest("/api/auth", session_routes)
        .nest("/api/booking", booking_routes)
        .nest("/api/booking", customer_portal_routes)
        .nest("/api", admin_routes)
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("endereço local disponível")
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
