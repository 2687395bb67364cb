use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro central, com `thiserror` para melhor ergonomia.
// Toda operação de serviço/registro devolve `Result<_, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("E-mail já existe")]
    EmailAlreadyExists,

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Sessão inválida")]
    InvalidToken,

    #[error("Acesso restrito a administradores")]
    Forbidden,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Funcionário não encontrado")]
    EmployeeNotFound,

    #[error("Cliente não encontrado")]
    CustomerNotFound,

    #[error("Serviço não encontrado")]
    ServiceNotFound,

    #[error("Agendamento não encontrado")]
    AppointmentNotFound,

    #[error("Produto não encontrado")]
    ProductNotFound,

    #[error("Pagamento não encontrado")]
    PaymentNotFound,

    #[error("Recompensa não encontrada")]
    RewardNotFound,

    #[error("Cliente não inscrito no programa de fidelidade")]
    LoyaltyMemberNotFound,

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),

    #[error("Erro de Bcrypt: {0}")]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            // Devolve todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "Um ou mais campos são inválidos.",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }
            AppError::EmailAlreadyExists => (StatusCode::CONFLICT, "Este e-mail já está em uso."),
            AppError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Sessão inválida ou expirada."),
            AppError::Forbidden => {
                (StatusCode::FORBIDDEN, "Você não tem permissão para esta operação.")
            }
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuário não encontrado."),
            AppError::EmployeeNotFound => (StatusCode::NOT_FOUND, "Funcionário não encontrado."),
            AppError::CustomerNotFound => (StatusCode::NOT_FOUND, "Cliente não encontrado."),
            AppError::ServiceNotFound => (StatusCode::NOT_FOUND, "Serviço não encontrado."),
            AppError::AppointmentNotFound => {
                (StatusCode::NOT_FOUND, "Agendamento não encontrado.")
            }
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, "Produto não encontrado."),
            AppError::PaymentNotFound => (StatusCode::NOT_FOUND, "Pagamento não encontrado."),
            AppError::RewardNotFound => (StatusCode::NOT_FOUND, "Recompensa não encontrada."),
            AppError::LoyaltyMemberNotFound => {
                (StatusCode::NOT_FOUND, "Cliente não inscrito no programa de fidelidade.")
            }

            // Todos os outros erros viram 500.
            // O `tracing` vai logar a mensagem detalhada que `thiserror` nos deu.
            ref e => {
                tracing::error!("Erro Interno do Servidor: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado.")
            }
        };

        // Resposta padrão para erros simples que só têm uma mensagem.
        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
