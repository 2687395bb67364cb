// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, UserRepository},
    models::{
        auth::{Role, User},
        customer::CreateCustomerPayload,
    },
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    customer_repo: CustomerRepository,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, customer_repo: CustomerRepository) -> Self {
        Self {
            user_repo,
            customer_repo,
        }
    }

    /// Registra a conta de acesso e o cadastro de cliente correspondente.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: &str,
    ) -> Result<(String, User), AppError> {
        // Hashing fora do runtime (bcrypt é caro)
        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        let user = self
            .user_repo
            .create_user(name, email, &hashed_password, Role::User)
            .await?;

        // Quem se registra pelo site também vira cliente do salão.
        if self.customer_repo.find_by_phone(phone).await.is_none() {
            self.customer_repo
                .insert(CreateCustomerPayload {
                    name: name.to_owned(),
                    email: email.to_owned(),
                    phone: phone.to_owned(),
                    birth_date: None,
                    address: None,
                    notes: None,
                    preferences: None,
                })
                .await;
        }

        let token = self.create_session(user.id).await;
        Ok((token, user))
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<(String, User), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .filter(|u| u.is_active)
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.create_session(user.id).await;
        Ok((token, user))
    }

    pub async fn logout(&self, token: &str) {
        self.user_repo.delete_session(token).await;
    }

    /// Sessão válida e não expirada -> usuário ativo.
    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let session = self
            .user_repo
            .find_valid_session(token, Utc::now())
            .await
            .ok_or(AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(session.user_id)
            .await
            .filter(|u| u.is_active)
            .ok_or(AppError::UserNotFound)
    }

    /// Semeia a conta administrativa na subida quando não existe nenhum
    /// usuário (primeira execução).
    pub async fn bootstrap_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AppError> {
        if self.user_repo.has_users().await {
            return Ok(());
        }

        let password_clone = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_clone, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.user_repo
            .create_user(name, email, &hashed_password, Role::Admin)
            .await?;
        tracing::info!("👤 Conta administrativa inicial criada: {}", email);
        Ok(())
    }

    // Token opaco de sessão, 24 horas de validade.
    async fn create_session(&self, user_id: Uuid) -> String {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + chrono::Duration::hours(24);
        self.user_repo
            .create_session(user_id, &token, expires_at)
            .await;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(UserRepository::new(), CustomerRepository::new())
    }

    #[tokio::test]
    async fn register_login_and_session_validation_round_trip() {
        let auth = service();

        let (token, user) = auth
            .register_user(
                "Maria Silva",
                "maria.silva@email.com",
                "segredo1",
                "(11) 9999-9999",
            )
            .await
            .expect("registro");
        assert_eq!(user.role, Role::User);

        let validated = auth.validate_token(&token).await.expect("sessão válida");
        assert_eq!(validated.id, user.id);

        let (login_token, _) = auth
            .login_user("maria.silva@email.com", "segredo1")
            .await
            .expect("login");
        assert_ne!(login_token, token);

        auth.logout(&login_token).await;
        assert!(auth.validate_token(&login_token).await.is_err());
        // a primeira sessão segue válida
        assert!(auth.validate_token(&token).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_email_and_wrong_password_are_rejected() {
        let auth = service();
        auth.register_user("Maria", "maria@email.com", "segredo1", "(11) 9999-9999")
            .await
            .expect("registro");

        let err = auth
            .register_user("Outra Maria", "maria@email.com", "segredo2", "(11) 8888-8888")
            .await
            .expect_err("e-mail duplicado");
        assert!(matches!(err, AppError::EmailAlreadyExists));

        let err = auth
            .login_user("maria@email.com", "senha-errada")
            .await
            .expect_err("senha inválida");
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn bootstrap_admin_only_seeds_an_empty_user_set() {
        let auth = service();
        auth.bootstrap_admin("Admin", "admin@salao.com", "admin123")
            .await
            .expect("bootstrap");

        let (_, admin) = auth
            .login_user("admin@salao.com", "admin123")
            .await
            .expect("login do admin");
        assert_eq!(admin.role, Role::Admin);

        // segunda subida não recria nem duplica
        auth.bootstrap_admin("Admin", "admin@salao.com", "outra-senha")
            .await
            .expect("bootstrap idempotente");
        assert!(auth.login_user("admin@salao.com", "outra-senha").await.is_err());
    }
}
