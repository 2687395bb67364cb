// src/db/user_repo.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::store::Collection,
    models::auth::{Role, Session, User},
};

// O registro de usuários e sessões, responsável por contas de acesso
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Collection<User>,
    sessions: Collection<Session>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.to_owned();
        self.users.find_one(|u| u.email == email).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.find_one(|u| u.id == id).await
    }

    pub async fn has_users(&self) -> bool {
        !self.users.is_empty().await
    }

    /// Cria um usuário; e-mail é único dentro da coleção.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AppError> {
        if self.find_by_email(email).await.is_some() {
            return Err(AppError::EmailAlreadyExists);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        Ok(self.users.insert(user).await)
    }

    // --- Sessões ---

    pub async fn create_session(
        &self,
        user_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Session {
        let session = Session {
            id: Uuid::new_v4(),
            token: token.to_owned(),
            user_id,
            expires_at,
            created_at: Utc::now(),
        };
        self.sessions.insert(session).await
    }

    /// Sessão válida = token igual e ainda não expirada.
    pub async fn find_valid_session(&self, token: &str, now: DateTime<Utc>) -> Option<Session> {
        let token = token.to_owned();
        self.sessions
            .find_one(|s| s.token == token && s.expires_at > now)
            .await
    }

    pub async fn delete_session(&self, token: &str) -> usize {
        let token = token.to_owned();
        self.sessions.delete(|s| s.token == token).await
    }
}
