// src/db/loyalty_repo.rs

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::loyalty::{
        CreateRewardPayload, LoyaltyLevel, LoyaltyMember, PointsTransaction, Reward,
        TransactionKind, UpdateRewardPayload,
    },
};

#[derive(Clone, Default)]
pub struct LoyaltyRepository {
    members: Collection<LoyaltyMember>,
    transactions: Collection<PointsTransaction>,
    rewards: Collection<Reward>,
}

impl LoyaltyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Membros ---

    pub async fn find_member(&self, customer_id: Uuid) -> Option<LoyaltyMember> {
        self.members
            .find_one(|m| m.customer_id == customer_id)
            .await
    }

    pub async fn members(&self) -> Vec<LoyaltyMember> {
        self.members.all().await
    }

    pub async fn member_count(&self) -> usize {
        self.members.count(|_| true).await
    }

    /// Inscrição idempotente: se já é membro, devolve o registro existente
    /// sem tocar em nada.
    pub async fn enroll(&self, customer_id: Uuid, joined: NaiveDate) -> LoyaltyMember {
        if let Some(member) = self.find_member(customer_id).await {
            return member;
        }
        self.members
            .insert(LoyaltyMember {
                customer_id,
                points: 0,
                level: LoyaltyLevel::Bronze,
                joined_date: joined,
            })
            .await
    }

    /// Remoção descarta pontos, nível e data de inscrição; sem histórico.
    pub async fn remove_member(&self, customer_id: Uuid) -> usize {
        self.members.delete(|m| m.customer_id == customer_id).await
    }

    /// Credita pontos e reavalia o nível sob o mesmo lock.
    pub async fn credit(
        &self,
        customer_id: Uuid,
        points: i64,
        level_for: fn(i64) -> LoyaltyLevel,
    ) -> Option<LoyaltyMember> {
        self.members
            .update_one(
                |m| m.customer_id == customer_id,
                |m| {
                    m.points += points;
                    m.level = level_for(m.points);
                },
            )
            .await
    }

    /// Débito guardado: o filtro exige saldo suficiente, então a checagem e
    /// a escrita acontecem atomicamente — o saldo nunca fica negativo.
    pub async fn debit_if_sufficient(
        &self,
        customer_id: Uuid,
        points: i64,
        level_for: fn(i64) -> LoyaltyLevel,
    ) -> Option<LoyaltyMember> {
        self.members
            .update_one(
                |m| m.customer_id == customer_id && m.points >= points,
                |m| {
                    m.points -= points;
                    m.level = level_for(m.points);
                },
            )
            .await
    }

    /// Sobrescrita manual do nível — um snapshot: a próxima mudança de
    /// pontos recalcula a partir do saldo.
    pub async fn override_level(
        &self,
        customer_id: Uuid,
        level: LoyaltyLevel,
    ) -> Option<LoyaltyMember> {
        self.members
            .update_one(|m| m.customer_id == customer_id, |m| m.level = level)
            .await
    }

    // --- Log de transações (apenas-escrita) ---

    pub async fn log_transaction(
        &self,
        customer_id: Uuid,
        points: i64,
        kind: TransactionKind,
        description: &str,
    ) -> PointsTransaction {
        self.transactions
            .insert(PointsTransaction {
                id: Uuid::new_v4(),
                customer_id,
                points,
                kind,
                description: description.to_owned(),
                date: Utc::now(),
            })
            .await
    }

    pub async fn transactions(&self, customer_id: Option<Uuid>) -> Vec<PointsTransaction> {
        match customer_id {
            Some(id) => self.transactions.select(|t| t.customer_id == id).await,
            None => self.transactions.all().await,
        }
    }

    // --- Catálogo de recompensas ---

    pub async fn insert_reward(&self, payload: CreateRewardPayload) -> Reward {
        self.rewards
            .insert(Reward {
                id: Uuid::new_v4(),
                name: payload.name,
                description: payload.description,
                points_cost: payload.points_cost,
                available: payload.available,
            })
            .await
    }

    pub async fn rewards(&self) -> Vec<Reward> {
        self.rewards.all().await
    }

    pub async fn find_reward(&self, id: Uuid) -> Option<Reward> {
        self.rewards.find_one(|r| r.id == id).await
    }

    pub async fn apply_reward_update(
        &self,
        id: Uuid,
        payload: UpdateRewardPayload,
    ) -> Option<Reward> {
        self.rewards
            .update_one(
                |r| r.id == id,
                |r| {
                    if let Some(name) = payload.name {
                        r.name = name;
                    }
                    if let Some(description) = payload.description {
                        r.description = description;
                    }
                    if let Some(points_cost) = payload.points_cost {
                        r.points_cost = points_cost;
                    }
                    if let Some(available) = payload.available {
                        r.available = available;
                    }
                },
            )
            .await
    }

    pub async fn delete_reward(&self, id: Uuid) -> usize {
        self.rewards.delete(|r| r.id == id).await
    }
}
