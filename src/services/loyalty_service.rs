// src/services/loyalty_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CustomerRepository, LoyaltyRepository},
    models::loyalty::{
        CreateRewardPayload, LoyaltyCustomer, LoyaltyLevel, LoyaltyMember, PointsTransaction,
        RedeemOutcome, Reward, TransactionKind, UpdateRewardPayload,
    },
};

/// Classificação derivada do saldo, avaliada a cada mudança de pontos.
pub fn level_for_points(points: i64) -> LoyaltyLevel {
    if points >= 500 {
        return LoyaltyLevel::Diamante;
    }
    if points >= 300 {
        return LoyaltyLevel::Ouro;
    }
    if points >= 150 {
        return LoyaltyLevel::Prata;
    }
    LoyaltyLevel::Bronze
}

#[derive(Clone)]
pub struct LoyaltyService {
    loyalty: LoyaltyRepository,
    customers: CustomerRepository,
}

impl LoyaltyService {
    pub fn new(loyalty: LoyaltyRepository, customers: CustomerRepository) -> Self {
        Self { loyalty, customers }
    }

    // =========================================================================
    //  INSCRIÇÃO
    // =========================================================================

    /// Idempotente: inscrever quem já é membro devolve o registro como está.
    pub async fn enroll(&self, customer_id: Uuid) -> Result<LoyaltyMember, AppError> {
        self.customers
            .find_by_id(customer_id)
            .await
            .ok_or(AppError::CustomerNotFound)?;
        Ok(self
            .loyalty
            .enroll(customer_id, Utc::now().date_naive())
            .await)
    }

    /// Descarta pontos, nível e data de inscrição. O cadastro de cliente
    /// fica intacto; reinscrição começa do zero.
    pub async fn remove(&self, customer_id: Uuid) -> Result<(), AppError> {
        if self.loyalty.remove_member(customer_id).await == 0 {
            return Err(AppError::LoyaltyMemberNotFound);
        }
        Ok(())
    }

    pub async fn member(&self, customer_id: Uuid) -> Result<LoyaltyCustomer, AppError> {
        let member = self
            .loyalty
            .find_member(customer_id)
            .await
            .ok_or(AppError::LoyaltyMemberNotFound)?;
        self.to_view(member).await.ok_or(AppError::CustomerNotFound)
    }

    /// Membros inscritos, unidos ao cadastro de clientes. Membros cujo
    /// cadastro foi excluído ficam de fora da visão.
    pub async fn members(&self) -> Vec<LoyaltyCustomer> {
        let mut views = Vec::new();
        for member in self.loyalty.members().await {
            if let Some(view) = self.to_view(member).await {
                views.push(view);
            }
        }
        views
    }

    async fn to_view(&self, member: LoyaltyMember) -> Option<LoyaltyCustomer> {
        let customer = self.customers.find_by_id(member.customer_id).await?;
        Some(LoyaltyCustomer {
            customer,
            points: member.points,
            level: member.level,
            joined_date: member.joined_date,
        })
    }

    // =========================================================================
    //  PONTOS
    // =========================================================================

    /// Credita pontos, reavalia o nível e registra a transação `earned`.
    pub async fn add_points(
        &self,
        customer_id: Uuid,
        points: i64,
        description: &str,
    ) -> Result<LoyaltyMember, AppError> {
        let member = self
            .loyalty
            .credit(customer_id, points, level_for_points)
            .await
            .ok_or(AppError::LoyaltyMemberNotFound)?;
        self.loyalty
            .log_transaction(customer_id, points, TransactionKind::Earned, description)
            .await;
        Ok(member)
    }

    /// Resgate guardado: saldo insuficiente (ou não-membro) devolve `false`
    /// sem mudar nada. O saldo nunca fica negativo.
    pub async fn redeem_points(
        &self,
        customer_id: Uuid,
        points: i64,
        description: &str,
    ) -> Result<RedeemOutcome, AppError> {
        match self
            .loyalty
            .debit_if_sufficient(customer_id, points, level_for_points)
            .await
        {
            Some(member) => {
                self.loyalty
                    .log_transaction(customer_id, points, TransactionKind::Redeemed, description)
                    .await;
                Ok(RedeemOutcome {
                    redeemed: true,
                    balance: member.points,
                })
            }
            None => {
                let balance = self
                    .loyalty
                    .find_member(customer_id)
                    .await
                    .map(|m| m.points)
                    .unwrap_or(0);
                Ok(RedeemOutcome {
                    redeemed: false,
                    balance,
                })
            }
        }
    }

    /// Sobrescrita manual do nível: vale até a próxima mudança de pontos,
    /// que recalcula a partir do saldo.
    pub async fn override_level(
        &self,
        customer_id: Uuid,
        level: LoyaltyLevel,
    ) -> Result<LoyaltyMember, AppError> {
        self.loyalty
            .override_level(customer_id, level)
            .await
            .ok_or(AppError::LoyaltyMemberNotFound)
    }

    pub async fn transactions(&self, customer_id: Option<Uuid>) -> Vec<PointsTransaction> {
        self.loyalty.transactions(customer_id).await
    }

    // =========================================================================
    //  RECOMPENSAS
    // =========================================================================

    pub async fn add_reward(&self, payload: CreateRewardPayload) -> Reward {
        self.loyalty.insert_reward(payload).await
    }

    pub async fn rewards(&self) -> Vec<Reward> {
        self.loyalty.rewards().await
    }

    pub async fn update_reward(
        &self,
        id: Uuid,
        payload: UpdateRewardPayload,
    ) -> Result<Reward, AppError> {
        self.loyalty
            .apply_reward_update(id, payload)
            .await
            .ok_or(AppError::RewardNotFound)
    }

    pub async fn delete_reward(&self, id: Uuid) -> Result<(), AppError> {
        if self.loyalty.delete_reward(id).await == 0 {
            return Err(AppError::RewardNotFound);
        }
        Ok(())
    }

    /// Recompensa inexistente ou indisponível devolve `false` sem efeito;
    /// caso contrário delega ao resgate de pontos.
    pub async fn redeem_reward(
        &self,
        customer_id: Uuid,
        reward_id: Uuid,
    ) -> Result<RedeemOutcome, AppError> {
        let reward = match self.loyalty.find_reward(reward_id).await {
            Some(reward) if reward.available => reward,
            _ => {
                let balance = self
                    .loyalty
                    .find_member(customer_id)
                    .await
                    .map(|m| m.points)
                    .unwrap_or(0);
                return Ok(RedeemOutcome {
                    redeemed: false,
                    balance,
                });
            }
        };
        self.redeem_points(
            customer_id,
            reward.points_cost,
            &format!("Resgate: {}", reward.name),
        )
        .await
    }

    pub async fn member_count(&self) -> usize {
        self.loyalty.member_count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::customer::CreateCustomerPayload;

    async fn seeded() -> (LoyaltyService, Uuid) {
        let customers = CustomerRepository::new();
        let customer = customers
            .insert(CreateCustomerPayload {
                name: "Maria Silva".into(),
                email: "maria.silva@email.com".into(),
                phone: "(11) 9999-9999".into(),
                birth_date: None,
                address: None,
                notes: None,
                preferences: None,
            })
            .await;
        let service = LoyaltyService::new(LoyaltyRepository::new(), customers);
        (service, customer.id)
    }

    #[test]
    fn level_thresholds_match_the_program_table() {
        assert_eq!(level_for_points(0), LoyaltyLevel::Bronze);
        assert_eq!(level_for_points(149), LoyaltyLevel::Bronze);
        assert_eq!(level_for_points(150), LoyaltyLevel::Prata);
        assert_eq!(level_for_points(299), LoyaltyLevel::Prata);
        assert_eq!(level_for_points(300), LoyaltyLevel::Ouro);
        assert_eq!(level_for_points(499), LoyaltyLevel::Ouro);
        assert_eq!(level_for_points(500), LoyaltyLevel::Diamante);
    }

    #[test]
    fn level_is_monotonic_in_points() {
        let mut previous = level_for_points(0);
        for points in 1..=600 {
            let level = level_for_points(points);
            assert!(level >= previous, "nível regrediu em {points} pontos");
            previous = level;
        }
    }

    #[tokio::test]
    async fn enrollment_is_idempotent() {
        let (service, customer_id) = seeded().await;

        let first = service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 120, "Visita")
            .await
            .expect("crédito");

        let second = service.enroll(customer_id).await.expect("reinscrição");
        assert_eq!(second.points, 120);
        assert_eq!(second.joined_date, first.joined_date);
        assert_eq!(service.member_count().await, 1);
    }

    #[tokio::test]
    async fn accrual_recomputes_level_and_logs_transaction() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");

        let member = service
            .add_points(customer_id, 320, "Pacote de coloração")
            .await
            .expect("crédito");
        assert_eq!(member.points, 320);
        assert_eq!(member.level, LoyaltyLevel::Ouro);

        let log = service.transactions(Some(customer_id)).await;
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, TransactionKind::Earned);
        assert_eq!(log[0].points, 320);
    }

    #[tokio::test]
    async fn redemption_never_drives_balance_negative() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 140, "Visitas")
            .await
            .expect("crédito");

        let denied = service
            .redeem_points(customer_id, 150, "Resgate negado")
            .await
            .expect("resgate");
        assert!(!denied.redeemed);
        assert_eq!(denied.balance, 140);

        let granted = service
            .redeem_points(customer_id, 140, "Resgate total")
            .await
            .expect("resgate");
        assert!(granted.redeemed);
        assert_eq!(granted.balance, 0);

        // só o resgate efetivado aparece no log
        let log = service.transactions(Some(customer_id)).await;
        let redeemed: Vec<_> = log
            .iter()
            .filter(|t| t.kind == TransactionKind::Redeemed)
            .collect();
        assert_eq!(redeemed.len(), 1);
        assert_eq!(redeemed[0].points, 140);
    }

    #[tokio::test]
    async fn reward_redemption_respects_availability_and_balance() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 140, "Visitas")
            .await
            .expect("crédito");

        let reward = service
            .add_reward(CreateRewardPayload {
                name: "Desconto de 20%".into(),
                description: "Desconto em qualquer serviço".into(),
                points_cost: 150,
                available: true,
            })
            .await;

        // saldo 140 < custo 150: recusa sem alterar o saldo
        let outcome = service
            .redeem_reward(customer_id, reward.id)
            .await
            .expect("resgate");
        assert!(!outcome.redeemed);
        assert_eq!(outcome.balance, 140);

        service
            .add_points(customer_id, 10, "Ajuste")
            .await
            .expect("crédito");
        let outcome = service
            .redeem_reward(customer_id, reward.id)
            .await
            .expect("resgate");
        assert!(outcome.redeemed);
        assert_eq!(outcome.balance, 0);

        let log = service.transactions(Some(customer_id)).await;
        assert!(
            log.iter()
                .any(|t| t.description == "Resgate: Desconto de 20%")
        );
    }

    #[tokio::test]
    async fn unavailable_reward_is_refused_without_side_effects() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 500, "Visitas")
            .await
            .expect("crédito");

        let reward = service
            .add_reward(CreateRewardPayload {
                name: "Hidratação Gratuita".into(),
                description: String::new(),
                points_cost: 200,
                available: false,
            })
            .await;

        let outcome = service
            .redeem_reward(customer_id, reward.id)
            .await
            .expect("resgate");
        assert!(!outcome.redeemed);
        assert_eq!(outcome.balance, 500);
    }

    #[tokio::test]
    async fn level_override_is_a_snapshot_until_next_points_change() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 100, "Visitas")
            .await
            .expect("crédito");

        let member = service
            .override_level(customer_id, LoyaltyLevel::Diamante)
            .await
            .expect("sobrescrita");
        assert_eq!(member.level, LoyaltyLevel::Diamante);

        // a próxima mudança de pontos recalcula a partir do saldo
        let member = service
            .add_points(customer_id, 10, "Visita")
            .await
            .expect("crédito");
        assert_eq!(member.level, LoyaltyLevel::Bronze);
    }

    #[tokio::test]
    async fn removal_discards_state_and_reenrollment_starts_at_zero() {
        let (service, customer_id) = seeded().await;
        service.enroll(customer_id).await.expect("inscrição");
        service
            .add_points(customer_id, 400, "Visitas")
            .await
            .expect("crédito");

        service.remove(customer_id).await.expect("remoção");
        assert_eq!(service.member_count().await, 0);

        let member = service.enroll(customer_id).await.expect("reinscrição");
        assert_eq!(member.points, 0);
        assert_eq!(member.level, LoyaltyLevel::Bronze);
    }
}
