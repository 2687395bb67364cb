// src/services/payment_service.rs

use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::PaymentRepository,
    models::payment::{
        CreatePaymentPayload, Payment, PaymentKind, RevenueSummary, SummaryPeriod,
        UpdatePaymentPayload,
    },
};

/// Janela de agregação: dia de referência, semana corrida (ref−6..ref) ou
/// mês-calendário do dia de referência.
fn period_bounds(period: SummaryPeriod, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        SummaryPeriod::Day => (reference, reference),
        SummaryPeriod::Week => (reference - Duration::days(6), reference),
        SummaryPeriod::Month => {
            let start = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1)
                .unwrap_or(reference);
            let end = start
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(reference);
            (start, end)
        }
    }
}

#[derive(Clone)]
pub struct PaymentService {
    repo: PaymentRepository,
}

impl PaymentService {
    pub fn new(repo: PaymentRepository) -> Self {
        Self { repo }
    }

    pub async fn add(&self, payload: CreatePaymentPayload) -> Payment {
        self.repo.insert(payload).await
    }

    pub async fn list(&self) -> Vec<Payment> {
        self.repo.list().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Payment, AppError> {
        self.repo.find_by_id(id).await.ok_or(AppError::PaymentNotFound)
    }

    pub async fn by_date(&self, date: NaiveDate) -> Vec<Payment> {
        self.repo.by_date(date).await
    }

    pub async fn by_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<Payment> {
        self.repo.by_period(start, end).await
    }

    pub async fn by_customer(&self, customer_id: Uuid) -> Vec<Payment> {
        self.repo.by_customer(customer_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdatePaymentPayload,
    ) -> Result<Payment, AppError> {
        self.repo
            .apply_update(id, payload)
            .await
            .ok_or(AppError::PaymentNotFound)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if self.repo.delete(id).await == 0 {
            return Err(AppError::PaymentNotFound);
        }
        Ok(())
    }

    pub async fn total_revenue(&self, period: SummaryPeriod, reference: NaiveDate) -> Decimal {
        self.total_of_kind(PaymentKind::Income, period, reference).await
    }

    pub async fn total_expenses(&self, period: SummaryPeriod, reference: NaiveDate) -> Decimal {
        self.total_of_kind(PaymentKind::Expense, period, reference).await
    }

    pub async fn summary(&self, period: SummaryPeriod, reference: NaiveDate) -> RevenueSummary {
        let (start, end) = period_bounds(period, reference);
        RevenueSummary {
            start_date: start,
            end_date: end,
            total_income: self.total_of_kind(PaymentKind::Income, period, reference).await,
            total_expenses: self.total_of_kind(PaymentKind::Expense, period, reference).await,
        }
    }

    async fn total_of_kind(
        &self,
        kind: PaymentKind,
        period: SummaryPeriod,
        reference: NaiveDate,
    ) -> Decimal {
        let (start, end) = period_bounds(period, reference);
        self.repo
            .by_kind_in_period(kind, start, end)
            .await
            .iter()
            .map(|p| p.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::payment::PaymentMethod;

    fn date(s: &str) -> NaiveDate {
        s.parse().expect("data de teste válida")
    }

    fn payment(name: &str, amount: i64, day: &str, kind: PaymentKind) -> CreatePaymentPayload {
        CreatePaymentPayload {
            customer_id: None,
            customer_name: name.into(),
            amount: Decimal::new(amount, 2),
            payment_method: PaymentMethod::Pix,
            description: "Serviços".into(),
            date: date(day),
            time: "10:00".into(),
            kind,
        }
    }

    #[tokio::test]
    async fn receipt_numbers_are_sequential_and_survive_deletes() {
        let service = PaymentService::new(PaymentRepository::new());

        let first = service
            .add(payment("Maria Silva", 7500, "2025-06-10", PaymentKind::Income))
            .await;
        let second = service
            .add(payment("Ana Costa", 12000, "2025-06-10", PaymentKind::Income))
            .await;
        assert_eq!(first.receipt_number, "REC001");
        assert_eq!(second.receipt_number, "REC002");

        service.delete(second.id).await.expect("exclusão");
        let third = service
            .add(payment("Julia Santos", 2500, "2025-06-11", PaymentKind::Income))
            .await;
        assert_eq!(third.receipt_number, "REC003");
    }

    #[tokio::test]
    async fn period_windows_follow_day_week_and_calendar_month() {
        let reference = date("2025-06-10");

        assert_eq!(
            period_bounds(SummaryPeriod::Day, reference),
            (reference, reference)
        );
        assert_eq!(
            period_bounds(SummaryPeriod::Week, reference),
            (date("2025-06-04"), reference)
        );
        assert_eq!(
            period_bounds(SummaryPeriod::Month, reference),
            (date("2025-06-01"), date("2025-06-30"))
        );
    }

    #[tokio::test]
    async fn revenue_and_expenses_are_split_by_kind_and_window() {
        let service = PaymentService::new(PaymentRepository::new());
        let reference = date("2025-06-10");

        service
            .add(payment("Maria Silva", 7500, "2025-06-10", PaymentKind::Income))
            .await;
        service
            .add(payment("Ana Costa", 12000, "2025-06-05", PaymentKind::Income))
            .await;
        service
            .add(payment("Fornecedor ABC", 20000, "2025-06-08", PaymentKind::Expense))
            .await;
        // fora da janela semanal, dentro do mês
        service
            .add(payment("Julia Santos", 2500, "2025-06-01", PaymentKind::Income))
            .await;

        assert_eq!(
            service.total_revenue(SummaryPeriod::Day, reference).await,
            Decimal::new(7500, 2)
        );
        assert_eq!(
            service.total_revenue(SummaryPeriod::Week, reference).await,
            Decimal::new(19500, 2)
        );
        assert_eq!(
            service.total_revenue(SummaryPeriod::Month, reference).await,
            Decimal::new(22000, 2)
        );
        assert_eq!(
            service.total_expenses(SummaryPeriod::Week, reference).await,
            Decimal::new(20000, 2)
        );
        assert_eq!(
            service.total_expenses(SummaryPeriod::Day, reference).await,
            Decimal::ZERO
        );
    }
}
