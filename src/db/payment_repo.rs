// src/db/payment_repo.rs

use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::payment::{CreatePaymentPayload, Payment, PaymentKind, UpdatePaymentPayload},
};

#[derive(Clone, Default)]
pub struct PaymentRepository {
    payments: Collection<Payment>,
    // Contador do número de comprovante; só cresce, mesmo após exclusões.
    next_receipt: Arc<AtomicU32>,
}

impl PaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, payload: CreatePaymentPayload) -> Payment {
        let seq = self.next_receipt.fetch_add(1, Ordering::SeqCst) + 1;
        let payment = Payment {
            id: Uuid::new_v4(),
            customer_id: payload.customer_id,
            customer_name: payload.customer_name,
            amount: payload.amount,
            payment_method: payload.payment_method,
            description: payload.description,
            date: payload.date,
            time: payload.time,
            kind: payload.kind,
            receipt_number: format!("REC{:03}", seq),
            created_at: Utc::now(),
        };
        self.payments.insert(payment).await
    }

    pub async fn list(&self) -> Vec<Payment> {
        self.payments.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Payment> {
        self.payments.find_one(|p| p.id == id).await
    }

    pub async fn by_date(&self, date: NaiveDate) -> Vec<Payment> {
        self.payments.select(|p| p.date == date).await
    }

    pub async fn by_period(&self, start: NaiveDate, end: NaiveDate) -> Vec<Payment> {
        self.payments
            .select(|p| p.date >= start && p.date <= end)
            .await
    }

    pub async fn by_customer(&self, customer_id: Uuid) -> Vec<Payment> {
        self.payments
            .select(|p| p.customer_id == Some(customer_id))
            .await
    }

    pub async fn by_kind_in_period(
        &self,
        kind: PaymentKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Payment> {
        self.payments
            .select(|p| p.kind == kind && p.date >= start && p.date <= end)
            .await
    }

    /// Atualização parcial: valor, tipo e número de comprovante são imutáveis
    /// depois do lançamento.
    pub async fn apply_update(&self, id: Uuid, payload: UpdatePaymentPayload) -> Option<Payment> {
        self.payments
            .update_one(
                |p| p.id == id,
                |p| {
                    if let Some(customer_name) = payload.customer_name {
                        p.customer_name = customer_name;
                    }
                    if let Some(payment_method) = payload.payment_method {
                        p.payment_method = payment_method;
                    }
                    if let Some(description) = payload.description {
                        p.description = description;
                    }
                    if let Some(date) = payload.date {
                        p.date = date;
                    }
                    if let Some(time) = payload.time {
                        p.time = time;
                    }
                },
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> usize {
        self.payments.delete(|p| p.id == id).await
    }
}
