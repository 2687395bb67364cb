// src/services/dashboard_service.rs

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    db::{AppointmentRepository, CustomerRepository, PaymentRepository, ProductRepository},
    models::{
        appointment::AppointmentStatus,
        dashboard::{DashboardSummary, RevenueChartEntry, TopServiceEntry},
        inventory::Product,
        payment::{PaymentKind, SummaryPeriod},
    },
    services::{loyalty_service::LoyaltyService, payment_service::PaymentService},
};

// Camada somente-leitura: agrega o que os registros já têm, sem
// invariantes próprias.
#[derive(Clone)]
pub struct DashboardService {
    appointments: AppointmentRepository,
    customers: CustomerRepository,
    products: ProductRepository,
    payments: PaymentRepository,
    payment_service: PaymentService,
    loyalty_service: LoyaltyService,
}

impl DashboardService {
    pub fn new(
        appointments: AppointmentRepository,
        customers: CustomerRepository,
        products: ProductRepository,
        payments: PaymentRepository,
        payment_service: PaymentService,
        loyalty_service: LoyaltyService,
    ) -> Self {
        Self {
            appointments,
            customers,
            products,
            payments,
            payment_service,
            loyalty_service,
        }
    }

    pub async fn summary(&self, today: NaiveDate) -> DashboardSummary {
        let todays = self.appointments.by_date(today).await;
        let count_status = |status: AppointmentStatus| {
            todays.iter().filter(|a| a.status == status).count()
        };

        DashboardSummary {
            appointments_today: todays.len(),
            scheduled_today: count_status(AppointmentStatus::Scheduled),
            confirmed_today: count_status(AppointmentStatus::Confirmed),
            completed_today: count_status(AppointmentStatus::Completed),
            revenue_today: self
                .payment_service
                .total_revenue(SummaryPeriod::Day, today)
                .await,
            revenue_week: self
                .payment_service
                .total_revenue(SummaryPeriod::Week, today)
                .await,
            revenue_month: self
                .payment_service
                .total_revenue(SummaryPeriod::Month, today)
                .await,
            expenses_month: self
                .payment_service
                .total_expenses(SummaryPeriod::Month, today)
                .await,
            active_customers: self.customers.active().await.len(),
            loyalty_members: self.loyalty_service.member_count().await,
            low_stock_products: self.products.low_stock().await.len(),
        }
    }

    /// Entradas e saídas por dia, nos últimos `days` dias até `today`.
    pub async fn revenue_chart(&self, today: NaiveDate, days: u32) -> Vec<RevenueChartEntry> {
        let days = days.max(1);
        let start = today - Duration::days(i64::from(days) - 1);
        let payments = self.payments.by_period(start, today).await;

        let mut chart = Vec::with_capacity(days as usize);
        for offset in 0..days {
            let date = start + Duration::days(i64::from(offset));
            let mut income = Decimal::ZERO;
            let mut expenses = Decimal::ZERO;
            for payment in payments.iter().filter(|p| p.date == date) {
                match payment.kind {
                    PaymentKind::Income => income += payment.amount,
                    PaymentKind::Expense => expenses += payment.amount,
                }
            }
            chart.push(RevenueChartEntry {
                date,
                income,
                expenses,
            });
        }
        chart
    }

    /// Serviços mais executados, contados sobre agendamentos concluídos.
    pub async fn top_services(&self, limit: usize) -> Vec<TopServiceEntry> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for appointment in self.appointments.list().await {
            if appointment.status != AppointmentStatus::Completed {
                continue;
            }
            for name in appointment.service_label.split(", ") {
                if name.is_empty() {
                    continue;
                }
                *counts.entry(name.to_owned()).or_default() += 1;
            }
        }

        let mut entries: Vec<TopServiceEntry> = counts
            .into_iter()
            .map(|(service, count)| TopServiceEntry { service, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.service.cmp(&b.service)));
        entries.truncate(limit);
        entries
    }

    pub async fn low_stock(&self) -> Vec<Product> {
        self.products.low_stock().await
    }
}
