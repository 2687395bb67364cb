// src/db/customer_repo.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::customer::{CreateCustomerPayload, Customer, CustomerStatus, UpdateCustomerPayload},
};

#[derive(Clone, Default)]
pub struct CustomerRepository {
    customers: Collection<Customer>,
}

impl CustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, payload: CreateCustomerPayload) -> Customer {
        self.insert_record(
            payload.name,
            payload.email,
            payload.phone,
            payload.birth_date,
            payload.address,
            payload.notes,
            payload.preferences,
        )
        .await
    }

    /// Cadastro mínimo criado pelo fluxo de reserva quando o telefone não
    /// bate com nenhum cliente existente: sem histórico de visitas/gastos.
    pub async fn insert_walk_in(&self, name: &str, phone: &str) -> Customer {
        self.insert_record(
            name.to_owned(),
            String::new(),
            phone.to_owned(),
            None,
            None,
            None,
            None,
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    async fn insert_record(
        &self,
        name: String,
        email: String,
        phone: String,
        birth_date: Option<NaiveDate>,
        address: Option<String>,
        notes: Option<String>,
        preferences: Option<Vec<String>>,
    ) -> Customer {
        let customer = Customer {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            birth_date,
            address,
            notes,
            created_at: Utc::now().date_naive(),
            last_visit: None,
            total_visits: 0,
            total_spent: Decimal::ZERO,
            status: CustomerStatus::Active,
            preferences,
        };
        self.customers.insert(customer).await
    }

    pub async fn list(&self) -> Vec<Customer> {
        self.customers.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Customer> {
        self.customers.find_one(|c| c.id == id).await
    }

    pub async fn find_by_phone(&self, phone: &str) -> Option<Customer> {
        let phone = phone.to_owned();
        self.customers.find_one(|c| c.phone == phone).await
    }

    /// Busca do toque pós-conclusão: nome exato OU telefone exato, primeiro
    /// registro encontrado vence.
    pub async fn find_by_name_or_phone(&self, name: &str, phone: &str) -> Option<Customer> {
        let name = name.to_owned();
        let phone = phone.to_owned();
        self.customers
            .find_one(|c| c.name == name || c.phone == phone)
            .await
    }

    pub async fn search(&self, term: &str) -> Vec<Customer> {
        let term = term.to_lowercase();
        self.customers
            .select(|c| {
                c.name.to_lowercase().contains(&term)
                    || c.email.to_lowercase().contains(&term)
                    || c.phone.contains(&term)
            })
            .await
    }

    pub async fn active(&self) -> Vec<Customer> {
        self.customers
            .select(|c| c.status == CustomerStatus::Active)
            .await
    }

    pub async fn apply_update(&self, id: Uuid, payload: UpdateCustomerPayload) -> Option<Customer> {
        self.customers
            .update_one(
                |c| c.id == id,
                |c| {
                    if let Some(name) = payload.name {
                        c.name = name;
                    }
                    if let Some(email) = payload.email {
                        c.email = email;
                    }
                    if let Some(phone) = payload.phone {
                        c.phone = phone;
                    }
                    if let Some(birth_date) = payload.birth_date {
                        c.birth_date = Some(birth_date);
                    }
                    if let Some(address) = payload.address {
                        c.address = Some(address);
                    }
                    if let Some(notes) = payload.notes {
                        c.notes = Some(notes);
                    }
                    if let Some(status) = payload.status {
                        c.status = status;
                    }
                    if let Some(preferences) = payload.preferences {
                        c.preferences = Some(preferences);
                    }
                },
            )
            .await
    }

    /// O toque de conclusão: marca a visita e acumula os agregados.
    pub async fn apply_visit(&self, id: Uuid, date: NaiveDate, spent: Decimal) -> Option<Customer> {
        self.customers
            .update_one(
                |c| c.id == id,
                |c| {
                    c.last_visit = Some(date);
                    c.total_visits += 1;
                    c.total_spent += spent;
                },
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> usize {
        self.customers.delete(|c| c.id == id).await
    }
}
