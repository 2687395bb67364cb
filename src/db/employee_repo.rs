// src/db/employee_repo.rs

use std::collections::HashSet;

use uuid::Uuid;

use crate::{
    db::store::Collection,
    models::employee::{CreateEmployeePayload, Employee, UpdateEmployeePayload},
};

#[derive(Clone, Default)]
pub struct EmployeeRepository {
    employees: Collection<Employee>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, payload: CreateEmployeePayload) -> Employee {
        let employee = Employee {
            id: Uuid::new_v4(),
            name: payload.name,
            position: payload.position,
            email: payload.email,
            phone: payload.phone,
            specialties: payload.specialties,
            is_active: true,
            hire_date: payload.hire_date,
            working_hours: payload.working_hours,
        };
        self.employees.insert(employee).await
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.employees.all().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Employee> {
        self.employees.find_one(|e| e.id == id).await
    }

    pub async fn active(&self) -> Vec<Employee> {
        self.employees.select(|e| e.is_active).await
    }

    /// Conjunto de ids ativos — insumo da varredura de reatribuição.
    pub async fn active_ids(&self) -> HashSet<Uuid> {
        self.employees
            .select(|e| e.is_active)
            .await
            .into_iter()
            .map(|e| e.id)
            .collect()
    }

    pub async fn apply_update(&self, id: Uuid, payload: UpdateEmployeePayload) -> Option<Employee> {
        self.employees
            .update_one(
                |e| e.id == id,
                |e| {
                    if let Some(name) = payload.name {
                        e.name = name;
                    }
                    if let Some(position) = payload.position {
                        e.position = position;
                    }
                    if let Some(email) = payload.email {
                        e.email = email;
                    }
                    if let Some(phone) = payload.phone {
                        e.phone = phone;
                    }
                    if let Some(specialties) = payload.specialties {
                        e.specialties = specialties;
                    }
                    if let Some(is_active) = payload.is_active {
                        e.is_active = is_active;
                    }
                    if let Some(working_hours) = payload.working_hours {
                        e.working_hours = working_hours;
                    }
                },
            )
            .await
    }

    /// Funcionários nunca são removidos de fato: desligar = desativar.
    pub async fn deactivate(&self, id: Uuid) -> Option<Employee> {
        self.employees
            .update_one(|e| e.id == id, |e| e.is_active = false)
            .await
    }
}
