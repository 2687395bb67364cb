// src/services/employee_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::EmployeeRepository,
    models::employee::{CreateEmployeePayload, Employee, UpdateEmployeePayload},
    services::scheduling_service::SchedulingService,
};

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
    scheduling: SchedulingService,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository, scheduling: SchedulingService) -> Self {
        Self { repo, scheduling }
    }

    pub async fn create(&self, payload: CreateEmployeePayload) -> Employee {
        self.repo.insert(payload).await
    }

    pub async fn list(&self) -> Vec<Employee> {
        self.repo.list().await
    }

    pub async fn active(&self) -> Vec<Employee> {
        self.repo.active().await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Employee, AppError> {
        self.repo.find_by_id(id).await.ok_or(AppError::EmployeeNotFound)
    }

    /// Toda mutação que pode mudar o conjunto ativo dispara a varredura de
    /// reatribuição em seguida — o gatilho é explícito, não uma assinatura
    /// implícita.
    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateEmployeePayload,
    ) -> Result<Employee, AppError> {
        let employee = self
            .repo
            .apply_update(id, payload)
            .await
            .ok_or(AppError::EmployeeNotFound)?;
        self.scheduling.on_employee_set_changed().await;
        Ok(employee)
    }

    /// Desligamento = desativação; o registro permanece para histórico.
    pub async fn deactivate(&self, id: Uuid) -> Result<Employee, AppError> {
        let employee = self
            .repo
            .deactivate(id)
            .await
            .ok_or(AppError::EmployeeNotFound)?;
        tracing::info!("Funcionário desativado: {}", employee.name);
        self.scheduling.on_employee_set_changed().await;
        Ok(employee)
    }
}
