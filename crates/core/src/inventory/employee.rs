//! Employee service: create and list only.

use std::sync::Arc;

use super::model::{Employee, NewEmployee};
use super::store::EmployeeStore;
use super::validation::{validate_employee_id, validate_name};
use crate::error::CoreResult;

#[derive(Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }

    pub async fn create(&self, input: NewEmployee) -> CoreResult<Employee> {
        validate_employee_id(input.id)?;
        validate_name("full_name", &input.full_name)?;
        let employee = self.employees.insert_employee(&input.into()).await?;
        tracing::info!(employee_id = employee.id, "Employee registered");
        Ok(employee)
    }

    pub async fn list(&self) -> CoreResult<Vec<Employee>> {
        self.employees.list_employees().await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::error::CoreError;
    use crate::inventory::memory::InMemoryStore;

    fn new_employee(id: i64, full_name: &str) -> NewEmployee {
        NewEmployee {
            id,
            full_name: full_name.to_string(),
            designation: Some("Analyst".into()),
        }
    }

    #[tokio::test]
    async fn create_keeps_caller_supplied_id() {
        let svc = EmployeeService::new(std::sync::Arc::new(InMemoryStore::new()));
        let created = svc.create(new_employee(5001, "Katherine Johnson")).await.unwrap();
        assert_eq!(created.id, 5001);
        assert_eq!(svc.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn duplicate_id_conflicts() {
        let svc = EmployeeService::new(std::sync::Arc::new(InMemoryStore::new()));
        svc.create(new_employee(7, "A")).await.unwrap();
        assert_matches!(
            svc.create(new_employee(7, "B")).await,
            Err(CoreError::Conflict(_))
        );
    }

    #[tokio::test]
    async fn full_name_is_required() {
        let svc = EmployeeService::new(std::sync::Arc::new(InMemoryStore::new()));
        assert_matches!(
            svc.create(new_employee(7, " ")).await,
            Err(CoreError::InvalidInput(_))
        );
        assert_matches!(
            svc.create(new_employee(0, "Zero")).await,
            Err(CoreError::InvalidInput(_))
        );
        assert!(svc.list().await.unwrap().is_empty());
    }
}
