use tracing::{info, error, instrument};
use crate::model::employee::Employee;
use crate::repository::employee_repo::{EmployeeQuery, EmployeeRepository, SortDirection};
use crate::util::error::ServiceError;
use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";

#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Name filter over all employees, always sorted by experience.
    async fn list(&self, search: String, sort: SortDirection) -> Result<Vec<Employee>, ServiceError>;
    /// Employees of one owner; sorted only when a direction is given.
    async fn list_by_owner(&self, user_id: ObjectId, search: String, sort: Option<SortDirection>) -> Result<Vec<Employee>, ServiceError>;
    async fn get_by_id(&self, id: ObjectId) -> Result<Employee, ServiceError>;
    async fn register(&self, employee: Employee) -> Result<Employee, ServiceError>;
    async fn update(&self, id: ObjectId, employee: Employee) -> Result<Employee, ServiceError>;
    async fn delete(&self, id: ObjectId) -> Result<Employee, ServiceError>;
}

pub struct EmployeeServiceImpl {
    pub employee_repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeServiceImpl {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employee_repo }
    }
}

fn not_found(id: &ObjectId) -> ServiceError {
    info!(%id, "Employee not found");
    ServiceError::NotFound(EMPLOYEE_NOT_FOUND.to_string())
}

#[async_trait]
impl EmployeeService for EmployeeServiceImpl {
    #[instrument(skip(self))]
    async fn list(&self, search: String, sort: SortDirection) -> Result<Vec<Employee>, ServiceError> {
        let query = EmployeeQuery { user_id: None, search, sort: Some(sort) };
        let employees = self.employee_repo.find(query).await.map_err(|e| {
            error!("Failed to list employees: {e}");
            ServiceError::from(e)
        })?;
        Ok(employees)
    }

    #[instrument(skip(self), fields(user_id = %user_id))]
    async fn list_by_owner(&self, user_id: ObjectId, search: String, sort: Option<SortDirection>) -> Result<Vec<Employee>, ServiceError> {
        let query = EmployeeQuery { user_id: Some(user_id), search, sort };
        let employees = self.employee_repo.find(query).await.map_err(|e| {
            error!("Failed to list employees for user: {e}");
            ServiceError::from(e)
        })?;
        Ok(employees)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> Result<Employee, ServiceError> {
        match self.employee_repo.find_by_id(id).await {
            Ok(Some(employee)) => Ok(employee),
            Ok(None) => Err(not_found(&id)),
            Err(e) => {
                error!("Failed to fetch employee: {e}");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, employee))]
    async fn register(&self, employee: Employee) -> Result<Employee, ServiceError> {
        info!("Registering new employee");
        let inserted = self.employee_repo.create(employee).await;
        match &inserted {
            Ok(e) => info!(id = ?e.id, "Employee registered"),
            Err(e) => error!("Failed to register employee: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, employee), fields(id = %id))]
    async fn update(&self, id: ObjectId, employee: Employee) -> Result<Employee, ServiceError> {
        match self.employee_repo.find_by_id_and_update(id, employee).await {
            Ok(Some(updated)) => Ok(updated),
            Ok(None) => Err(not_found(&id)),
            Err(e) => {
                error!("Failed to update employee: {e}");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> Result<Employee, ServiceError> {
        match self.employee_repo.find_by_id_and_delete(id).await {
            Ok(Some(deleted)) => Ok(deleted),
            Ok(None) => Err(not_found(&id)),
            Err(e) => {
                error!("Failed to delete employee: {e}");
                Err(e.into())
            }
        }
    }
}
