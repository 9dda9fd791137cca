//! Process-local storage used when `STORAGE_BACKEND=memory`.
//!
//! Documents live in insertion order, which stands in for MongoDB's natural
//! order. Sorting compares `experience` as text, like a string field in Mongo.

use crate::model::employee::Employee;
use crate::model::user::User;
use crate::model::validation::Schema;
use crate::repository::employee_repo::{EmployeeQuery, EmployeeRepository, SortDirection};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::user_repo::UserRepository;
use async_trait::async_trait;
use bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::{error, info};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_one_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn create(&self, mut user: User) -> RepositoryResult<User> {
        user.check_schema().map_err(|e| {
            error!("User rejected by schema: {}", e);
            RepositoryError::from(e)
        })?;
        user.id = Some(ObjectId::new());
        self.users.write().await.push(user.clone());
        info!("User stored in memory");
        Ok(user)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find(&self, query: EmployeeQuery) -> RepositoryResult<Vec<Employee>> {
        let employees = self.employees.read().await;
        let mut found: Vec<Employee> = employees.iter().filter(|e| query.matches(e)).cloned().collect();
        match query.sort {
            Some(SortDirection::Ascending) => found.sort_by(|a, b| a.experience.cmp(&b.experience)),
            Some(SortDirection::Descending) => found.sort_by(|a, b| b.experience.cmp(&a.experience)),
            None => {}
        }
        Ok(found)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Employee>> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == Some(id)).map(|e| Employee {
            id: None,
            ..e.clone()
        }))
    }

    async fn create(&self, mut employee: Employee) -> RepositoryResult<Employee> {
        employee.check_schema().map_err(|e| {
            error!("Employee rejected by schema: {}", e);
            RepositoryError::from(e)
        })?;
        employee.id = Some(ObjectId::new());
        self.employees.write().await.push(employee.clone());
        info!("Employee stored in memory");
        Ok(employee)
    }

    async fn find_by_id_and_update(&self, id: ObjectId, mut employee: Employee) -> RepositoryResult<Option<Employee>> {
        let mut employees = self.employees.write().await;
        match employees.iter_mut().find(|e| e.id == Some(id)) {
            Some(slot) => {
                employee.id = Some(id);
                *slot = employee.clone();
                Ok(Some(employee))
            }
            None => Ok(None),
        }
    }

    async fn find_by_id_and_delete(&self, id: ObjectId) -> RepositoryResult<Option<Employee>> {
        let mut employees = self.employees.write().await;
        match employees.iter().position(|e| e.id == Some(id)) {
            Some(index) => Ok(Some(employees.remove(index))),
            None => Ok(None),
        }
    }
}
