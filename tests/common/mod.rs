#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{self, Request, StatusCode};
use axum::{body::Body, Router};
use bson::oid::ObjectId;
use http_body_util::BodyExt;
use staff_backend::app::app::build_router;
use staff_backend::model::employee::Employee;
use staff_backend::model::user::User;
use staff_backend::repository::employee_repo::{EmployeeQuery, EmployeeRepository};
use staff_backend::repository::memory_repo::{InMemoryEmployeeRepository, InMemoryUserRepository};
use staff_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use staff_backend::repository::user_repo::UserRepository;
use staff_backend::service::employee_service::EmployeeServiceImpl;
use staff_backend::service::user_service::UserServiceImpl;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const DATABASE_ERROR: &str = "Database error";

pub fn sample_user() -> User {
    User {
        id: None,
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        mobile_number: "1234567890".to_string(),
        email: "johndoe@example.com".to_string(),
        role: "Admin".to_string(),
        password: "validpassword".to_string(),
    }
}

pub fn sample_employee(first_name: &str, experience: &str, user_id: ObjectId) -> Employee {
    Employee {
        id: None,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        mobile_number: "1234567890".to_string(),
        mail_id: "doe@gmail.com".to_string(),
        date_of_birth: "1998-01-01".to_string(),
        age: "22".to_string(),
        gender: "male".to_string(),
        education: "BE".to_string(),
        experience: experience.to_string(),
        user_id: Some(user_id),
    }
}

/// JSON body for an employee, with `userId` as a plain hex string.
pub fn employee_json(first_name: &str, experience: &str, user_id: ObjectId) -> serde_json::Value {
    serde_json::json!({
        "firstName": first_name,
        "lastName": "Doe",
        "mobileNumber": "1234567890",
        "mailId": "doe@gmail.com",
        "dateOfBirth": "1998-01-01",
        "age": "22",
        "gender": "male",
        "education": "BE",
        "experience": experience,
        "userId": user_id.to_hex(),
    })
}

/// Every call fails the way an unreachable database would.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_one_by_credentials(&self, _email: &str, _password: &str) -> RepositoryResult<Option<User>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn create(&self, _user: User) -> RepositoryResult<User> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }
}

pub struct FailingEmployeeRepository;

#[async_trait]
impl EmployeeRepository for FailingEmployeeRepository {
    async fn find(&self, _query: EmployeeQuery) -> RepositoryResult<Vec<Employee>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn find_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Employee>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn create(&self, _employee: Employee) -> RepositoryResult<Employee> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn find_by_id_and_update(&self, _id: ObjectId, _employee: Employee) -> RepositoryResult<Option<Employee>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }

    async fn find_by_id_and_delete(&self, _id: ObjectId) -> RepositoryResult<Option<Employee>> {
        Err(RepositoryError::database(DATABASE_ERROR))
    }
}

/// Returns canned rows from `find` and remembers every query it received.
pub struct RecordingEmployeeRepository {
    pub rows: Vec<Employee>,
    pub queries: Mutex<Vec<EmployeeQuery>>,
}

impl RecordingEmployeeRepository {
    pub fn new(rows: Vec<Employee>) -> Self {
        RecordingEmployeeRepository { rows, queries: Mutex::new(Vec::new()) }
    }

    pub fn recorded(&self) -> Vec<EmployeeQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmployeeRepository for RecordingEmployeeRepository {
    async fn find(&self, query: EmployeeQuery) -> RepositoryResult<Vec<Employee>> {
        self.queries.lock().unwrap().push(query);
        Ok(self.rows.clone())
    }

    async fn find_by_id(&self, _id: ObjectId) -> RepositoryResult<Option<Employee>> {
        Ok(None)
    }

    async fn create(&self, employee: Employee) -> RepositoryResult<Employee> {
        Ok(employee)
    }

    async fn find_by_id_and_update(&self, _id: ObjectId, _employee: Employee) -> RepositoryResult<Option<Employee>> {
        Ok(None)
    }

    async fn find_by_id_and_delete(&self, _id: ObjectId) -> RepositoryResult<Option<Employee>> {
        Ok(None)
    }
}

pub fn app_with(user_repo: Arc<dyn UserRepository>, employee_repo: Arc<dyn EmployeeRepository>) -> Router {
    build_router(
        Arc::new(UserServiceImpl::new(user_repo)),
        Arc::new(EmployeeServiceImpl::new(employee_repo)),
    )
}

pub fn memory_app() -> Router {
    app_with(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryEmployeeRepository::new()),
    )
}

pub fn failing_app() -> Router {
    app_with(Arc::new(FailingUserRepository), Arc::new(FailingEmployeeRepository))
}

pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send one request and return the status with the parsed JSON body.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}
