use axum::{extract::{State, Path}, response::IntoResponse, Json};
use bson::oid::ObjectId;
use crate::dto::MessageResponse;
use crate::dto::employee_dto::{to_responses, EmployeeListRequest, EmployeeListResponse, EmployeeResponse, EmployeesByUserRequest};
use crate::model::employee::Employee;
use crate::repository::employee_repo::SortDirection;
use crate::service::employee_service::{EmployeeService, EmployeeServiceImpl};
use crate::util::error::{HandlerError, ServiceError};
use crate::util::extract::JsonBody;
use std::sync::Arc;
use tracing::error;

pub const EMPLOYEE_REGISTERED: &str = "Employee registration successful";
pub const EMPLOYEE_UPDATED: &str = "Employee details updated successfully";
pub const EMPLOYEE_DELETED: &str = "Employee details deleted successfully";
/// Returned for every storage failure on delete, whatever the cause.
pub const DELETE_FAILED: &str = "Bad request";

fn parse_employee_id(id: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(id).map_err(|_| HandlerError::bad_request("Invalid employee id"))
}

// Handler: List employees filtered by first name, sorted by experience
pub async fn list_employees_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    JsonBody(payload): JsonBody<EmployeeListRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let sort = payload.sort_value.unwrap_or(SortDirection::Ascending);
    let data = service.list(payload.search_value, sort).await?;
    Ok(Json(EmployeeListResponse { data: to_responses(data) }))
}

// Handler: List employees owned by one user (bare array body)
pub async fn list_employees_by_user_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    JsonBody(payload): JsonBody<EmployeesByUserRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let employees = service
        .list_by_owner(payload.user_id, payload.search_value, payload.sort_value)
        .await?;
    Ok(Json(to_responses(employees)))
}

// Handler: Get employee
pub async fn get_employee_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_employee_id(&id)?;
    let employee = service.get_by_id(id).await?;
    Ok(Json(EmployeeResponse::from(employee)))
}

// Handler: Register employee
pub async fn register_employee_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    JsonBody(payload): JsonBody<Employee>,
) -> Result<impl IntoResponse, HandlerError> {
    service.register(payload).await?;
    Ok(Json(MessageResponse::new(EMPLOYEE_REGISTERED)))
}

// Handler: Replace employee
pub async fn update_employee_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Employee>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_employee_id(&id)?;
    service.update(id, payload).await?;
    Ok(Json(MessageResponse::new(EMPLOYEE_UPDATED)))
}

// Handler: Delete employee
pub async fn delete_employee_handler(
    State(service): State<Arc<EmployeeServiceImpl>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = parse_employee_id(&id)?;
    service.delete(id).await.map_err(|e| match e {
        ServiceError::NotFound(msg) => HandlerError::not_found(msg),
        other => {
            // FIXME: every other handler returns the storage error text; delete hides it.
            error!("Employee delete failed: {other}");
            HandlerError::internal(DELETE_FAILED)
        }
    })?;
    Ok(Json(MessageResponse::new(EMPLOYEE_DELETED)))
}
