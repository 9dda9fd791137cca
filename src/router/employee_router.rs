use axum::{Router, routing::{get, post}};
use crate::handler::employee_handler::{
    list_employees_handler,
    list_employees_by_user_handler,
    get_employee_handler,
    register_employee_handler,
    update_employee_handler,
    delete_employee_handler,
};
use std::sync::Arc;
use crate::service::employee_service::EmployeeServiceImpl;

pub fn employee_router(service: Arc<EmployeeServiceImpl>) -> Router {
    Router::new()
        .route("/employees", post(register_employee_handler))
        .route("/employees/list", post(list_employees_handler))
        .route("/employees/by-user", post(list_employees_by_user_handler))
        .route(
            "/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .with_state(service)
}
