pub mod employee_service;
pub mod user_service;
