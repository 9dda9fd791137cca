pub mod employee_router;
pub mod user_router;
