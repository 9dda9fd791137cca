pub mod employee_handler;
pub mod user_handler;
