pub mod employee_repo;
pub mod memory_repo;
pub mod repository_error;
pub mod user_repo;
