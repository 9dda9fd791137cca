pub mod employee;
pub mod user;
pub mod validation;
