use axum::{Router, routing::{get, post}};
use crate::handler::user_handler::{login_handler, register_handler, list_users_handler};
use std::sync::Arc;
use crate::service::user_service::UserServiceImpl;

pub fn user_router(service: Arc<UserServiceImpl>) -> Router {
    Router::new()
        .route("/users/login", post(login_handler))
        .route("/users/signup", post(register_handler))
        .route("/users", get(list_users_handler))
        .with_state(service)
}
