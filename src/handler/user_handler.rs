use axum::{extract::{State, Json}, response::IntoResponse};
use crate::dto::MessageResponse;
use crate::dto::user_dto::{LoginRequest, UsersResponse};
use crate::service::user_service::{LoginOutcome, UserServiceImpl, UserService};
use crate::model::user::User;
use std::sync::Arc;
use crate::util::error::HandlerError;
use crate::util::extract::JsonBody;
use axum::response::Response;

pub const INVALID_CREDENTIALS: &str = "Invalid Credentials";
pub const USER_REGISTERED: &str = "Success";

// Login: a miss is reported as 200 with a message, not 401.
pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Response, HandlerError> {
    let outcome = service.authenticate(payload.email, payload.password).await?;
    let response = match outcome {
        LoginOutcome::Authenticated(profile) => Json(profile).into_response(),
        LoginOutcome::InvalidCredentials => Json(MessageResponse::new(INVALID_CREDENTIALS)).into_response(),
    };
    Ok(response)
}

// Register
pub async fn register_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonBody(payload): JsonBody<User>,
) -> Result<impl IntoResponse, HandlerError> {
    service.register(payload).await?;
    Ok(Json(MessageResponse::new(USER_REGISTERED)))
}

// List
pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list_all().await?;
    Ok(Json(UsersResponse::from(users)))
}
