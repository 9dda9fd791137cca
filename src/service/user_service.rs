use tracing::{info, error, instrument};
use crate::repository::user_repo::UserRepository;
use std::sync::Arc;

use crate::model::user::{User, UserProfile};
use crate::util::error::ServiceError;
use async_trait::async_trait;

/// Result of a credential check. A miss is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated(UserProfile),
    InvalidCredentials,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn authenticate(&self, email: String, password: String) -> Result<LoginOutcome, ServiceError>;
    async fn register(&self, user: User) -> Result<User, ServiceError>;
    async fn list_all(&self) -> Result<Vec<User>, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn authenticate(&self, email: String, password: String) -> Result<LoginOutcome, ServiceError> {
        info!("User login attempt");
        let user = self.user_repo.find_one_by_credentials(&email, &password).await;
        match user {
            Ok(Some(user)) => {
                info!("User logged in successfully");
                Ok(LoginOutcome::Authenticated(user.into()))
            }
            Ok(None) => {
                info!("Invalid credentials");
                Ok(LoginOutcome::InvalidCredentials)
            }
            Err(e) => {
                error!("Failed to fetch user for login: {e}");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn register(&self, user: User) -> Result<User, ServiceError> {
        info!("Registering new user");
        let inserted = self.user_repo.create(user).await;
        match &inserted {
            Ok(_) => info!("User inserted successfully"),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.user_repo.find_all().await;
        if let Err(e) = &users {
            error!("Failed to list users: {e}");
        }
        Ok(users?)
    }
}
