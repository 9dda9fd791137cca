use crate::model::user::User;
use crate::model::validation::Schema;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use tracing::{error, info};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Single document whose email and password both match verbatim.
    async fn find_one_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>>;
    /// Validates the schema, assigns an id and stores the user.
    async fn create(&self, user: User) -> RepositoryResult<User>;
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
}

pub struct MongoUserRepository {
    collection: mongodb::Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &mongodb::Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        MongoUserRepository { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[tracing::instrument(skip(self, password))]
    async fn find_one_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email, "password": password };
        let user = self.collection.find_one(filter, None).await.map_err(|e| {
            error!("Failed to find user by credentials: {}", e);
            RepositoryError::from(e)
        })?;
        Ok(user)
    }

    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    async fn create(&self, mut user: User) -> RepositoryResult<User> {
        user.check_schema().map_err(|e| {
            error!("User rejected by schema: {}", e);
            RepositoryError::from(e)
        })?;
        user.id = Some(ObjectId::new());
        match self.collection.insert_one(&user, None).await {
            Ok(_) => {
                info!("User created successfully");
                Ok(user)
            }
            Err(e) => {
                error!("Failed to insert user: {}", e);
                Err(e.into())
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self.collection.find(None, None).await.map_err(|e| {
            error!("Failed to list users: {}", e);
            RepositoryError::from(e)
        })?;
        let users: Vec<User> = cursor.try_collect().await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }
}
