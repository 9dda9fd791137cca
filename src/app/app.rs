use axum::{Router, routing::get};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;
use crate::config::{AppConfig, ConfigError, MongoConfig, StorageBackend, StorageConfig};
use crate::repository::employee_repo::{EmployeeRepository, MongoEmployeeRepository};
use crate::repository::memory_repo::{InMemoryEmployeeRepository, InMemoryUserRepository};
use crate::repository::user_repo::{MongoUserRepository, UserRepository};
use crate::router::employee_router::employee_router;
use crate::router::user_router::user_router;
use crate::service::employee_service::EmployeeServiceImpl;
use crate::service::user_service::UserServiceImpl;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Merge the user and employee routers plus a liveness probe.
pub fn build_router(user_service: Arc<UserServiceImpl>, employee_service: Arc<EmployeeServiceImpl>) -> Router {
    Router::new()
        .merge(user_router(user_service))
        .merge(employee_router(employee_service))
        .route("/health", get(|| async { "OK" }))
}

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Result<Self, StartupError> {
        let config = AppConfig::from_env();
        let storage = StorageConfig::from_env()?;

        let (user_repo, employee_repo): (Arc<dyn UserRepository>, Arc<dyn EmployeeRepository>) = match storage.backend {
            StorageBackend::Mongo => {
                let mongo_config = MongoConfig::from_env()?;
                let db = mongo_config.connect().await?;
                (
                    Arc::new(MongoUserRepository::new(&db, &mongo_config.user_collection)) as Arc<dyn UserRepository>,
                    Arc::new(MongoEmployeeRepository::new(&db, &mongo_config.employee_collection)) as Arc<dyn EmployeeRepository>,
                )
            }
            StorageBackend::Memory => {
                info!("Using in-memory storage; data is lost on shutdown");
                (
                    Arc::new(InMemoryUserRepository::new()) as Arc<dyn UserRepository>,
                    Arc::new(InMemoryEmployeeRepository::new()) as Arc<dyn EmployeeRepository>,
                )
            }
        };

        let user_service = Arc::new(UserServiceImpl::new(user_repo));
        let employee_service = Arc::new(EmployeeServiceImpl::new(employee_repo));
        let router = build_router(user_service, employee_service);
        Ok(App { config, router })
    }

    pub async fn start(self) -> Result<(), StartupError> {
        let host: IpAddr = self
            .config
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("Invalid APP_HOST '{}'", self.config.host)))?;
        let addr = SocketAddr::new(host, self.config.port);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
