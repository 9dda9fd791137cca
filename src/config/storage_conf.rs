use std::env;
use std::str::FromStr;
use tracing::{info, warn};

use crate::config::ConfigError;

/// Which storage collaborator backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StorageBackend::Mongo),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidValue(format!(
                "Unknown STORAGE_BACKEND '{}', expected 'mongo' or 'memory'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Reads `STORAGE_BACKEND`, defaulting to MongoDB.
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw.parse()?,
            Err(_) => {
                warn!("STORAGE_BACKEND not set, using default: mongo");
                StorageBackend::Mongo
            }
        };
        info!(?backend, "Storage backend selected");
        Ok(StorageConfig { backend })
    }
}
