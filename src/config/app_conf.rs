use std::env;
use tracing::warn;

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Reads `APP_HOST` (default `127.0.0.1`) and `APP_PORT` (default `8080`).
    pub fn from_env() -> Self {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid APP_PORT value '{}', using default: 8080", raw);
                8080
            }),
            Err(_) => 8080,
        };
        AppConfig { host, port }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}
