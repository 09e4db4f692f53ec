//! Application configuration loaded from environment variables.

use std::env;

use quill_infra::database::StoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: Option<StoreConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// A missing `DATABASE_URL` leaves `store` empty; the server then runs
    /// on in-memory repositories instead of refusing to start.
    pub fn from_env() -> Self {
        let store = env::var("DATABASE_URL").ok().map(|url| StoreConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            store,
        }
    }
}
