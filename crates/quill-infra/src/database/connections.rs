//! Content-store connection management.

#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the content store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// The single shared connection pool to the content store.
#[cfg(feature = "postgres")]
pub struct StoreConnection {
    pub conn: DbConn,
}

#[cfg(not(feature = "postgres"))]
pub struct StoreConnection;

#[cfg(feature = "postgres")]
impl StoreConnection {
    /// Connect to the content store from configuration.
    pub async fn init(config: &StoreConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to the content store...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            "Content store connected (pool: {})",
            config.max_connections
        );

        Ok(Self { conn })
    }
}
