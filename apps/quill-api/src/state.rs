//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{DraftRepository, PublishedRepository, UserRepository};
use quill_core::service::{DraftService, PublishedService};
use quill_infra::database::StoreConfig;
use quill_infra::{InMemoryDraftRepository, InMemoryPublishedRepository, InMemoryUserRepository};

#[cfg(feature = "postgres")]
use quill_infra::database::StoreConnection;
#[cfg(feature = "postgres")]
use quill_infra::{PostgresDraftRepository, PostgresPublishedRepository, PostgresUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub drafts: Arc<DraftService>,
    pub published: Arc<PublishedService>,
    pub users: Arc<dyn UserRepository>,
}

type Repos = (
    Arc<dyn DraftRepository>,
    Arc<dyn PublishedRepository>,
    Arc<dyn UserRepository>,
);

fn in_memory_repos() -> Repos {
    (
        Arc::new(InMemoryDraftRepository::new()),
        Arc::new(InMemoryPublishedRepository::new()),
        Arc::new(InMemoryUserRepository::new()),
    )
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(store_config: Option<&StoreConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (drafts, published, users): Repos = {
            if let Some(config) = store_config {
                match StoreConnection::init(config).await {
                    Ok(store) => {
                        let conn = Arc::new(store.conn);
                        (
                            Arc::new(PostgresDraftRepository::new(conn.clone())),
                            Arc::new(PostgresPublishedRepository::new(conn.clone())),
                            Arc::new(PostgresUserRepository::new(conn)),
                        )
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to the content store: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory_repos()
                    }
                }
            } else {
                tracing::warn!(
                    "DATABASE_URL not set. Running without a content store (in-memory mode)."
                );
                in_memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (drafts, published, users): Repos = {
            let _ = store_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            drafts: Arc::new(DraftService::new(drafts)),
            published: Arc::new(PublishedService::new(published)),
            users,
        }
    }
}
