//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostCommentService;
use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::PostgresPostRepository;

/// Which storage backend the service is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl Storage {
    pub fn as_str(self) -> &'static str {
        match self {
            Storage::Postgres => "postgres",
            Storage::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostCommentService,
    pub storage: Storage,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = {
            if let Some(config) = db_config {
                match quill_infra::database::connect(config).await {
                    Ok(db) => (Arc::new(PostgresPostRepository::new(db)), Storage::Postgres),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (repo, storage): (Arc<dyn PostRepository>, Storage) = {
            if db_config.is_some() {
                tracing::warn!("Built without postgres feature - ignoring database configuration");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            (Arc::new(InMemoryPostRepository::new()), Storage::Memory)
        };

        tracing::info!(storage = storage.as_str(), "Application state initialized");

        Self::with_repository(repo, storage)
    }

    /// Build the state around an existing repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>, storage: Storage) -> Self {
        Self {
            posts: PostCommentService::new(repo),
            storage,
        }
    }
}
