//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use sockpress_core::domain::{ArticleSubmission, BrandSubmission};
use sockpress_core::ports::{
    ArticleRepository, BrandRepository, DeviceStorage, SubmissionRepository,
};
use sockpress_core::services::{ArticleModeration, BrandModeration, NewsletterStore};
use sockpress_infra::{
    InMemoryArticleRepository, InMemoryBrandRepository, InMemoryBrandSubmissionRepository,
    InMemoryDeviceStorage, InMemorySubmissionRepository, JsonFileStorage,
};

#[cfg(feature = "postgres")]
use sockpress_infra::database::{
    DatabaseConfig, PostgresArticleRepository, PostgresBrandRepository,
    PostgresBrandSubmissionRepository, PostgresSubmissionRepository, connect,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleRepository>,
    pub brands: Arc<dyn BrandRepository>,
    pub article_moderation: Arc<ArticleModeration>,
    pub brand_moderation: Arc<BrandModeration>,
    pub newsletter: Arc<Mutex<NewsletterStore>>,
    /// Which table store backs the repositories.
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let storage = open_device_storage(&config.storage_dir);

        #[cfg(feature = "postgres")]
        let connected = Self::from_table_store(config.database.as_ref(), storage.clone()).await;

        #[cfg(not(feature = "postgres"))]
        let connected: Option<Self> = {
            tracing::info!("Running without postgres feature - using in-memory repositories");
            None
        };

        let state = connected.unwrap_or_else(|| Self::in_memory(storage));
        tracing::info!(backend = state.backend, "Application state initialized");
        state
    }

    /// State backed by empty in-memory repositories.
    pub fn in_memory(storage: Arc<dyn DeviceStorage>) -> Self {
        Self::wire(
            Arc::new(InMemoryArticleRepository::new()),
            Arc::new(InMemoryBrandRepository::new()),
            Arc::new(InMemorySubmissionRepository::new()),
            Arc::new(InMemoryBrandSubmissionRepository::new()),
            storage,
            "memory",
        )
    }

    #[cfg(feature = "postgres")]
    async fn from_table_store(
        config: Option<&DatabaseConfig>,
        storage: Arc<dyn DeviceStorage>,
    ) -> Option<Self> {
        let Some(config) = config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return None;
        };

        match connect(config).await {
            Ok(conn) => Some(Self::wire(
                Arc::new(PostgresArticleRepository::new(conn.clone())),
                Arc::new(PostgresBrandRepository::new(conn.clone())),
                Arc::new(PostgresSubmissionRepository::new(conn.clone())),
                Arc::new(PostgresBrandSubmissionRepository::new(conn)),
                storage,
                "postgres",
            )),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                None
            }
        }
    }

    /// Each moderation service publishes into the same repository the
    /// public endpoints read from.
    fn wire<A, B, S, BS>(
        articles: Arc<A>,
        brands: Arc<B>,
        submissions: Arc<S>,
        brand_submissions: Arc<BS>,
        storage: Arc<dyn DeviceStorage>,
        backend: &'static str,
    ) -> Self
    where
        A: ArticleRepository + 'static,
        B: BrandRepository + 'static,
        S: SubmissionRepository<ArticleSubmission> + 'static,
        BS: SubmissionRepository<BrandSubmission> + 'static,
    {
        let article_moderation = Arc::new(ArticleModeration::new(submissions, articles.clone()));
        let brand_moderation = Arc::new(BrandModeration::new(brand_submissions, brands.clone()));

        Self {
            articles,
            brands,
            article_moderation,
            brand_moderation,
            newsletter: Arc::new(Mutex::new(NewsletterStore::load(storage))),
            backend,
        }
    }
}

fn open_device_storage(dir: &Path) -> Arc<dyn DeviceStorage> {
    match JsonFileStorage::open(dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!(
                dir = %dir.display(),
                "Failed to open device storage: {}. Newsletter list will not persist.",
                e
            );
            Arc::new(InMemoryDeviceStorage::new())
        }
    }
}
