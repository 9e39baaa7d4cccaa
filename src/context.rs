/// Application context and dependency injection
use crate::{
    auth::AuthStore,
    cart::CartStore,
    catalog::Catalog,
    checkout::CheckoutStore,
    config::AppConfig,
    error::{AppError, AppResult},
    history::RecentlyViewed,
    preferences::IntroPreference,
    storage::{FileStorage, KeyValueStorage, MemoryStorage},
    workspace::WorkspaceStore,
};
use std::sync::Arc;

/// Application context holding all shared stores
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// Durable key/value scope
    pub local_storage: Arc<dyn KeyValueStorage>,
    /// Per-process key/value scope
    pub session_storage: Arc<dyn KeyValueStorage>,
    pub catalog: Arc<Catalog>,
    pub cart: Arc<CartStore>,
    pub auth: Arc<AuthStore>,
    pub checkout: Arc<CheckoutStore>,
    pub workspace: Arc<WorkspaceStore>,
    pub recent: Arc<RecentlyViewed>,
    pub intro: Arc<IntroPreference>,
}

impl AppContext {
    /// Create a new application context from configuration
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        // Validate configuration
        config.validate()?;

        // Create data directory if it doesn't exist
        tokio::fs::create_dir_all(&config.storage.data_directory)
            .await
            .map_err(|e| {
                AppError::Storage(format!(
                    "Failed to create data directory {}: {}",
                    config.storage.data_directory.display(),
                    e
                ))
            })?;

        let local_storage: Arc<dyn KeyValueStorage> =
            Arc::new(FileStorage::open(&config.storage.local_storage_file)?);

        Ok(Self::with_storage(config, local_storage))
    }

    /// Build every store over the given durable scope
    ///
    /// Session scope is always fresh process memory.
    pub fn with_storage(config: AppConfig, local_storage: Arc<dyn KeyValueStorage>) -> Self {
        let session_storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let catalog = Arc::new(Catalog::generate(&config.catalog));
        let cart = Arc::new(CartStore::new(local_storage.clone()));
        let auth = Arc::new(AuthStore::new(local_storage.clone()));
        let checkout = Arc::new(CheckoutStore::new(
            config.checkout.clone(),
            cart.clone(),
            local_storage.clone(),
            session_storage.clone(),
        ));
        let workspace = Arc::new(WorkspaceStore::new(&config.workspace, &catalog));
        let recent = Arc::new(RecentlyViewed::new(local_storage.clone()));
        let intro = Arc::new(IntroPreference::new(session_storage.clone()));

        Self {
            config: Arc::new(config),
            local_storage,
            session_storage,
            catalog,
            cart,
            auth,
            checkout,
            workspace,
            recent,
            intro,
        }
    }

    /// Fully in-memory context
    pub fn in_memory(config: AppConfig) -> Self {
        Self::with_storage(config, Arc::new(MemoryStorage::new()))
    }

    /// Highlights shown on a photographer's public profile
    ///
    /// The workspace photographer's live selection wins over the seeded one.
    pub async fn public_highlights(&self, photographer_id: &str) -> Vec<String> {
        if photographer_id == self.workspace.photographer_id() {
            self.workspace.highlights().await
        } else {
            self.catalog.seed_highlights(photographer_id)
        }
    }

    /// Public availability flag, live for the workspace photographer
    pub async fn public_available_to_hire(&self, photographer_id: &str) -> bool {
        if photographer_id == self.workspace.photographer_id() {
            self.workspace.available_to_hire().await
        } else {
            crate::catalog::photographer(photographer_id)
                .map(|p| p.is_available_to_hire)
                .unwrap_or(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_new_creates_storage_file_on_write() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::for_data_directory(dir.path().join("data"));
        let ctx = AppContext::new(config).await.unwrap();

        ctx.intro.toggle().await;
        ctx.recent.record_view("m-1").await;
        assert!(dir.path().join("data").join("local_storage.json").exists());
    }

    #[tokio::test]
    async fn test_workspace_highlights_reach_public_profile() {
        let ctx = AppContext::in_memory(AppConfig::for_data_directory("./unused".into()));

        ctx.workspace
            .update_highlights(vec!["m-1".to_string(), "m-2".to_string()])
            .await
            .unwrap();
        ctx.workspace.toggle_available_to_hire(true).await;

        assert_eq!(ctx.public_highlights("klara-fors").await, vec!["m-1", "m-2"]);
        assert!(ctx.public_available_to_hire("klara-fors").await);
        assert_eq!(
            ctx.public_highlights("hanna-bjork").await,
            ctx.catalog.seed_highlights("hanna-bjork")
        );
    }
}
