/// Recently viewed photos
use crate::storage::{self, KeyValueStorage, RECENT_KEY};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// How many photo ids are remembered
pub const RECENT_LIMIT: usize = 8;

pub struct RecentlyViewed {
    ids: RwLock<Vec<String>>,
    storage: Arc<dyn KeyValueStorage>,
}

impl RecentlyViewed {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let mut ids: Vec<String> = storage::load_json(storage.as_ref(), RECENT_KEY);
        ids.truncate(RECENT_LIMIT);

        Self {
            ids: RwLock::new(ids),
            storage,
        }
    }

    /// Move `photo_id` to the front of the list
    pub async fn record_view(&self, photo_id: &str) {
        let mut ids = self.ids.write().await;
        ids.retain(|id| id != photo_id);
        ids.insert(0, photo_id.to_string());
        ids.truncate(RECENT_LIMIT);

        storage::save_json(self.storage.as_ref(), RECENT_KEY, ids.as_slice());
        debug!("Recorded view of {}", photo_id);
    }

    /// Most recent first
    pub async fn ids(&self) -> Vec<String> {
        self.ids.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[tokio::test]
    async fn test_most_recent_first_without_duplicates() {
        let recent = RecentlyViewed::new(Arc::new(MemoryStorage::new()));
        recent.record_view("a").await;
        recent.record_view("b").await;
        recent.record_view("a").await;

        assert_eq!(recent.ids().await, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_capped_and_persisted() {
        let storage = Arc::new(MemoryStorage::new());
        let recent = RecentlyViewed::new(storage.clone());
        for i in 0..12 {
            recent.record_view(&format!("p{}", i)).await;
        }

        let ids = recent.ids().await;
        assert_eq!(ids.len(), RECENT_LIMIT);
        assert_eq!(ids[0], "p11");
        assert_eq!(ids[7], "p4");

        let restored = RecentlyViewed::new(storage);
        assert_eq!(restored.ids().await, ids);
    }
}
