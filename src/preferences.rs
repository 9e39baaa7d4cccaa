/// Per-session UI preferences
use crate::storage::{self, KeyValueStorage, INTRO_COLLAPSED_KEY};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Whether the home page intro is collapsed
///
/// Lives in session scope, so it resets with the process.
pub struct IntroPreference {
    lock: Mutex<()>,
    storage: Arc<dyn KeyValueStorage>,
}

impl IntroPreference {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            lock: Mutex::new(()),
            storage,
        }
    }

    pub async fn is_collapsed(&self) -> bool {
        let _guard = self.lock.lock().await;
        storage::load_flag(self.storage.as_ref(), INTRO_COLLAPSED_KEY)
    }

    pub async fn set_collapsed(&self, collapsed: bool) {
        let _guard = self.lock.lock().await;
        storage::save_flag(self.storage.as_ref(), INTRO_COLLAPSED_KEY, collapsed);
    }

    /// Flip the flag and return the new value
    pub async fn toggle(&self) -> bool {
        let _guard = self.lock.lock().await;
        let collapsed = !storage::load_flag(self.storage.as_ref(), INTRO_COLLAPSED_KEY);
        storage::save_flag(self.storage.as_ref(), INTRO_COLLAPSED_KEY, collapsed);
        collapsed
    }
}
