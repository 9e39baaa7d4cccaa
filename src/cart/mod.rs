/// Shopping cart store
///
/// Holds purchase line items, at most one per (photo, quality) pair. The full
/// list is written back to storage after every mutation and read once when
/// the store is built.

use crate::{
    catalog::Photo,
    storage::{self, KeyValueStorage, CART_KEY},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Purchasable quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Web,
    High,
    Original,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Quality::Web, Quality::High, Quality::Original];

    /// List price in SEK
    pub fn price(&self) -> u32 {
        match self {
            Quality::Web => 499,
            Quality::High => 999,
            Quality::Original => 1499,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::Web => "Web Quality",
            Quality::High => "High Quality",
            Quality::Original => "Original Quality",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Web => "web",
            Quality::High => "high",
            Quality::Original => "original",
        }
    }

    /// Delivered resolution for a photo orientation
    pub fn resolution(&self, portrait: bool) -> &'static str {
        match (self, portrait) {
            (Quality::Web, true) => "Portrait: 720×1080",
            (Quality::Web, false) => "Landscape: 1080×720",
            (Quality::High, true) => "Portrait: 4000×6000",
            (Quality::High, false) => "Landscape: 6000×4000",
            (Quality::Original, _) => "Uncompressed Original Files",
        }
    }
}

impl std::str::FromStr for Quality {
    type Err = crate::error::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Quality::Web),
            "high" => Ok(Quality::High),
            "original" => Ok(Quality::Original),
            other => Err(crate::error::AppError::Validation(format!(
                "Unknown quality tier: {}",
                other
            ))),
        }
    }
}

/// One line in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_id: String,
    pub photo_id: String,
    /// Copy of the photo taken when the item was added
    pub photo: Photo,
    pub quality: Quality,
    pub quality_label: String,
    /// Price in SEK
    pub price: u32,
}

/// Cart store
pub struct CartStore {
    items: RwLock<Vec<CartItem>>,
    storage: Arc<dyn KeyValueStorage>,
}

impl CartStore {
    /// Build the store, rehydrating any persisted cart
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let items: Vec<CartItem> = storage::load_json(storage.as_ref(), CART_KEY);
        info!("Cart loaded with {} item(s)", items.len());

        Self {
            items: RwLock::new(items),
            storage,
        }
    }

    fn persist(&self, items: &[CartItem]) {
        storage::save_json(self.storage.as_ref(), CART_KEY, items);
    }

    /// Add a photo at a quality tier
    ///
    /// Returns false, changing nothing, when the pair is already in the cart.
    pub async fn add_to_cart(&self, photo: &Photo, quality: Quality, label: &str, price: u32) -> bool {
        let mut items = self.items.write().await;

        if items
            .iter()
            .any(|item| item.photo_id == photo.id && item.quality == quality)
        {
            debug!("Photo {} ({}) already in cart", photo.id, quality.as_str());
            return false;
        }

        items.push(CartItem {
            cart_id: Uuid::new_v4().to_string(),
            photo_id: photo.id.clone(),
            photo: photo.clone(),
            quality,
            quality_label: label.to_string(),
            price,
        });
        self.persist(&items);

        info!("Added photo {} ({}) to cart", photo.id, quality.as_str());
        true
    }

    /// Remove one line by its cart id; returns whether anything was removed
    pub async fn remove_from_cart(&self, cart_id: &str) -> bool {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.cart_id != cart_id);

        let removed = items.len() != before;
        if removed {
            self.persist(&items);
        }
        removed
    }

    /// Remove every line for a photo regardless of quality; returns the count
    pub async fn remove_from_cart_by_photo_id(&self, photo_id: &str) -> usize {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.photo_id != photo_id);

        let removed = before - items.len();
        if removed > 0 {
            self.persist(&items);
        }
        removed
    }

    pub async fn clear_cart(&self) {
        let mut items = self.items.write().await;
        items.clear();
        self.persist(&items);
        info!("Cart cleared");
    }

    pub async fn items(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Sum of item prices in SEK
    pub async fn total(&self) -> u32 {
        self.items.read().await.iter().map(|item| item.price).sum()
    }

    pub async fn is_in_cart(&self, photo_id: &str) -> bool {
        self.items
            .read()
            .await
            .iter()
            .any(|item| item.photo_id == photo_id)
    }

    pub async fn is_in_cart_with_quality(&self, photo_id: &str, quality: Quality) -> bool {
        self.items
            .read()
            .await
            .iter()
            .any(|item| item.photo_id == photo_id && item.quality == quality)
    }

    /// Take every item out of the cart in one step
    pub(crate) async fn drain(&self) -> Vec<CartItem> {
        let mut items = self.items.write().await;
        let drained = std::mem::take(&mut *items);
        self.persist(&items);
        drained
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    pub(crate) fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            src: "/images/DSC_8370.jpg".to_string(),
            rider: "Ebba Lindström".to_string(),
            horse: "Björkdal Brave".to_string(),
            event: "Sweden International Horse Show".to_string(),
            event_id: "c1".to_string(),
            date: "2026-11-26".to_string(),
            width: 800,
            height: 600,
            class_name: "1.30m".to_string(),
            time: "10:00".to_string(),
            city: "Stockholm".to_string(),
            arena: "Stockholm Arena".to_string(),
            country_code: "se".to_string(),
            discipline: Some("Show Jumping".to_string()),
            photographer: Some("Hanna Björk".to_string()),
            photographer_id: Some("hanna-bjork".to_string()),
        }
    }

    fn store() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_add_is_idempotent_per_photo_and_quality() {
        let cart = store();
        let p = photo("p1");

        assert!(cart.add_to_cart(&p, Quality::High, "High Quality", 999).await);
        assert!(!cart.add_to_cart(&p, Quality::High, "High Quality", 999).await);
        assert_eq!(cart.len().await, 1);

        // Another tier of the same photo is a separate line
        assert!(cart.add_to_cart(&p, Quality::Web, "Web Quality", 499).await);
        assert_eq!(cart.len().await, 2);
        assert!(cart.is_in_cart_with_quality("p1", Quality::Web).await);
        assert!(!cart.is_in_cart_with_quality("p1", Quality::Original).await);
    }

    #[tokio::test]
    async fn test_total_tracks_items() {
        let cart = store();
        cart.add_to_cart(&photo("p1"), Quality::High, "High Quality", 999).await;
        cart.add_to_cart(&photo("p2"), Quality::Original, "Original Quality", 1499).await;
        cart.add_to_cart(&photo("p3"), Quality::Web, "Web Quality", 499).await;
        assert_eq!(cart.total().await, 2997);

        let first = cart.items().await[0].cart_id.clone();
        assert!(cart.remove_from_cart(&first).await);
        assert!(!cart.remove_from_cart(&first).await);
        assert_eq!(cart.total().await, 1998);

        cart.clear_cart().await;
        assert_eq!(cart.total().await, 0);
        assert!(cart.is_empty().await);
    }

    #[tokio::test]
    async fn test_single_item_scenario() {
        let cart = store();
        cart.add_to_cart(&photo("p1"), Quality::High, "High Quality", 999).await;
        assert_eq!(cart.total().await, 999);

        assert_eq!(cart.remove_from_cart_by_photo_id("p1").await, 1);
        assert!(cart.is_empty().await);
        assert_eq!(cart.total().await, 0);
        assert!(!cart.is_in_cart("p1").await);
    }

    #[tokio::test]
    async fn test_remove_by_photo_id_drops_all_tiers() {
        let cart = store();
        let p = photo("p1");
        for q in Quality::ALL {
            cart.add_to_cart(&p, q, q.label(), q.price()).await;
        }
        cart.add_to_cart(&photo("p2"), Quality::Web, "Web Quality", 499).await;

        assert_eq!(cart.remove_from_cart_by_photo_id("p1").await, 3);
        assert_eq!(cart.len().await, 1);
        assert!(cart.is_in_cart("p2").await);
    }

    #[tokio::test]
    async fn test_cart_rehydrates_from_storage() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let cart = CartStore::new(storage.clone());
        cart.add_to_cart(&photo("p1"), Quality::High, "High Quality", 999).await;
        let saved = cart.items().await;

        let rebuilt = CartStore::new(storage.clone());
        assert_eq!(rebuilt.items().await, saved);

        storage.set(CART_KEY, "[{\"broken\":").unwrap();
        let degraded = CartStore::new(storage);
        assert!(degraded.is_empty().await);
    }

    #[test]
    fn test_quality_tiers() {
        assert_eq!(Quality::High.price(), 999);
        assert_eq!("original".parse::<Quality>().unwrap(), Quality::Original);
        assert!("poster".parse::<Quality>().is_err());
        assert_eq!(Quality::Web.resolution(true), "Portrait: 720×1080");
    }
}
