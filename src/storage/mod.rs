/// Key/value persistence
///
/// Stands in for the browser's `localStorage` / `sessionStorage`. Stores keep
/// their whole state under a single key as a JSON string; reads that fail or
/// hold corrupt data degrade to the store's empty default.

pub mod disk;
pub mod memory;

pub use disk::FileStorage;
pub use memory::MemoryStorage;

use crate::error::{AppError, AppResult};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// Storage key for the cart line items
pub const CART_KEY: &str = "gallopics_cart";
/// Storage key for the authentication flag
pub const AUTH_FLAG_KEY: &str = "gallopics_auth_is_authenticated";
/// Storage key for the signed-in user profile
pub const AUTH_USER_KEY: &str = "gallopics_auth_user";
/// Storage key for the verified checkout e-mail
pub const VERIFIED_EMAIL_KEY: &str = "gallopics_verified_email";
/// Storage key for recently viewed photo ids
pub const RECENT_KEY: &str = "gallopics_recent";
/// Session storage key for the collapsed intro preference
pub const INTRO_COLLAPSED_KEY: &str = "ehome_intro_collapsed";

/// Key/value storage backend
///
/// Implementations are synchronous, matching the browser storage they replace.
pub trait KeyValueStorage: Send + Sync {
    /// Read a raw value
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a raw value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a value; removing a missing key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Read a JSON value, falling back to `T::default()` when absent or unreadable
pub fn load_json<T>(storage: &dyn KeyValueStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding corrupt value under {}: {}", key, e);
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            warn!("Failed to read {} from storage: {}", key, e);
            T::default()
        }
    }
}

/// Best-effort JSON write; failures are logged and swallowed
pub fn save_json<T: Serialize + ?Sized>(storage: &dyn KeyValueStorage, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(AppError::from)
        .and_then(|json| storage.set(key, &json));

    match result {
        Ok(()) => debug!("Persisted {}", key),
        Err(e) => warn!("Failed to persist {}: {}", key, e),
    }
}

/// Read a `"true"`/`"false"` flag; anything else is false
pub fn load_flag(storage: &dyn KeyValueStorage, key: &str) -> bool {
    match storage.get(key) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            warn!("Failed to read {} from storage: {}", key, e);
            false
        }
    }
}

/// Best-effort flag write
pub fn save_flag(storage: &dyn KeyValueStorage, key: &str, value: bool) {
    if let Err(e) = storage.set(key, if value { "true" } else { "false" }) {
        warn!("Failed to persist {}: {}", key, e);
    }
}

/// Best-effort removal
pub fn remove_key(storage: &dyn KeyValueStorage, key: &str) {
    if let Err(e) = storage.remove(key) {
        warn!("Failed to remove {}: {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json_missing_key_is_default() {
        let storage = MemoryStorage::new();
        let value: Vec<String> = load_json(&storage, RECENT_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_load_json_corrupt_value_is_default() {
        let storage = MemoryStorage::new();
        storage.set(CART_KEY, "{not json").unwrap();

        let value: Vec<String> = load_json(&storage, CART_KEY);
        assert!(value.is_empty());
    }

    #[test]
    fn test_json_roundtrip_through_storage() {
        let storage = MemoryStorage::new();
        save_json(&storage, RECENT_KEY, &vec!["a".to_string(), "b".to_string()]);

        let value: Vec<String> = load_json(&storage, RECENT_KEY);
        assert_eq!(value, vec!["a", "b"]);
        assert_eq!(storage.get(RECENT_KEY).unwrap().as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn test_flags() {
        let storage = MemoryStorage::new();
        assert!(!load_flag(&storage, INTRO_COLLAPSED_KEY));

        save_flag(&storage, INTRO_COLLAPSED_KEY, true);
        assert!(load_flag(&storage, INTRO_COLLAPSED_KEY));
        assert_eq!(storage.get(INTRO_COLLAPSED_KEY).unwrap().as_deref(), Some("true"));

        storage.set(INTRO_COLLAPSED_KEY, "yes").unwrap();
        assert!(!load_flag(&storage, INTRO_COLLAPSED_KEY));
    }
}
