//! Persistence Layer
//!
//! Defines the abstract string-keyed store the todo list is saved into.
//! Implementations can use browser localStorage, in-memory maps, etc.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::TodoItem;

/// Fixed key the serialized list lives under
pub const LIST_KEY: &str = "list";

/// String-keyed store surviving page reloads
///
/// The production backend is browser localStorage; tests substitute
/// [`MemoryStore`]. Reads and writes must never fail the caller.
pub trait KeyValueStore: Send + Sync {
    /// Value saved under `key`, if any
    fn read(&self, key: &str) -> Option<String>;

    /// Save `value` under `key`, overwriting any prior value
    fn write(&self, key: &str, value: &str);
}

/// `window.localStorage` backend
///
/// Storage can be unavailable (privacy mode, headless contexts); both
/// operations degrade to a logged warning rather than failing.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("local storage unavailable, skipping save");
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("failed to save under {key:?}");
        }
    }
}

/// In-memory backend for tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

/// Serialize the full list as a JSON array
///
/// # Errors
///
/// Fails only if serde cannot encode the items, which the data shape
/// rules out in practice.
pub fn encode_list(items: &[TodoItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Decode a previously saved list
///
/// # Errors
///
/// Fails on any payload that is not a JSON array of items. Callers treat
/// that as "no saved data".
pub fn decode_list(raw: &str) -> Result<Vec<TodoItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let items = vec![
            TodoItem::new(1, "first".to_string()),
            TodoItem {
                id: 2,
                title: "second".to_string(),
                completed: true,
            },
        ];

        let payload = encode_list(&items).expect("encode failed");
        let restored = decode_list(&payload).expect("decode failed");
        assert_eq!(restored, items);
    }

    #[test]
    fn test_empty_list_is_a_json_array() {
        let payload = encode_list(&[]).expect("encode failed");
        assert_eq!(payload, "[]");
        assert_eq!(decode_list(&payload).expect("decode failed"), vec![]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_list("not json").is_err());
        assert!(decode_list("{\"id\":1}").is_err());
        assert!(decode_list("[{\"id\":1}]").is_err());
    }

    #[test]
    fn test_memory_store_read_write() {
        let store = MemoryStore::new();
        assert_eq!(store.read(LIST_KEY), None);

        store.write(LIST_KEY, "[]");
        assert_eq!(store.read(LIST_KEY), Some("[]".to_string()));

        store.write(LIST_KEY, "[1]");
        assert_eq!(store.read(LIST_KEY), Some("[1]".to_string()));
        assert_eq!(store.read("other"), None);
    }
}
