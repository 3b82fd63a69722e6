//! Key/value port and JSON helpers.

use crate::error::Result;
use log::warn;
use serde::{Serialize, de::DeserializeOwned};

/// A string-keyed, string-valued local cache.
pub trait KvStore: Send + Sync {
    /// Read a value. `None` if the key was never set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Read and decode a JSON value.
///
/// Anything that cannot be read or decoded counts as absent.
pub fn get_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Ignoring unreadable cache key {}: {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring malformed cache value for {}: {}", key, e);
            None
        }
    }
}

/// Encode a value as JSON and write it.
pub fn set_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_json_roundtrip_through_port() {
        let store = MemoryStore::new();
        set_json(&store, "answers", &vec!["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(store.get("answers").unwrap().as_deref(), Some(r#"["a","b"]"#));
        let back: Option<Vec<String>> = get_json(&store, "answers");
        assert_eq!(back, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_missing_key_is_absent() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = get_json(&store, "nothing");
        assert!(value.is_none());
    }

    #[test]
    fn test_malformed_value_is_absent() {
        let store = MemoryStore::new();
        store.set("answers", "[\"unterminated").unwrap();
        let value: Option<Vec<String>> = get_json(&store, "answers");
        assert!(value.is_none());
    }

    #[test]
    fn test_wrong_shape_is_absent() {
        let store = MemoryStore::new();
        store.set("answers", r#"{"not":"a list"}"#).unwrap();
        let value: Option<Vec<String>> = get_json(&store, "answers");
        assert!(value.is_none());
    }

    #[test]
    fn test_dyn_store_helpers() {
        let store: Box<dyn KvStore> = Box::new(MemoryStore::new());
        set_json(store.as_ref(), "n", &3).unwrap();
        let n: Option<u32> = get_json(store.as_ref(), "n");
        assert_eq!(n, Some(3));
    }
}
