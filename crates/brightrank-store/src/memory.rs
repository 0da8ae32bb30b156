use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;
use crate::{validate_key, KeyValueStore};

/// In-process store. Nothing survives the process; used by tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_values<T>(&self, f: impl FnOnce(&mut HashMap<String, serde_json::Value>) -> T) -> T {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut values)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        validate_key(key)?;
        Ok(self.with_values(|values| values.get(key).cloned()))
    }

    fn put(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        validate_key(key)?;
        self.with_values(|values| values.insert(key.to_string(), value.clone()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.with_values(|values| values.remove(key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.put("k", &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(serde_json::json!({"a": 1})));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn removing_missing_key_is_ok() {
        assert!(MemoryStore::new().remove("nothing").is_ok());
    }
}
