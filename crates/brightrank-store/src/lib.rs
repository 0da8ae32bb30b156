//! Keyed JSON persistence for BrightRank state.
//!
//! A [`KeyValueStore`] holds JSON documents under short string keys.
//! [`AppRepository`] layers typed access to the profile, per-brand analysis
//! history, and saved reports on top of any store.

pub mod error;
pub mod file;
pub mod memory;
pub mod repository;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use repository::{AppRepository, HISTORY_KEY, PROFILE_KEY, REPORTS_KEY};

/// A string-keyed store of JSON values.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key is invalid or the stored bytes cannot
    /// be read or parsed.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Replaces the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key is invalid or the write fails.
    fn put(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key is invalid or the delete fails.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Rejects keys that could escape a data directory or collide on disk.
///
/// # Errors
///
/// Returns [`StoreError::InvalidKey`] unless `key` is non-empty and made only
/// of ASCII alphanumerics, `-` and `_`.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
