//! # vantage-store
//!
//! Key/value storage for the small amount of state Vantage keeps on the
//! client (today only the cached analytics connection).
//!
//! Callers depend on [`KeyValueStore`] and receive a concrete store at
//! startup:
//! - [`FileStore`]: one file per key in a directory
//! - [`KeyringStore`]: OS keychain entry per key
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions

mod error;
mod file;
mod keyring_store;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use keyring_store::KeyringStore;
pub use memory::MemoryStore;

/// String key → string value storage with get/set/clear.
///
/// Values are opaque to the store; callers own the encoding.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`. A missing key is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Clearing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend refuses the removal.
    fn clear(&self, key: &str) -> Result<(), StoreError>;

    /// Short backend name for status output.
    fn backend_name(&self) -> &'static str;
}

/// Keys become file names and keychain entries, so keep them boring.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_'));
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
