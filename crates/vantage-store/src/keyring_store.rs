use crate::{KeyValueStore, StoreError, validate_key};

const DEFAULT_KEYRING_SERVICE: &str = "vantage-cli";

/// Stores each key as a password entry of one keychain service.
#[derive(Debug, Clone)]
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Service name from `VANTAGE_KEYRING_SERVICE`, defaulting to
    /// `vantage-cli`. Tests point it elsewhere to keep real entries intact.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("VANTAGE_KEYRING_SERVICE")
                .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string()),
        )
    }

    fn entry(&self, key: &str) -> Result<keyring::Entry, StoreError> {
        validate_key(key)?;
        keyring::Entry::new(&self.service, key).map_err(|e| StoreError::Keyring(e.to_string()))
    }
}

impl KeyValueStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self.entry(key)?.get_password() {
            Ok(value) if value.is_empty() => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(StoreError::Keyring(error.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entry(key)?
            .set_password(value)
            .map_err(|e| StoreError::Keyring(e.to_string()))
    }

    fn clear(&self, key: &str) -> Result<(), StoreError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(StoreError::Keyring(error.to_string())),
        }
    }

    fn backend_name(&self) -> &'static str {
        "keyring"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_fails_before_touching_keychain() {
        let store = KeyringStore::new("vantage-cli-test");
        assert!(matches!(store.get("bad key"), Err(StoreError::InvalidKey(_))));
    }

    #[test]
    #[ignore] // requires an OS keychain
    fn live_keyring_cycle() {
        let store = KeyringStore::new("vantage-cli-test");
        store.set("roundtrip", "value").unwrap();
        assert_eq!(store.get("roundtrip").unwrap().as_deref(), Some("value"));
        store.clear("roundtrip").unwrap();
        assert_eq!(store.get("roundtrip").unwrap(), None);
    }
}
