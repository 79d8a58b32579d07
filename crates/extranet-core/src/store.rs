use std::{collections::HashMap, sync::RwLock};

/// Storage key the access token is persisted under after a fully
/// authenticated login. The downstream application reads the token back
/// from the same key.
pub const AUTH_TOKEN_KEY: &str = "authToken";

#[allow(missing_docs)]
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Capability for durable key-value storage of string values.
///
/// The SDK only ever writes the final access token through this trait, under
/// [`AUTH_TOKEN_KEY`]. Host applications back it with whatever their
/// platform offers (browser local storage, keychain, a file); tests use
/// [`MemoryTokenStore`].
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
    /// Removes the value stored under `key`.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-memory [`TokenStore`], used in tests and by hosts without durable
/// storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        values.insert(key.to_owned(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        values.remove(key);
        Ok(())
    }
}
