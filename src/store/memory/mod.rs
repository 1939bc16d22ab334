use crate::store::{
    DEFAULT_PREFIX, Error, SessionStore, StoreDefaults, deserialize_value, serialize_value,
};
use dashmap::DashMap;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct StoredValue {
    data: Vec<u8>,
    expires_at: Instant,
}

/// An in-memory session store implementation.
///
/// It keeps records in a process-local map with the same key-prefixing, TTL,
/// and scope semantics as the Redis store: `count` spans every key in the map
/// and `clear` drops them all, regardless of prefix.
///
/// Clones share the backing map, so two handles with different prefixes
/// behave like two tenants of one shared backend.
///
/// ### Note
///
/// Do not use this in a production environment.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    data: Arc<DashMap<String, StoredValue>>,
    prefix: String,
    defaults: Arc<StoreDefaults>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
            prefix: DEFAULT_PREFIX.to_string(),
            defaults: Arc::new(StoreDefaults::default()),
        }
    }

    /// Sets a custom key prefix. Defaults to `"sess:"`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn storage_key(&self, session_id: &str) -> String {
        format!("{}{}", self.prefix, session_id)
    }

    fn cleanup_expired(&self) {
        self.data.retain(|_, value| value.expires_at > Instant::now());
    }
}

impl SessionStore for MemoryStore {
    async fn get<T>(&self, session_id: &str) -> Result<Option<T>, Error>
    where
        T: Send + Sync + DeserializeOwned,
    {
        self.cleanup_expired();

        if let Some(value) = self.data.get(&self.storage_key(session_id)) {
            if value.expires_at > Instant::now() {
                return Ok(Some(deserialize_value(&value.data)?));
            }
        }
        Ok(None)
    }

    async fn set<T>(&self, session_id: &str, record: &T) -> Result<(), Error>
    where
        T: Send + Sync + Serialize,
    {
        self.cleanup_expired();

        let data = serialize_value(record)?;
        // TTL 0 leaves expires_at at "now": the record is already expired.
        let ttl = self.defaults.ttl_seconds();
        let expires_at = Instant::now() + Duration::from_secs(ttl as u64);

        self.data
            .insert(self.storage_key(session_id), StoredValue { data, expires_at });

        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), Error> {
        self.data.remove(&self.storage_key(session_id));
        Ok(())
    }

    async fn count(&self) -> Result<u64, Error> {
        self.cleanup_expired();

        // Every live key in the backing map, not just this handle's prefix.
        Ok(self.data.len() as u64)
    }

    async fn clear(&self) -> Result<(), Error> {
        self.data.clear();
        Ok(())
    }

    fn defaults(&self) -> &StoreDefaults {
        &self.defaults
    }
}
