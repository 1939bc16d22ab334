use crate::store::{
    DEFAULT_PREFIX, Error, SessionStore, StoreDefaults, deserialize_value, serialize_value,
};
use fred::clients::Client;
use fred::interfaces::{ClientLike, KeysInterface, ServerInterface};
use fred::types::Expiration;
use fred::types::config::{Config, ServerConfig};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;

impl From<fred::error::Error> for Error {
    fn from(err: fred::error::Error) -> Self {
        Error::Backend(err.to_string())
    }
}

/// A builder for creating a `RedisStore` from connection settings.
///
/// Anything beyond host, port, and prefix — auth, TLS, database index,
/// timeouts — passes through the client [`Config`] untouched; this layer
/// configures nothing about the connection itself.
#[derive(Debug)]
pub struct RedisStoreBuilder {
    host: String,
    port: u16,
    prefix: String,
    config: Config,
}

impl RedisStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            prefix: DEFAULT_PREFIX.to_string(),
            config: Config::default(),
        }
    }

    /// Sets a custom key prefix. Defaults to `"sess:"`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Pass-through options for the underlying client. The server address is
    /// always taken from the builder's host and port.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Builds the store, connecting the client and waiting for the connection
    /// to be ready.
    pub async fn build(self) -> Result<RedisStore<Client>, Error> {
        let mut config = self.config;
        config.server = ServerConfig::new_centralized(&self.host, self.port);

        let client = Client::new(config, None, None, None);
        client.connect();
        client.wait_for_connect().await.map_err(|err| {
            tracing::error!(err = %err, host = %self.host, port = self.port, "failed to connect to redis");
            Error::from(err)
        })?;

        tracing::debug!(host = %self.host, port = self.port, "connected to redis");

        Ok(RedisStore::new(Arc::new(client)).with_prefix(self.prefix))
    }
}

/// A Redis session store implementation.
///
/// Records are serialized as plain JSON and written under `prefix + id` with
/// `SET .. EX`, so value and TTL land in one atomic command. Reads are plain
/// `GET`s and never touch the TTL; expiry is entirely Redis-driven.
///
/// The store is generic over the client, so it works with a single
/// [`Client`] or a pool alike.
///
/// # Scope warning
///
/// `count` runs `DBSIZE` and `clear` runs `FLUSHALL`: both operate on the
/// whole backing database, not only on keys under this store's prefix. See
/// the crate-level documentation.
#[derive(Clone, Debug)]
pub struct RedisStore<C: KeysInterface + ServerInterface + Clone + Send + Sync = Client> {
    client: Arc<C>,
    prefix: String,
    defaults: Arc<StoreDefaults>,
}

impl<C> RedisStore<C>
where
    C: KeysInterface + ServerInterface + Clone + Send + Sync,
{
    /// Creates a store over an already-connected client or pool.
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
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
}

impl<C> SessionStore for RedisStore<C>
where
    C: KeysInterface + ServerInterface + Clone + Send + Sync + 'static,
{
    async fn get<T>(&self, session_id: &str) -> Result<Option<T>, Error>
    where
        T: Send + Sync + DeserializeOwned,
    {
        let value = self
            .client
            .get::<Option<Vec<u8>>, _>(self.storage_key(session_id))
            .await?;

        let deserialized = if let Some(value) = value {
            Some(deserialize_value::<T>(&value)?)
        } else {
            None
        };

        Ok(deserialized)
    }

    async fn set<T>(&self, session_id: &str, record: &T) -> Result<(), Error>
    where
        T: Send + Sync + Serialize,
    {
        let serialized = serialize_value(record)?;
        let ttl = self.defaults.ttl_seconds();

        let _: () = self
            .client
            .set(
                self.storage_key(session_id),
                serialized.as_slice(),
                Some(Expiration::EX(ttl)),
                None,
                false,
            )
            .await?;

        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), Error> {
        // DEL of an absent key deletes 0 keys; still a success.
        let _: u64 = self.client.del(self.storage_key(session_id)).await?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, Error> {
        Ok(self.client.dbsize().await?)
    }

    async fn clear(&self) -> Result<(), Error> {
        tracing::warn!("flushing every key in the backing redis database");

        let _: () = self.client.flushall(false).await?;

        Ok(())
    }

    fn defaults(&self) -> &StoreDefaults {
        &self.defaults
    }
}
