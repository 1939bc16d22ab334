use serde::{Serialize, de::DeserializeOwned};

use crate::store::StoreDefaults;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The record could not be serialized; the write was never issued.
    #[error("Encoding failed with: {0}")]
    Encode(String),

    /// The stored value could not be deserialized. The record exists but is
    /// corrupt; this is never reported as absence.
    #[error("Decoding failed with: {0}")]
    Decode(String),

    /// A connection or protocol failure from the backing store, surfaced
    /// as-is.
    #[error("{0}")]
    Backend(String),
}

/// The operation set a session middleware expects from a pluggable store.
///
/// Implementations are stateless brokers over their backend: every operation
/// issues exactly one underlying store call and resolves to exactly one of
/// success, absence, or error. There are no retries and no local recovery.
///
/// Storage keys are derived as `prefix + session_id`, where the prefix is
/// fixed when the store is constructed. The session ID itself is an opaque
/// string owned by the caller.
#[allow(async_fn_in_trait)]
pub trait SessionStore: Clone + Send + Sync + 'static {
    /// Fetches the record stored for `session_id`.
    ///
    /// Returns `Ok(None)` when no record exists — absence is not an error.
    /// Reading never refreshes the record's TTL.
    async fn get<T>(&self, session_id: &str) -> Result<Option<T>, Error>
    where
        T: Send + Sync + DeserializeOwned;

    /// Persists `record` for `session_id`, overwriting any prior value and
    /// refreshing the TTL.
    ///
    /// The TTL is the store's max-age at the moment of the call, floored to
    /// whole seconds; value and TTL are written in a single store operation.
    async fn set<T>(&self, session_id: &str, record: &T) -> Result<(), Error>
    where
        T: Send + Sync + Serialize;

    /// Deletes the record stored for `session_id`.
    ///
    /// Deleting an absent record is a success; `destroy` is idempotent.
    async fn destroy(&self, session_id: &str) -> Result<(), Error>;

    /// Returns the number of keys in the **entire** backing store.
    ///
    /// This is not scoped to the store's prefix: on a backend shared with
    /// other key namespaces the count is inflated accordingly.
    async fn count(&self) -> Result<u64, Error>;

    /// Removes **every** key from the backing store — all keys, all prefixes,
    /// all tenants, not just sessions written through this store.
    ///
    /// Destructive and scope-unsafe on shared backends; see the crate-level
    /// documentation before calling this anywhere near production data.
    async fn clear(&self) -> Result<(), Error>;

    /// The store's base behavior: the max-age applied to subsequent writes.
    ///
    /// The surrounding middleware sets the session lifetime here; each `set`
    /// reads it at write time.
    fn defaults(&self) -> &StoreDefaults;
}
