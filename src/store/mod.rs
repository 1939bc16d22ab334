#[cfg(feature = "redis-store")]
pub mod redis;

pub mod memory;

mod defaults;
mod store_trait;

pub use defaults::*;
pub use store_trait::*;

use serde::{Serialize, de::DeserializeOwned};

/// Key prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "sess:";

/// The conventional shape of a session record: a JSON object mapping string
/// keys to arbitrary JSON values.
///
/// Stores are generic over any serde-compatible record type; this alias just
/// names the untyped form most middlewares persist.
pub type SessionRecord = serde_json::Map<String, serde_json::Value>;

pub(crate) fn serialize_value<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(|e| Error::Encode(e.to_string()))
}

pub(crate) fn deserialize_value<T: DeserializeOwned>(value: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(value).map_err(|e| Error::Decode(e.to_string()))
}
