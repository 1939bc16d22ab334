//! # Rsess: Redis Session Store for HTTP Applications
//!
//! `rsess` is a small session-persistence adapter: it stores, retrieves,
//! expires, and removes opaque session records in Redis on behalf of a web
//! session middleware. The middleware owns session IDs and cookies; this crate
//! owns the store contract — key namespacing, JSON serialization, TTL
//! propagation, and error surfacing.
//!
//! # Quick Start
//!
//! Here's a basic example with the `RedisStore`. This requires the
//! `redis-store` feature.
//!
//! ```rust,ignore
//! use rsess::store::SessionStore;
//! use rsess::store::redis::RedisStoreBuilder;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Connects to Redis and waits for the connection to be ready.
//!     let store = RedisStoreBuilder::new("127.0.0.1", 6379)
//!         .prefix("sess:")
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     // Sessions written from now on live for an hour.
//!     store.defaults().set_max_age(Duration::from_secs(3600));
//!
//!     store.set("abc123", &serde_json::json!({"user": "alice"})).await.unwrap();
//!     let record: Option<serde_json::Value> = store.get("abc123").await.unwrap();
//!     store.destroy("abc123").await.unwrap();
//! }
//! ```
//!
//! The session ID is whatever opaque string your middleware hands over; the
//! store never generates or validates IDs. Records are written under
//! `prefix + id` (default prefix `"sess:"`) as plain JSON, with the TTL
//! derived from the store's max-age at write time.
//!
//! # Stores
//!
//! ## Redis
//!
//! The production store, enabled by the `redis-store` feature. Built on
//! [`fred`](https://docs.rs/fred), either from connection settings via
//! `RedisStoreBuilder` or from an already-connected client or pool via
//! `RedisStore::new`.
//!
//! ## Memory
//!
//! [`store::memory::MemoryStore`] implements the same trait over a
//! process-local map, with the same prefix, TTL, and scope semantics. Useful
//! for tests and local development; do not use it in production.
//!
//! ```rust,no_run
//! use rsess::store::SessionStore;
//! use rsess::store::memory::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryStore::new();
//!     store.set("abc123", &serde_json::json!({"user": "alice"})).await.unwrap();
//! }
//! ```
//!
//! # Important Notes
//!
//! ## `count` and `clear` are database-wide
//!
//! [`SessionStore::count`](store::SessionStore::count) reports the key count
//! of the **entire** backing database (`DBSIZE`), and
//! [`SessionStore::clear`](store::SessionStore::clear) flushes the **entire**
//! backing store (`FLUSHALL`) — all keys, all prefixes, all tenants, not just
//! keys under this store's prefix. On a Redis instance shared with anything
//! else, `count` over-reports and `clear` destroys data that was never this
//! store's to begin with. Point the store at a dedicated Redis database, or
//! avoid these two operations on shared infrastructure.
//!
//! ## TTL granularity
//!
//! The max-age is held in milliseconds but Redis expiry is whole seconds, so
//! the TTL is the max-age floored to seconds. A max-age under one second
//! floors to a TTL of 0, which expires the record immediately — Redis rejects
//! `EX 0`, so such a write surfaces a backend error.
//!
//! ## Reads do not refresh the TTL
//!
//! A `get` never extends a session's lifetime; only `set` refreshes the TTL.

pub mod store;

#[cfg(feature = "redis-store")]
pub use fred;
