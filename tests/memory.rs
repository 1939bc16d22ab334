use rsess::store::memory::MemoryStore;
use rsess::store::{SessionRecord, SessionStore};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct TestUser {
    id: i64,
    name: String,
}

#[tokio::test]
async fn test_session_lifecycle() {
    let store = MemoryStore::new();
    store.defaults().set_max_age(Duration::from_millis(60_000));

    store
        .set("abc123", &json!({"user": "alice"}))
        .await
        .unwrap();

    let record: Option<serde_json::Value> = store.get("abc123").await.unwrap();
    assert_eq!(record.unwrap(), json!({"user": "alice"}));

    store.destroy("abc123").await.unwrap();

    let record: Option<serde_json::Value> = store.get("abc123").await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn test_round_trip_typed_record() {
    let store = MemoryStore::new();
    let user = TestUser {
        id: 1,
        name: "Test User".to_string(),
    };

    store.set("s1", &user).await.unwrap();

    let retrieved: Option<TestUser> = store.get("s1").await.unwrap();
    assert_eq!(retrieved.unwrap(), user);
}

#[tokio::test]
async fn test_round_trip_untyped_record() {
    let store = MemoryStore::new();

    let mut record = SessionRecord::new();
    record.insert("user".to_string(), json!("alice"));
    record.insert("views".to_string(), json!(3));

    store.set("s1", &record).await.unwrap();

    let retrieved: Option<SessionRecord> = store.get("s1").await.unwrap();
    assert_eq!(retrieved.unwrap(), record);
}

#[tokio::test]
async fn test_absence_is_not_an_error() {
    let store = MemoryStore::new();

    let record: Option<TestUser> = store.get("never-written").await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn test_destroy_is_idempotent() {
    let store = MemoryStore::new();

    store.set("s1", &1i32).await.unwrap();
    store.destroy("s1").await.unwrap();
    store.destroy("s1").await.unwrap();
    store.destroy("never-written").await.unwrap();
}

#[tokio::test]
async fn test_sub_second_max_age_expires_immediately() {
    let store = MemoryStore::new();
    store.defaults().set_max_age(Duration::from_millis(500));

    store.set("s1", &json!({"user": "alice"})).await.unwrap();

    let record: Option<serde_json::Value> = store.get("s1").await.unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn test_count_spans_all_prefixes() {
    let store = MemoryStore::new();
    let other_tenant = store.clone().with_prefix("other:");

    store.set("s1", &1i32).await.unwrap();
    store.set("s2", &2i32).await.unwrap();
    other_tenant.set("s1", &3i32).await.unwrap();

    // The count is the whole backing store, so both handles see all three.
    assert_eq!(store.count().await.unwrap(), 3);
    assert_eq!(other_tenant.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_clear_flushes_all_prefixes() {
    let store = MemoryStore::new();
    let other_tenant = store.clone().with_prefix("other:");

    store.set("s1", &1i32).await.unwrap();
    other_tenant.set("s1", &2i32).await.unwrap();

    store.clear().await.unwrap();

    let mine: Option<i32> = store.get("s1").await.unwrap();
    let theirs: Option<i32> = other_tenant.get("s1").await.unwrap();
    assert!(mine.is_none());
    assert!(theirs.is_none());
    assert_eq!(store.count().await.unwrap(), 0);
}
