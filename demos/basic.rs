use rsess::store::SessionStore;
use rsess::store::redis::RedisStoreBuilder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct AppSession {
    user: String,
    theme: String,
}

#[tokio::main]
async fn main() {
    let store = RedisStoreBuilder::new("127.0.0.1", 6379)
        .prefix("sess:")
        .build()
        .await
        .unwrap();

    store.defaults().set_max_age(Duration::from_secs(3600));

    let record = AppSession {
        user: String::from("alice"),
        theme: String::from("dark"),
    };
    store.set("abc123", &record).await.unwrap();

    let fetched: Option<AppSession> = store.get("abc123").await.unwrap();
    println!("fetched: {fetched:?}");

    // Whole-database key count, not just sessions.
    println!("keys in database: {}", store.count().await.unwrap());

    store.destroy("abc123").await.unwrap();
    let gone: Option<AppSession> = store.get("abc123").await.unwrap();
    println!("after destroy: {gone:?}");
}
