//! Null Cache Provider Tests

use dcache_providers::CacheProvider;
use dcache_providers::cache::NullCacheProvider;
use std::collections::{HashMap, HashSet};

#[tokio::test]
async fn test_null_provider_stores_nothing() {
    let provider = NullCacheProvider::new();

    provider.set_json("key", "\"value\"").await.unwrap();
    assert_eq!(provider.get_json("key").await.unwrap(), None);
    assert!(!provider.exists("key").await.unwrap());
    assert!(!provider.delete("key").await.unwrap());
    assert_eq!(provider.delete_all("k").await.unwrap(), 0);
    assert!(provider.get_keys("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_null_provider_collections_are_always_empty() {
    let provider = NullCacheProvider::new();

    assert!(provider.set_row_json("c", "e", "1").await.unwrap());
    let rows = HashMap::from([("a".to_string(), "1".to_string())]);
    provider.set_rows_json("c", &rows).await.unwrap();

    assert_eq!(provider.get_length("c").await.unwrap(), 0);
    assert_eq!(provider.read_row_json("c", "e").await.unwrap(), None);
    assert!(provider.read_all_rows_json("c").await.unwrap().is_empty());
    assert!(!provider.exists_row("c", "e").await.unwrap());
    assert!(!provider.delete_row("c", "e").await.unwrap());

    let keys = HashSet::from(["a".to_string()]);
    assert_eq!(provider.delete_rows("c", &keys).await.unwrap(), 0);
    assert!(!provider.delete_row_set("c", &keys).await.unwrap());
}

#[tokio::test]
async fn test_null_provider_name() {
    let provider = NullCacheProvider::new();
    assert_eq!(provider.provider_name(), "null");
    assert!(provider.ping().await.unwrap().is_zero());
}
