//! In-Memory Cache Provider Tests

use dcache_providers::cache::{CacheValue, InMemoryCacheProvider};
use dcache_providers::{CacheProvider, Error};
use std::collections::{HashMap, HashSet};

fn rows(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn entry_set(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

#[tokio::test]
async fn test_set_and_get_scalar() {
    let provider = InMemoryCacheProvider::new();

    provider.set_json("key1", "\"value1\"").await.unwrap();

    assert_eq!(
        provider.get_json("key1").await.unwrap().as_deref(),
        Some("\"value1\"")
    );
    assert!(provider.exists("key1").await.unwrap());
}

#[tokio::test]
async fn test_set_overwrites_existing_value() {
    let provider = InMemoryCacheProvider::new();

    provider.set_json("key", "1").await.unwrap();
    provider.set_json("key", "2").await.unwrap();

    assert_eq!(provider.get_json("key").await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn test_set_replaces_collection() {
    let provider = InMemoryCacheProvider::new();

    provider.set_row_json("key", "e", "1").await.unwrap();
    provider.set_json("key", "\"scalar\"").await.unwrap();

    assert_eq!(
        provider.value("key"),
        Some(CacheValue::Scalar("\"scalar\"".to_string()))
    );
    assert_eq!(provider.get_length("key").await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_absent_key_is_none() {
    let provider = InMemoryCacheProvider::new();
    assert_eq!(provider.get_json("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_reports_removal() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("key2", "\"value2\"").await.unwrap();

    assert!(provider.delete("key2").await.unwrap());
    assert_eq!(provider.get_json("key2").await.unwrap(), None);
    assert!(!provider.delete("key2").await.unwrap());
}

#[tokio::test]
async fn test_delete_all_removes_prefix_only() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("user:1", "\"a\"").await.unwrap();
    provider.set_json("user:2", "\"b\"").await.unwrap();
    provider.set_json("session:1", "\"c\"").await.unwrap();

    let removed = provider.delete_all("user:").await.unwrap();

    assert_eq!(removed, 2);
    assert!(provider.get_keys("user:").await.unwrap().is_empty());
    assert_eq!(
        provider.get_json("session:1").await.unwrap().as_deref(),
        Some("\"c\"")
    );
}

#[tokio::test]
async fn test_get_keys_matches_prefix() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("abc:test", "\"1\"").await.unwrap();
    provider.set_json("abc:dev", "\"2\"").await.unwrap();
    provider.set_json("xyz:prod", "\"3\"").await.unwrap();
    provider.set_json("ab", "\"4\"").await.unwrap();

    let keys = provider.get_keys("abc:").await.unwrap();

    assert_eq!(keys, vec!["abc:dev".to_string(), "abc:test".to_string()]);
}

#[tokio::test]
async fn test_get_keys_is_case_sensitive() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("User:1", "1").await.unwrap();

    assert!(provider.get_keys("user:").await.unwrap().is_empty());
    assert_eq!(provider.get_keys("").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_set_row_and_read_row() {
    let provider = InMemoryCacheProvider::new();

    assert!(
        provider
            .set_row_json("collection1", "entry1", "123")
            .await
            .unwrap()
    );

    assert_eq!(
        provider
            .read_row_json("collection1", "entry1")
            .await
            .unwrap()
            .as_deref(),
        Some("123")
    );
    assert_eq!(
        provider.read_row_json("collection1", "other").await.unwrap(),
        None
    );
    assert_eq!(provider.read_row_json("nope", "entry1").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_row_merges_into_collection() {
    let provider = InMemoryCacheProvider::new();

    provider.set_row_json("c", "a", "1").await.unwrap();
    provider.set_row_json("c", "b", "2").await.unwrap();
    provider.set_row_json("c", "a", "3").await.unwrap();

    assert_eq!(provider.get_length("c").await.unwrap(), 2);
    assert_eq!(
        provider.read_all_rows_json("c").await.unwrap(),
        vec!["3".to_string(), "2".to_string()]
    );
}

#[tokio::test]
async fn test_set_rows_stores_multiple_entries() {
    let provider = InMemoryCacheProvider::new();

    provider
        .set_rows_json("collection2", &rows(&[("e1", "\"v1\""), ("e2", "\"v2\"")]))
        .await
        .unwrap();

    assert_eq!(
        provider.read_all_rows_json("collection2").await.unwrap(),
        vec!["\"v1\"".to_string(), "\"v2\"".to_string()]
    );
}

#[tokio::test]
async fn test_set_rows_merges_with_existing_rows() {
    let provider = InMemoryCacheProvider::new();
    provider.set_row_json("c", "keep", "0").await.unwrap();

    provider
        .set_rows_json("c", &rows(&[("a", "1"), ("b", "2")]))
        .await
        .unwrap();

    assert_eq!(provider.get_length("c").await.unwrap(), 3);
    assert!(provider.exists_row("c", "keep").await.unwrap());
}

#[tokio::test]
async fn test_set_rows_with_no_entries_creates_nothing() {
    let provider = InMemoryCacheProvider::new();

    provider.set_rows_json("c", &HashMap::new()).await.unwrap();

    assert!(!provider.exists("c").await.unwrap());
    assert!(provider.is_empty());
}

#[tokio::test]
async fn test_delete_row_removes_entry() {
    let provider = InMemoryCacheProvider::new();
    provider.set_row_json("c", "a", "1").await.unwrap();
    provider.set_row_json("c", "b", "2").await.unwrap();

    assert!(provider.delete_row("c", "a").await.unwrap());
    assert!(!provider.delete_row("c", "a").await.unwrap());
    assert_eq!(provider.read_row_json("c", "a").await.unwrap(), None);
    assert_eq!(provider.get_length("c").await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_last_row_removes_collection() {
    let provider = InMemoryCacheProvider::new();
    provider
        .set_row_json("collection3", "entry3", "\"toDelete\"")
        .await
        .unwrap();

    assert!(provider.delete_row("collection3", "entry3").await.unwrap());

    assert_eq!(provider.get_length("collection3").await.unwrap(), 0);
    assert!(!provider.exists("collection3").await.unwrap());
    assert!(provider.get_keys("collection").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_rows_counts_removed_entries() {
    let provider = InMemoryCacheProvider::new();
    provider
        .set_rows_json("collection4", &rows(&[("a", "1"), ("b", "2"), ("c", "3")]))
        .await
        .unwrap();

    let removed = provider
        .delete_rows("collection4", &entry_set(&["a", "c", "zz"]))
        .await
        .unwrap();

    assert_eq!(removed, 2);
    assert_eq!(
        provider.read_all_rows_json("collection4").await.unwrap(),
        vec!["2".to_string()]
    );
}

#[tokio::test]
async fn test_delete_rows_cleans_up_empty_collection() {
    let provider = InMemoryCacheProvider::new();
    provider
        .set_rows_json("c", &rows(&[("a", "1"), ("b", "2")]))
        .await
        .unwrap();

    let removed = provider
        .delete_rows("c", &entry_set(&["a", "b"]))
        .await
        .unwrap();

    assert_eq!(removed, 2);
    assert!(!provider.exists("c").await.unwrap());
    assert_eq!(
        provider.delete_rows("c", &entry_set(&["a"])).await.unwrap(),
        0
    );
}

#[tokio::test]
async fn test_delete_row_set_is_not_implemented() {
    let provider = InMemoryCacheProvider::new();
    provider.set_row_json("c", "a", "1").await.unwrap();

    let error = provider
        .delete_row_set("c", &entry_set(&["a"]))
        .await
        .unwrap_err();

    assert!(error.is_not_implemented());
    // Nothing was emulated
    assert!(provider.exists_row("c", "a").await.unwrap());
}

#[tokio::test]
async fn test_read_rows_by_keys_skips_missing() {
    let provider = InMemoryCacheProvider::new();
    provider
        .set_rows_json("collection5", &rows(&[("a", "\"v1\""), ("b", "\"v2\"")]))
        .await
        .unwrap();

    let selected = provider
        .read_rows_json("collection5", &["b".to_string()])
        .await
        .unwrap();
    assert_eq!(selected, vec!["\"v2\"".to_string()]);

    let with_missing = provider
        .read_rows_json(
            "collection5",
            &["missing".to_string(), "b".to_string(), "a".to_string()],
        )
        .await
        .unwrap();
    assert_eq!(with_missing, vec!["\"v2\"".to_string(), "\"v1\"".to_string()]);

    let absent = provider
        .read_rows_json("Pays", &["00000000-0000-0000-0000-000000000000".to_string()])
        .await
        .unwrap();
    assert!(absent.is_empty());
}

#[tokio::test]
async fn test_get_length_by_value_shape() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("scalar", "\"x\"").await.unwrap();
    provider
        .set_rows_json("collection6", &rows(&[("a", "\"v1\""), ("b", "\"v2\"")]))
        .await
        .unwrap();

    assert_eq!(provider.get_length("absent").await.unwrap(), 0);
    assert_eq!(provider.get_length("scalar").await.unwrap(), 1);
    assert_eq!(provider.get_length("collection6").await.unwrap(), 2);
}

#[tokio::test]
async fn test_exists_row_checks_entry_key() {
    let provider = InMemoryCacheProvider::new();
    provider
        .set_row_json("collection7", "rowKey", "\"yes\"")
        .await
        .unwrap();

    assert!(provider.exists_row("collection7", "rowKey").await.unwrap());
    assert!(!provider.exists_row("collection7", "otherKey").await.unwrap());
    assert!(!provider.exists_row("missing", "rowKey").await.unwrap());
}

#[tokio::test]
async fn test_collection_operations_on_scalar_fail() {
    let provider = InMemoryCacheProvider::new();
    provider.set_json("scalar", "1").await.unwrap();

    let error = provider.set_row_json("scalar", "e", "1").await.unwrap_err();
    assert!(matches!(error, Error::WrongType { ref key } if key == "scalar"));
    assert!(matches!(
        provider.read_row_json("scalar", "e").await,
        Err(Error::WrongType { .. })
    ));
    assert!(matches!(
        provider.delete_row("scalar", "e").await,
        Err(Error::WrongType { .. })
    ));
    // The scalar is untouched
    assert_eq!(provider.get_json("scalar").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn test_get_on_collection_is_none() {
    let provider = InMemoryCacheProvider::new();
    provider.set_row_json("c", "e", "1").await.unwrap();

    assert_eq!(provider.get_json("c").await.unwrap(), None);
    assert!(provider.exists("c").await.unwrap());
}

#[tokio::test]
async fn test_ping_is_strictly_positive() {
    let provider = InMemoryCacheProvider::new();
    let latency = provider.ping().await.unwrap();
    assert!(latency.as_nanos() > 0);
}

#[tokio::test]
async fn test_instances_do_not_share_state() {
    let first = InMemoryCacheProvider::new();
    let second = InMemoryCacheProvider::new();

    first.set_json("key", "1").await.unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(first.provider_name(), "memory");
}
