//! Mapping store tests
//!
//! Covers the core store contract: unique code insertion, click counting,
//! TTL expiry, sweeping, and concurrent access.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use linklet::errors::LinkletError;
use linklet::store::{CODE_LENGTH, MappingStore};

#[test]
fn test_insert_returns_fresh_record() {
    let store = MappingStore::new();
    let link = store.insert("https://example.com", None).unwrap();

    assert_eq!(link.code.len(), CODE_LENGTH);
    assert!(link.code.bytes().all(|b| b.is_ascii_alphanumeric()));
    assert_eq!(link.target_url, "https://example.com");
    assert_eq!(link.click_count, 0);
    assert!(link.expires_at.is_none());
}

#[test]
fn test_insert_with_ttl_sets_expiry() {
    let store = MappingStore::new();
    let link = store
        .insert("https://example.com", Some(Duration::hours(2)))
        .unwrap();

    let expires_at = link.expires_at.expect("expiry should be set");
    assert_eq!(expires_at, link.created_at + Duration::hours(2));
}

#[test]
fn test_insert_codes_are_unique() {
    let store = MappingStore::new();
    let mut codes = HashSet::new();

    for _ in 0..100 {
        let link = store.insert("https://example.com", None).unwrap();
        assert!(codes.insert(link.code), "duplicate code generated");
    }

    assert_eq!(store.list().len(), 100);
}

#[test]
fn test_resolve_increments_clicks() {
    let store = MappingStore::new();
    let link = store.insert("https://example.com", None).unwrap();

    for _ in 0..3 {
        let target = store.resolve(&link.code).unwrap();
        assert_eq!(target, "https://example.com");
    }

    let stats = store.stats(&link.code).unwrap();
    assert_eq!(stats.click_count, 3);
}

#[test]
fn test_resolve_unknown_code() {
    let store = MappingStore::new();

    assert!(matches!(
        store.resolve("zzzzzz"),
        Err(LinkletError::NotFound(_))
    ));
}

#[test]
fn test_stats_snapshot() {
    let store = MappingStore::new();
    let link = store
        .insert("https://example.com", Some(Duration::hours(1)))
        .unwrap();
    store.resolve(&link.code).unwrap();

    let stats = store.stats(&link.code).unwrap();
    assert_eq!(stats.code, link.code);
    assert_eq!(stats.target_url, "https://example.com");
    assert_eq!(stats.click_count, 1);
    assert_eq!(stats.created_at, link.created_at);
    assert_eq!(stats.expires_at, link.expires_at);
    assert!(stats.is_active);

    assert!(matches!(
        store.stats("zzzzzz"),
        Err(LinkletError::NotFound(_))
    ));
}

#[test]
fn test_zero_ttl_is_immediately_expired() {
    let store = MappingStore::new();
    let link = store
        .insert("https://example.com", Some(Duration::zero()))
        .unwrap();

    assert!(matches!(
        store.resolve(&link.code),
        Err(LinkletError::NotFound(_))
    ));
    assert!(matches!(
        store.stats(&link.code),
        Err(LinkletError::NotFound(_))
    ));
}

#[test]
fn test_negative_ttl_is_immediately_expired() {
    let store = MappingStore::new();
    let link = store
        .insert("https://example.com", Some(Duration::hours(-1)))
        .unwrap();

    assert!(matches!(
        store.resolve(&link.code),
        Err(LinkletError::NotFound(_))
    ));
}

#[test]
fn test_extreme_ttls_saturate() {
    let store = MappingStore::new();

    let link = store
        .insert("https://example.com", Some(Duration::MIN))
        .unwrap();
    assert!(matches!(
        store.resolve(&link.code),
        Err(LinkletError::NotFound(_))
    ));

    let link = store
        .insert("https://example.com", Some(Duration::MAX))
        .unwrap();
    assert_eq!(link.expires_at, Some(chrono::DateTime::<Utc>::MAX_UTC));
    assert!(store.resolve(&link.code).is_ok());
}

#[test]
fn test_record_expires_after_ttl() {
    let store = MappingStore::new();
    let link = store
        .insert("https://temp.com", Some(Duration::milliseconds(50)))
        .unwrap();

    // Resolvable before the deadline
    assert!(store.resolve(&link.code).is_ok());

    thread::sleep(StdDuration::from_millis(100));

    assert!(matches!(
        store.resolve(&link.code),
        Err(LinkletError::NotFound(_))
    ));
    assert!(matches!(
        store.stats(&link.code),
        Err(LinkletError::NotFound(_))
    ));
}

#[test]
fn test_sweep_removes_expired_records() {
    let store = MappingStore::new();
    store
        .insert("https://a.com", Some(Duration::milliseconds(50)))
        .unwrap();
    store
        .insert("https://b.com", Some(Duration::milliseconds(50)))
        .unwrap();
    store.insert("https://c.com", None).unwrap();

    thread::sleep(StdDuration::from_millis(100));

    let removed = store.sweep(Utc::now());
    assert_eq!(removed, 2);
    assert_eq!(store.list().len(), 1);

    // Nothing left to remove
    assert_eq!(store.sweep(Utc::now()), 0);
}

#[test]
fn test_list_snapshot_matches_clicks() {
    let store = MappingStore::new();
    let first = store.insert("https://a.com", None).unwrap();
    let second = store.insert("https://b.com", None).unwrap();

    store.resolve(&first.code).unwrap();
    store.resolve(&first.code).unwrap();
    store.resolve(&second.code).unwrap();

    let entries = store.list();
    assert_eq!(entries.len(), 2);

    let clicks_for = |code: &str| {
        entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.click_count)
            .unwrap()
    };
    assert_eq!(clicks_for(&first.code), 2);
    assert_eq!(clicks_for(&second.code), 1);
}

#[test]
fn test_summary_totals() {
    let store = MappingStore::new();
    let first = store.insert("https://a.com", None).unwrap();
    store.insert("https://b.com", None).unwrap();

    store.resolve(&first.code).unwrap();
    store.resolve(&first.code).unwrap();

    let summary = store.summary();
    assert_eq!(summary.active_urls, 2);
    assert_eq!(summary.total_clicks, 2);
}

#[test]
fn test_concurrent_resolves_lose_no_clicks() {
    let store = Arc::new(MappingStore::new());
    let link = store.insert("https://concurrent.example", None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let code = link.code.clone();
            thread::spawn(move || {
                for _ in 0..25 {
                    store.resolve(&code).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = store.stats(&link.code).unwrap();
    assert_eq!(stats.click_count, 200);
}

#[test]
fn test_concurrent_inserts_stay_unique() {
    let store = Arc::new(MappingStore::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut codes = Vec::new();
                for _ in 0..50 {
                    codes.push(store.insert("https://example.com", None).unwrap().code);
                }
                codes
            })
        })
        .collect();

    let mut all_codes = HashSet::new();
    for handle in handles {
        for code in handle.join().unwrap() {
            assert!(all_codes.insert(code), "duplicate code across threads");
        }
    }

    assert_eq!(store.summary().active_urls, 200);
}
