//! OrderedStore Tests
//!
//! Tests verify:
//! - Point put/get/delete
//! - Byte-wise ordering of scans
//! - Seek positioning
//! - Cursor behaviour around concurrent mutation

use std::sync::Arc;

use bytes::Bytes;
use columnkv::store::OrderedStore;

fn keys(store: &Arc<OrderedStore>, from: &[u8]) -> Vec<Vec<u8>> {
    store.seek(from).map(|(key, _)| key).collect()
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = OrderedStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn test_put_and_get() {
    let store = OrderedStore::new();
    store.put(b"key1".to_vec(), b"value1".to_vec());

    assert_eq!(store.get(b"key1"), Some(Bytes::from_static(b"value1")));
    assert!(store.contains(b"key1"));
}

#[test]
fn test_get_nonexistent_key() {
    let store = OrderedStore::new();
    assert_eq!(store.get(b"missing"), None);
    assert!(!store.contains(b"missing"));
}

#[test]
fn test_put_overwrites_existing() {
    let store = OrderedStore::new();
    store.put(b"key1".to_vec(), b"value1".to_vec());
    store.put(b"key1".to_vec(), b"value2".to_vec());

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(b"key1"), Some(Bytes::from_static(b"value2")));
}

#[test]
fn test_delete_removes_entry() {
    let store = OrderedStore::new();
    store.put(b"key1".to_vec(), b"value1".to_vec());

    assert!(store.delete(b"key1"));
    assert_eq!(store.get(b"key1"), None);
    assert_eq!(store.len(), 0);
}

#[test]
fn test_delete_nonexistent_key() {
    let store = OrderedStore::new();
    assert!(!store.delete(b"missing"));
    assert!(store.is_empty());
}

#[test]
fn test_clear() {
    let store = OrderedStore::new();
    for i in 0..10u8 {
        store.put(vec![i], vec![i]);
    }
    store.clear();
    assert!(store.is_empty());
}

// =============================================================================
// Seek / Cursor Tests
// =============================================================================

#[test]
fn test_seek_returns_sorted_entries() {
    let store = Arc::new(OrderedStore::new());
    store.put(b"c".to_vec(), b"3".to_vec());
    store.put(b"a".to_vec(), b"1".to_vec());
    store.put(b"b".to_vec(), b"2".to_vec());

    assert_eq!(keys(&store, b""), vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
}

#[test]
fn test_seek_is_bytewise_not_numeric() {
    let store = Arc::new(OrderedStore::new());
    store.put(vec![0x10], Vec::new());
    store.put(vec![0x02, 0xff], Vec::new());
    store.put(vec![0x02], Vec::new());

    assert_eq!(keys(&store, b""), vec![vec![0x02], vec![0x02, 0xff], vec![0x10]]);
}

#[test]
fn test_seek_positions_at_first_key_not_less() {
    let store = Arc::new(OrderedStore::new());
    store.put(b"apple".to_vec(), Vec::new());
    store.put(b"banana".to_vec(), Vec::new());
    store.put(b"cherry".to_vec(), Vec::new());

    assert_eq!(keys(&store, b"b"), vec![b"banana".to_vec(), b"cherry".to_vec()]);
    assert_eq!(keys(&store, b"banana"), vec![b"banana".to_vec(), b"cherry".to_vec()]);
    assert!(keys(&store, b"d").is_empty());
}

#[test]
fn test_cursor_is_finite() {
    let store = Arc::new(OrderedStore::new());
    store.put(b"only".to_vec(), Vec::new());

    let mut cursor = store.seek(b"");
    assert!(cursor.next().is_some());
    assert!(cursor.next().is_none());
    assert!(cursor.next().is_none());
}

#[test]
fn test_cursor_holds_no_lock_between_steps() {
    let store = Arc::new(OrderedStore::new());
    store.put(b"a".to_vec(), Vec::new());
    store.put(b"c".to_vec(), Vec::new());

    let mut cursor = store.seek(b"");
    let (first, _) = cursor.next().unwrap();
    assert_eq!(first, b"a".to_vec());

    // Writes between steps must not block; keys ahead of the cursor show up.
    store.put(b"b".to_vec(), Vec::new());
    store.delete(b"c");

    let rest: Vec<Vec<u8>> = cursor.map(|(key, _)| key).collect();
    assert_eq!(rest, vec![b"b".to_vec()]);
}

#[test]
fn test_many_entries_sorted() {
    let store = Arc::new(OrderedStore::new());
    for i in (0..1000u32).rev() {
        store.put(i.to_be_bytes().to_vec(), Vec::new());
    }

    let all = keys(&store, b"");
    assert_eq!(all.len(), 1000);
    for pair in all.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}
