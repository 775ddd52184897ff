//! Ordered store implementation
//!
//! BTreeMap-based byte map with RwLock for shared access.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use super::Cursor;

/// Sorted byte-sequence to byte-sequence map
#[derive(Debug, Default)]
pub struct OrderedStore {
    /// Entries keyed by composite key, ordered byte-wise
    data: RwLock<BTreeMap<Vec<u8>, Bytes>>,
}

impl OrderedStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored under `key`
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.data.read().get(key).cloned()
    }

    /// Check whether `key` is present
    pub fn contains(&self, key: &[u8]) -> bool {
        self.data.read().contains_key(key)
    }

    /// Put a key-value pair, replacing any previous value
    pub fn put(&self, key: Vec<u8>, value: impl Into<Bytes>) {
        self.data.write().insert(key, value.into());
    }

    /// Remove `key`, returning whether it was present
    pub fn delete(&self, key: &[u8]) -> bool {
        self.data.write().remove(key).is_some()
    }

    /// Number of entries across all column families
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if the store holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.data.write().clear();
    }

    /// Position a cursor at the first entry whose key is >= `from`
    pub fn seek(self: &Arc<Self>, from: &[u8]) -> Cursor {
        Cursor::new(Arc::clone(self), from.to_vec())
    }

    /// First entry whose key is >= `from` (inclusive) or > `from` (exclusive)
    pub(super) fn next_entry(&self, from: &[u8], inclusive: bool) -> Option<(Vec<u8>, Bytes)> {
        use std::ops::Bound;

        let lower = if inclusive {
            Bound::Included(from)
        } else {
            Bound::Excluded(from)
        };

        self.data
            .read()
            .range::<[u8], _>((lower, Bound::Unbounded))
            .next()
            .map(|(key, value)| (key.clone(), value.clone()))
    }
}
