//! Store Cursor
//!
//! Lazy ascending iteration over the store from a seek position.

use std::sync::Arc;

use bytes::Bytes;

use super::OrderedStore;

/// Iterator over store entries in ascending key order
///
/// Each step takes the read lock only for one lookup and hands out owned
/// entries, so no lock is held between steps. A cursor is finite and not
/// resumable: start a new scan with [`OrderedStore::seek`].
pub struct Cursor {
    store: Arc<OrderedStore>,
    /// Key to resume after (or at, before the first step)
    position: Vec<u8>,
    /// True until the first entry has been produced
    inclusive: bool,
    exhausted: bool,
}

impl Cursor {
    pub(super) fn new(store: Arc<OrderedStore>, from: Vec<u8>) -> Self {
        Self {
            store,
            position: from,
            inclusive: true,
            exhausted: false,
        }
    }
}

impl Iterator for Cursor {
    /// (composite key, value)
    type Item = (Vec<u8>, Bytes);

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.store.next_entry(&self.position, self.inclusive) {
            Some((key, value)) => {
                self.position.clear();
                self.position.extend_from_slice(&key);
                self.inclusive = false;
                Some((key, value))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}
