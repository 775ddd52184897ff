//! Column family view
//!
//! Typed façade over one namespace of the store.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bytes::Bytes;
use tracing::trace;

use crate::codec::{Decode, Encode, NullKey};
use crate::config::PrefixScan;
use crate::error::{ColumnKvError, Result};
use crate::transaction::TransactionContext;

use super::iteration::IterationContext;
use super::key::{composite_key, strip_ordinal, ColumnFamilyId};
use super::Visit;

/// One namespace of the store, with typed keys and values
///
/// Every operation runs inside the transaction scope of the owning
/// database; calls made from inside `run_in_transaction` join that
/// transaction.
///
/// Decoded keys and values are fresh owned values, one per entry, so a
/// visitor may keep them after it returns.
///
/// Visitors may read any column family and write to other column families.
/// Writing to the column family being scanned from inside its own visitor is
/// not part of the contract.
pub struct ColumnFamily<K, V> {
    id: ColumnFamilyId,
    name: &'static str,
    context: Arc<TransactionContext>,
    iteration: IterationContext,
    prefix_scan: PrefixScan,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> ColumnFamily<K, V> {
    pub(crate) fn new(
        id: ColumnFamilyId,
        name: &'static str,
        context: Arc<TransactionContext>,
        prefix_scan: PrefixScan,
        prefix_buffer_capacity: usize,
    ) -> Self {
        Self {
            id,
            name,
            context,
            iteration: IterationContext::new(id, prefix_buffer_capacity),
            prefix_scan,
            _types: PhantomData,
        }
    }

    /// Ordinal of this column family
    pub fn id(&self) -> ColumnFamilyId {
        self.id
    }

    /// Name of this column family
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn not_found(&self) -> ColumnKvError {
        ColumnKvError::KeyNotFound {
            column_family: self.name.to_string(),
        }
    }

    fn already_exists(&self) -> ColumnKvError {
        ColumnKvError::KeyAlreadyExists {
            column_family: self.name.to_string(),
        }
    }
}

impl<K, V> ColumnFamily<K, V>
where
    K: Encode + Decode,
    V: Encode + Decode,
{
    // =========================================================================
    // Point Operations
    // =========================================================================

    /// Put a key-value pair, overwriting any previous value
    pub fn put(&self, key: &K, value: &V) {
        let composite = composite_key(self.id, key);
        let value = Bytes::from(value.to_bytes());
        self.context.run_in_transaction(|txn| txn.put(composite, value));
        trace!(column_family = self.name, "put");
    }

    /// Same as [`put`](Self::put)
    pub fn upsert(&self, key: &K, value: &V) {
        self.put(key, value);
    }

    /// Put a key-value pair that must not exist yet
    pub fn insert(&self, key: &K, value: &V) -> Result<()> {
        let composite = composite_key(self.id, key);
        self.context.run_in_transaction(|txn| {
            if txn.contains(&composite) {
                return Err(self.already_exists());
            }
            txn.put(composite, value.to_bytes());
            Ok(())
        })
    }

    /// Replace the value of a key that must already exist
    pub fn update(&self, key: &K, value: &V) -> Result<()> {
        let composite = composite_key(self.id, key);
        self.context.run_in_transaction(|txn| {
            if !txn.contains(&composite) {
                return Err(self.not_found());
            }
            txn.put(composite, value.to_bytes());
            Ok(())
        })
    }

    /// Get the value for a key, or `None` when absent
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        let composite = composite_key(self.id, key);
        let value = self.context.run_in_transaction(|txn| txn.get(&composite));
        value.map(|bytes| V::decode(&bytes)).transpose()
    }

    /// Check whether a key is present
    pub fn exists(&self, key: &K) -> bool {
        let composite = composite_key(self.id, key);
        self.context.run_in_transaction(|txn| txn.contains(&composite))
    }

    /// Delete a key; absent keys are ignored
    pub fn delete(&self, key: &K) {
        self.delete_if_exists(key);
    }

    /// Delete a key, returning whether it was present
    pub fn delete_if_exists(&self, key: &K) -> bool {
        let composite = composite_key(self.id, key);
        let removed = self.context.run_in_transaction(|txn| txn.delete(&composite));
        trace!(column_family = self.name, removed, "delete");
        removed
    }

    /// Delete a key that must exist
    pub fn delete_existing(&self, key: &K) -> Result<()> {
        if self.delete_if_exists(key) {
            Ok(())
        } else {
            Err(self.not_found())
        }
    }

    // =========================================================================
    // Scans
    // =========================================================================

    /// Check whether this column family has no entries
    pub fn is_empty(&self) -> bool {
        let mut empty = true;
        self.walk_raw(&NullKey, None, |_, _| {
            empty = false;
            Visit::Stop
        });
        empty
    }

    /// Number of entries in this column family
    pub fn count(&self) -> usize {
        self.count_equal_prefix(&NullKey)
    }

    /// Number of entries whose key starts with `prefix`
    pub fn count_equal_prefix<P: Encode + ?Sized>(&self, prefix: &P) -> usize {
        let mut count = 0;
        self.walk_raw(prefix, None, |_, _| {
            count += 1;
            Visit::Continue
        });
        count
    }

    /// Visit every entry in ascending key order
    pub fn for_each(&self, mut consumer: impl FnMut(K, V)) -> Result<()> {
        self.while_equal_prefix(&NullKey, |key, value| {
            consumer(key, value);
            Visit::Continue
        })
    }

    /// Visit every value in ascending key order
    pub fn for_each_value(&self, mut consumer: impl FnMut(V)) -> Result<()> {
        self.for_each(|_, value| consumer(value))
    }

    /// Visit entries from the start until the visitor says stop
    pub fn while_true<R>(&self, visitor: impl FnMut(K, V) -> R) -> Result<()>
    where
        R: Into<Visit>,
    {
        self.scan(&NullKey, None, visitor)
    }

    /// Visit entries from the first key >= `start` until the visitor says stop
    pub fn while_true_from<R>(&self, start: &K, visitor: impl FnMut(K, V) -> R) -> Result<()>
    where
        R: Into<Visit>,
    {
        self.scan(&NullKey, Some(start), visitor)
    }

    /// Visit entries whose key starts with `prefix` until the visitor says stop
    pub fn while_equal_prefix<P, R>(&self, prefix: &P, visitor: impl FnMut(K, V) -> R) -> Result<()>
    where
        P: Encode + ?Sized,
        R: Into<Visit>,
    {
        self.scan(prefix, None, visitor)
    }

    /// Like [`while_equal_prefix`](Self::while_equal_prefix), starting at the
    /// first key >= `start`
    pub fn while_equal_prefix_from<P, R>(
        &self,
        prefix: &P,
        start: &K,
        visitor: impl FnMut(K, V) -> R,
    ) -> Result<()>
    where
        P: Encode + ?Sized,
        R: Into<Visit>,
    {
        self.scan(prefix, Some(start), visitor)
    }

    /// Visit every entry whose key starts with `prefix`
    pub fn for_each_with_prefix<P>(&self, prefix: &P, mut consumer: impl FnMut(K, V)) -> Result<()>
    where
        P: Encode + ?Sized,
    {
        self.scan(prefix, None, |key, value| {
            consumer(key, value);
            Visit::Continue
        })
    }

    fn scan<P, R>(
        &self,
        prefix: &P,
        start: Option<&K>,
        mut visitor: impl FnMut(K, V) -> R,
    ) -> Result<()>
    where
        P: Encode + ?Sized,
        R: Into<Visit>,
    {
        let mut failure = None;
        self.walk_raw(prefix, start, |key, value| {
            let decoded = strip_ordinal(key)
                .and_then(K::decode)
                .and_then(|key| Ok((key, V::decode(&value)?)));
            match decoded {
                Ok((key, value)) => visitor(key, value).into(),
                Err(e) => {
                    failure = Some(e);
                    Visit::Stop
                }
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Walk composite keys carrying `ordinal ++ prefix` in ascending order
    ///
    /// The visitor sees the full composite key and the raw value. Nothing is
    /// decoded here, so the walk itself cannot fail.
    fn walk_raw<P>(
        &self,
        prefix: &P,
        start: Option<&K>,
        mut visitor: impl FnMut(&[u8], Bytes) -> Visit,
    ) where
        P: Encode + ?Sized,
    {
        let start = start.map(|key| composite_key(self.id, key));

        self.iteration.with_prefix_key(prefix, |prefix| {
            let seek_from = match start.as_deref() {
                Some(start) if start > prefix => start,
                _ => prefix,
            };

            self.context.run_in_transaction(|txn| {
                for (key, value) in txn.seek(seek_from) {
                    if !key.starts_with(prefix) {
                        match self.prefix_scan {
                            PrefixScan::Bounded => break,
                            PrefixScan::Exhaustive => continue,
                        }
                    }

                    if !visitor(&key, value).is_continue() {
                        break;
                    }
                }
            })
        })
    }
}

impl<K, V> fmt::Debug for ColumnFamily<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnFamily")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("prefix_scan", &self.prefix_scan)
            .finish()
    }
}
