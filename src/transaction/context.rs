//! Transaction context
//!
//! Depth-counted scope guard over a reentrant mutex.

use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use tracing::trace;

use crate::error::{ColumnKvError, Result};
use crate::store::{Cursor, OrderedStore};

/// Scope bookkeeping, only touched by the thread holding the scope lock
#[derive(Debug, Default)]
struct ScopeState {
    depth: usize,
}

/// Hands out the transaction scope for one store
///
/// ## Concurrency
/// - `scope`: reentrant mutex; the owning thread may re-enter, other
///   threads wait until the outermost scope commits
/// - `commits`: atomic counter, readable from anywhere
pub struct TransactionContext {
    store: Arc<OrderedStore>,
    scope: ReentrantMutex<RefCell<ScopeState>>,
    commits: AtomicU64,
}

impl TransactionContext {
    /// Create a context over `store`
    pub fn new(store: Arc<OrderedStore>) -> Self {
        Self {
            store,
            scope: ReentrantMutex::new(RefCell::new(ScopeState::default())),
            commits: AtomicU64::new(0),
        }
    }

    /// Run `body` inside a transaction
    ///
    /// Opens a transaction if the calling thread has none, otherwise joins
    /// the active one. The transaction commits when the outermost call
    /// returns, whether `body` returns normally, bails out early or panics.
    pub fn run_in_transaction<R>(&self, body: impl FnOnce(&Transaction<'_>) -> R) -> R {
        let lock = self.scope.lock();
        let depth = {
            let mut state = lock.borrow_mut();
            state.depth += 1;
            state.depth
        };
        if depth == 1 {
            trace!("transaction opened");
        }

        let _scope = ScopeGuard {
            context: self,
            lock: &lock,
        };

        body(&Transaction { store: &self.store })
    }

    /// Run `body` inside the calling thread's active transaction
    ///
    /// Fails with `NoActiveTransaction` when called outside
    /// `run_in_transaction`. Joining adds no commit of its own.
    ///
    /// The handle is only lent to `body`, so it cannot outlive the scope:
    ///
    /// ```compile_fail
    /// use std::sync::Arc;
    /// use columnkv::store::OrderedStore;
    /// use columnkv::transaction::TransactionContext;
    ///
    /// let context = TransactionContext::new(Arc::new(OrderedStore::new()));
    /// let escaped = context.run_in_transaction(|_| {
    ///     context.current_transaction(|txn| *txn).unwrap()
    /// });
    /// escaped.put(b"outside".to_vec(), b"value".to_vec());
    /// ```
    pub fn current_transaction<R>(&self, body: impl FnOnce(&Transaction<'_>) -> R) -> Result<R> {
        if !self.is_active() {
            return Err(ColumnKvError::NoActiveTransaction);
        }
        Ok(self.run_in_transaction(body))
    }

    /// Check whether the calling thread is inside a transaction
    pub fn is_active(&self) -> bool {
        self.depth() > 0
    }

    /// Nesting depth of the calling thread's transaction (0 when inactive)
    pub fn depth(&self) -> usize {
        // Another thread holding the lock means this thread has no scope.
        match self.scope.try_lock() {
            Some(lock) => lock.borrow().depth,
            None => 0,
        }
    }

    /// Number of transactions committed so far
    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::Acquire)
    }

    fn commit(&self) {
        let sequence = self.commits.fetch_add(1, Ordering::AcqRel) + 1;
        trace!(sequence, "transaction committed");
    }
}

/// Leaves one level of scope when dropped
struct ScopeGuard<'a, 'g> {
    context: &'a TransactionContext,
    lock: &'g ReentrantMutexGuard<'a, RefCell<ScopeState>>,
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        let depth = {
            let mut state = self.lock.borrow_mut();
            state.depth -= 1;
            state.depth
        };
        if depth == 0 {
            self.context.commit();
        }
    }
}

/// Handle to the active transaction
///
/// Writes go straight to the store and are visible at once.
#[derive(Clone, Copy)]
pub struct Transaction<'a> {
    store: &'a Arc<OrderedStore>,
}

impl Transaction<'_> {
    /// Get the value stored under a composite key
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.store.get(key)
    }

    /// Check whether a composite key is present
    pub fn contains(&self, key: &[u8]) -> bool {
        self.store.contains(key)
    }

    /// Put a value under a composite key
    pub fn put(&self, key: Vec<u8>, value: impl Into<Bytes>) {
        self.store.put(key, value);
    }

    /// Delete a composite key, returning whether it was present
    pub fn delete(&self, key: &[u8]) -> bool {
        self.store.delete(key)
    }

    /// Scan upward from the first key >= `from`
    pub fn seek(&self, from: &[u8]) -> Cursor {
        self.store.seek(from)
    }
}
