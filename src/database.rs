//! Database Module
//!
//! The instance that owns the ordered store and its transaction scope.
//!
//! ## Responsibilities
//! - Create the store at open, clear it at teardown
//! - Hand out typed column family views sharing that store
//! - Expose the transaction scope so callers can group operations
//!
//! Nothing is written to disk; dropping the database drops every entry.

use std::sync::Arc;

use tracing::{debug, info};

use crate::column_family::{ColumnFamily, ColumnFamilyName};
use crate::config::Config;
use crate::error::Result;
use crate::store::OrderedStore;
use crate::transaction::{Transaction, TransactionContext};

/// An in-memory column family database
///
/// ## Concurrency Model
/// Built for a single worker driving every operation in program order.
/// The store sits behind an RwLock and the transaction scope behind a
/// reentrant mutex, so sharing a database across threads is memory-safe,
/// but transactions from different threads serialize rather than
/// interleave.
pub struct Database {
    /// Database configuration
    config: Config,

    /// The single ordered map shared by every column family
    store: Arc<OrderedStore>,

    /// Transaction scope over `store`
    context: Arc<TransactionContext>,
}

impl Database {
    /// Open an empty database with the given config
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Open an empty database with the default config
    pub fn in_memory() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let store = Arc::new(OrderedStore::new());
        let context = Arc::new(TransactionContext::new(Arc::clone(&store)));

        debug!(
            name = %config.name,
            prefix_scan = ?config.prefix_scan,
            "database opened"
        );

        Self {
            config,
            store,
            context,
        }
    }

    /// Create a typed view over one column family
    ///
    /// Views are cheap; several views over the same column family see the
    /// same entries.
    pub fn column_family<K, V>(&self, name: impl ColumnFamilyName) -> ColumnFamily<K, V> {
        debug!(column_family = name.name(), id = name.id().0, "column family created");
        ColumnFamily::new(
            name.id(),
            name.name(),
            Arc::clone(&self.context),
            self.config.prefix_scan,
            self.config.prefix_buffer_capacity,
        )
    }

    /// Run `body` inside a transaction, joining the active one if any
    pub fn run_in_transaction<R>(&self, body: impl FnOnce(&Transaction<'_>) -> R) -> R {
        self.context.run_in_transaction(body)
    }

    /// The transaction scope shared by every view of this database
    pub fn transaction_context(&self) -> &Arc<TransactionContext> {
        &self.context
    }

    /// Number of entries across all column families
    pub fn entry_count(&self) -> usize {
        self.store.len()
    }

    /// Drop every entry of every column family
    pub fn clear(&self) {
        let dropped = self.store.len();
        self.context.run_in_transaction(|_| self.store.clear());
        info!(name = %self.config.name, dropped, "database cleared");
    }

    /// Tear down the database, dropping all entries
    pub fn close(self) {
        self.clear();
        debug!(name = %self.config.name, "database closed");
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::in_memory()
    }
}
