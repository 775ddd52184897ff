//! # ColumnKV
//!
//! An in-memory, transactional, ordered key-value store with column
//! families, standing in for a persistent column-family engine during test
//! runs:
//! - Same put/get/delete/scan contract as the persistent engine
//! - Byte-wise key order, contiguous namespaces, bounded prefix scans
//! - Reentrant transactions that flatten into the outermost one
//! - No disk, no durability, no recovery
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              ColumnFamily<K, V>  (one per namespace)         │
//! │   put / get / delete / exists / is_empty / scans             │
//! └──────────┬──────────────────────────────┬───────────────────┘
//!            │ Encode / Decode              │ scan prefix
//!            ▼                              ▼
//!   ┌─────────────────┐            ┌──────────────────┐
//!   │  Composite Key  │            │ IterationContext │
//!   │ ordinal ++ key  │            │  (buffer pool)   │
//!   └────────┬────────┘            └────────┬─────────┘
//!            └──────────────┬───────────────┘
//!                           ▼
//!               ┌───────────────────────┐
//!               │  TransactionContext   │
//!               │ (reentrant, flattens) │
//!               └───────────┬───────────┘
//!                           ▼
//!               ┌───────────────────────┐
//!               │     OrderedStore      │
//!               │  (BTreeMap, RwLock)   │
//!               └───────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use columnkv::{ColumnFamilyId, Database, Visit};
//!
//! let db = Database::in_memory();
//! let jobs = db.column_family::<u64, String>(ColumnFamilyId(1));
//!
//! jobs.put(&1, &"a".to_string());
//! jobs.put(&2, &"b".to_string());
//!
//! let mut seen = Vec::new();
//! jobs.while_true(|key, value| {
//!     seen.push((key, value));
//!     Visit::Continue
//! })
//! .unwrap();
//!
//! assert_eq!(seen, vec![(1, "a".to_string()), (2, "b".to_string())]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod store;
pub mod transaction;
pub mod column_family;
pub mod database;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ColumnKvError, Result};
pub use config::{Config, PrefixScan};
pub use codec::{Bincode, Decode, Encode, Nil, NullKey};
pub use column_family::{ColumnFamily, ColumnFamilyId, ColumnFamilyName, Visit};
pub use database::Database;
pub use transaction::{Transaction, TransactionContext};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ColumnKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
