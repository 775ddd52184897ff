//! Store Module
//!
//! The single ordered byte map every column family writes into.
//!
//! ## Responsibilities
//! - Point reads and writes by exact composite key
//! - Byte-wise (lexicographic) key order
//! - Lazy ascending scans starting at a seek position
//!
//! ## Data Structure Choice
//! BTreeMap wrapped in a parking_lot RwLock:
//! - Ordered keys (required for prefix scans)
//! - Values held as `Bytes` so readers get a cheap clone
//! - Deletes remove the entry outright; there is no log to tombstone for
//!
//! Nothing here is persisted. The store lives as long as the database that
//! owns it.

mod cursor;
mod ordered;

pub use cursor::Cursor;
pub use ordered::OrderedStore;
