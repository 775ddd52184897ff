//! Column Family Module
//!
//! Typed namespaces over the shared ordered store.
//!
//! ## Data Flow
//! ```text
//!   ColumnFamily::put / get / scan
//!        │
//!        ▼
//!   composite key = ordinal (8) ++ encode(key)      (key.rs)
//!        │                         scan prefix       (iteration.rs)
//!        ▼
//!   TransactionContext::run_in_transaction
//!        │
//!        ▼
//!   OrderedStore (BTreeMap, byte-wise order)
//!        │
//!        ▼
//!   Decode into fresh K / V
//! ```

mod iteration;
mod key;
mod view;

pub use iteration::IterationContext;
pub use key::{
    composite_key, strip_ordinal, write_composite_key, ColumnFamilyId, ColumnFamilyName,
    ORDINAL_WIDTH,
};
pub use view::ColumnFamily;

/// Visitor decision after each scanned entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Move on to the next entry
    Continue,

    /// End the scan; the visitor is not called again
    Stop,
}

impl Visit {
    pub fn is_continue(self) -> bool {
        self == Visit::Continue
    }
}

/// `true` continues, `false` stops
impl From<bool> for Visit {
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Visit::Continue
        } else {
            Visit::Stop
        }
    }
}
