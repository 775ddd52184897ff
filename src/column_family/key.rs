//! Column family identity and composite keys
//!
//! ```text
//! ┌───────────────────────┬──────────────────────────────┐
//! │ Ordinal (8, BE)       │ Encoded key                  │
//! └───────────────────────┴──────────────────────────────┘
//! ```
//!
//! The ordinal leads every stored key, so all entries of one column family
//! are contiguous in the store, and entries sharing a key prefix are
//! contiguous inside it.

use std::fmt;

use crate::codec::Encode;
use crate::error::{ColumnKvError, Result};

/// Width of the ordinal in front of every composite key
pub const ORDINAL_WIDTH: usize = 8;

/// Stable, explicitly assigned ordinal of a column family
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnFamilyId(pub u64);

impl ColumnFamilyId {
    /// Order-preserving fixed-width encoding of the ordinal
    pub fn to_bytes(self) -> [u8; ORDINAL_WIDTH] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for ColumnFamilyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A namespace enumeration supplied by the consumer
///
/// Ordinals are assigned explicitly, never derived from declaration order:
/// reordering an enum must not move its entries in the store.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy)]
/// enum Cf { Jobs, Timers }
///
/// impl ColumnFamilyName for Cf {
///     fn id(&self) -> ColumnFamilyId {
///         match self {
///             Cf::Jobs => ColumnFamilyId(10),
///             Cf::Timers => ColumnFamilyId(20),
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Cf::Jobs => "jobs",
///             Cf::Timers => "timers",
///         }
///     }
/// }
/// ```
pub trait ColumnFamilyName {
    /// The ordinal used as key prefix
    fn id(&self) -> ColumnFamilyId;

    /// Human-readable name for logs and errors
    fn name(&self) -> &'static str;
}

impl ColumnFamilyName for ColumnFamilyId {
    fn id(&self) -> ColumnFamilyId {
        *self
    }

    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Build `ordinal ++ encode(key)`
pub fn composite_key<K: Encode + ?Sized>(id: ColumnFamilyId, key: &K) -> Vec<u8> {
    let mut buf = Vec::with_capacity(ORDINAL_WIDTH + key.encoded_len());
    write_composite_key(id, key, &mut buf);
    buf
}

/// Write `ordinal ++ encode(key)` into `buf`, replacing its contents
pub fn write_composite_key<K: Encode + ?Sized>(id: ColumnFamilyId, key: &K, buf: &mut Vec<u8>) {
    buf.clear();
    buf.extend_from_slice(&id.to_bytes());
    key.encode(buf);
}

/// Strip the ordinal off a composite key, leaving the encoded key
pub fn strip_ordinal(composite: &[u8]) -> Result<&[u8]> {
    composite.get(ORDINAL_WIDTH..).ok_or_else(|| {
        ColumnKvError::Decode(format!(
            "composite key shorter than ordinal: {} bytes",
            composite.len()
        ))
    })
}
