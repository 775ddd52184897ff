//! Codec Module
//!
//! The byte contract every key and value type stored in a column family
//! implements.
//!
//! ## Contract
//! - `Encode` appends a deterministic byte encoding to a buffer.
//! - `Decode` builds a fresh owned value from a byte window.
//!
//! Keys are compared byte-wise by the store, so a key type's encoding must
//! preserve the order callers expect. All stock integer encodings are
//! big-endian for that reason.
//!
//! ## Stock Types
//! ```text
//! ┌──────────────┬──────────────────────────────────────┬───────────────┐
//! │ Type         │ Encoding                             │ Delimited     │
//! ├──────────────┼──────────────────────────────────────┼───────────────┤
//! │ u8/u32/u64   │ big-endian                           │ fixed width   │
//! │ i64          │ big-endian, sign bit flipped         │ fixed width   │
//! │ bool         │ 0x00 / 0x01                          │ fixed width   │
//! │ String, str  │ len (4, BE) + UTF-8                  │ length prefix │
//! │ Vec<u8>, [u8]│ raw bytes                            │ no            │
//! │ NullKey, Nil │ empty                                │ fixed width   │
//! │ (A, B[, C])  │ concatenation of parts               │ if last part  │
//! │ Bincode<T>   │ bincode of a serde type (value only) │ yes           │
//! └──────────────┴──────────────────────────────────────┴───────────────┘
//! ```

mod composite;
mod primitives;
mod serde_value;

pub use primitives::{Nil, NullKey};
pub use serde_value::Bincode;

use crate::error::{ColumnKvError, Result};

/// A type that can be written as bytes into a column family
pub trait Encode {
    /// Append the encoding of `self` to `buf`
    fn encode(&self, buf: &mut Vec<u8>);

    /// Number of bytes `encode` will append
    fn encoded_len(&self) -> usize;

    /// Encode into a freshly allocated buffer
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf);
        buf
    }
}

/// A type that can be read back from the bytes of a column family
pub trait Decode: Sized {
    /// Decode a value from the front of `bytes`
    ///
    /// Returns the value and the number of bytes it occupied.
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)>;

    /// Decode a value that must occupy the whole window
    fn decode(bytes: &[u8]) -> Result<Self> {
        let (value, consumed) = Self::decode_prefix(bytes)?;
        if consumed != bytes.len() {
            return Err(ColumnKvError::Decode(format!(
                "{} trailing bytes after {}",
                bytes.len() - consumed,
                std::any::type_name::<Self>()
            )));
        }
        Ok(value)
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, buf: &mut Vec<u8>) {
        (**self).encode(buf)
    }

    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}

/// Split `len` bytes off the front of `bytes`, or fail naming `what`
pub(crate) fn take<'a>(bytes: &'a [u8], len: usize, what: &str) -> Result<&'a [u8]> {
    bytes.get(..len).ok_or_else(|| {
        ColumnKvError::Decode(format!(
            "{}: need {} bytes, got {}",
            what,
            len,
            bytes.len()
        ))
    })
}
