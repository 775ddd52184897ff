//! Serde-backed values
//!
//! Wraps any serde type so it can be stored as a column family value.
//! The bincode encoding is not order-preserving, so `Bincode<T>` is meant
//! for values, not keys.

use std::fmt;

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ColumnKvError, Result};

use super::{Decode, Encode};

/// A serde value together with its bincode encoding
///
/// Serialization happens once, in [`Bincode::new`], so encoding into the
/// store cannot fail afterwards.
#[derive(Clone, PartialEq)]
pub struct Bincode<T> {
    value: T,
    bytes: Vec<u8>,
}

impl<T: Serialize> Bincode<T> {
    /// Serialize `value`
    pub fn new(value: T) -> Result<Self> {
        let bytes = bincode::serialize(&value)?;
        Ok(Self { value, bytes })
    }
}

impl<T> Bincode<T> {
    /// Borrow the wrapped value
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Bincode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bincode").field(&self.value).finish()
    }
}

impl<T> Encode for Bincode<T> {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.bytes);
    }

    fn encoded_len(&self) -> usize {
        self.bytes.len()
    }
}

impl<T: DeserializeOwned> Decode for Bincode<T> {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        // Same layout as `bincode::serialize`, but no length prefix may
        // claim more bytes than the window holds.
        let mut reader = bytes;
        let value: T = bincode::options()
            .with_fixint_encoding()
            .allow_trailing_bytes()
            .with_limit(bytes.len() as u64)
            .deserialize_from(&mut reader)
            .map_err(|e| ColumnKvError::Decode(format!("bincode: {}", e)))?;
        let consumed = bytes.len() - reader.len();
        Ok((
            Self {
                value,
                bytes: bytes[..consumed].to_vec(),
            },
            consumed,
        ))
    }
}
