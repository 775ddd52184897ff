//! Primitive codecs
//!
//! Order-preserving encodings for integers, strings, raw bytes and the two
//! empty markers.

use crate::error::{ColumnKvError, Result};

use super::{take, Decode, Encode};

/// Flips the sign bit so that byte-wise order equals numeric order
const SIGN_BIT: u64 = 1 << 63;

/// Width of the length prefix in front of encoded strings
const STRING_LEN_WIDTH: usize = 4;

/// The empty key: scans the whole column family when used as a prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullKey;

/// The empty value, for column families used as sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nil;

// =============================================================================
// Integers
// =============================================================================

macro_rules! unsigned_codec {
    ($ty:ty) => {
        impl Encode for $ty {
            fn encode(&self, buf: &mut Vec<u8>) {
                buf.extend_from_slice(&self.to_be_bytes());
            }

            fn encoded_len(&self) -> usize {
                std::mem::size_of::<$ty>()
            }
        }

        impl Decode for $ty {
            fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
                const WIDTH: usize = std::mem::size_of::<$ty>();
                let raw = take(bytes, WIDTH, stringify!($ty))?;
                let mut array = [0u8; WIDTH];
                array.copy_from_slice(raw);
                Ok((<$ty>::from_be_bytes(array), WIDTH))
            }
        }
    };
}

unsigned_codec!(u8);
unsigned_codec!(u32);
unsigned_codec!(u64);

impl Encode for i64 {
    fn encode(&self, buf: &mut Vec<u8>) {
        ((*self as u64) ^ SIGN_BIT).encode(buf);
    }

    fn encoded_len(&self) -> usize {
        8
    }
}

impl Decode for i64 {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        let (raw, consumed) = u64::decode_prefix(bytes)?;
        Ok(((raw ^ SIGN_BIT) as i64, consumed))
    }
}

impl Encode for bool {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(u8::from(*self));
    }

    fn encoded_len(&self) -> usize {
        1
    }
}

impl Decode for bool {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        match take(bytes, 1, "bool")?[0] {
            0 => Ok((false, 1)),
            1 => Ok((true, 1)),
            other => Err(ColumnKvError::Decode(format!(
                "bool: invalid byte 0x{:02x}",
                other
            ))),
        }
    }
}

// =============================================================================
// Strings
// =============================================================================

impl Encode for str {
    fn encode(&self, buf: &mut Vec<u8>) {
        (self.len() as u32).encode(buf);
        buf.extend_from_slice(self.as_bytes());
    }

    fn encoded_len(&self) -> usize {
        STRING_LEN_WIDTH + self.len()
    }
}

impl Encode for String {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.as_str().encode(buf)
    }

    fn encoded_len(&self) -> usize {
        self.as_str().encoded_len()
    }
}

impl Decode for String {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        let (len, header) = u32::decode_prefix(bytes)?;
        let body = take(&bytes[header..], len as usize, "string body")?;
        let text = std::str::from_utf8(body)
            .map_err(|e| ColumnKvError::Decode(format!("string: {}", e)))?;
        Ok((text.to_string(), header + body.len()))
    }
}

// =============================================================================
// Raw Bytes
// =============================================================================

impl Encode for [u8] {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

impl Encode for Vec<u8> {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self);
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

/// Raw bytes are not delimited: they take the rest of the window.
impl Decode for Vec<u8> {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        Ok((bytes.to_vec(), bytes.len()))
    }
}

// =============================================================================
// Empty Markers
// =============================================================================

impl Encode for NullKey {
    fn encode(&self, _buf: &mut Vec<u8>) {}

    fn encoded_len(&self) -> usize {
        0
    }
}

impl Decode for NullKey {
    fn decode_prefix(_bytes: &[u8]) -> Result<(Self, usize)> {
        Ok((NullKey, 0))
    }
}

impl Encode for Nil {
    fn encode(&self, _buf: &mut Vec<u8>) {}

    fn encoded_len(&self) -> usize {
        0
    }
}

impl Decode for Nil {
    fn decode_prefix(_bytes: &[u8]) -> Result<(Self, usize)> {
        Ok((Nil, 0))
    }
}
