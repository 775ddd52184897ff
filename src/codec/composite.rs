//! Composite key codecs
//!
//! Tuples encode as the concatenation of their parts. Every part but the
//! last must be self-delimiting (fixed width or length prefixed), otherwise
//! decoding cannot find where the next part starts. A leading part of a
//! tuple is a valid scan prefix for the whole tuple.

use crate::error::Result;

use super::{Decode, Encode};

impl<A: Encode, B: Encode> Encode for (A, B) {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.0.encode(buf);
        self.1.encode(buf);
    }

    fn encoded_len(&self) -> usize {
        self.0.encoded_len() + self.1.encoded_len()
    }
}

impl<A: Decode, B: Decode> Decode for (A, B) {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        let (a, used_a) = A::decode_prefix(bytes)?;
        let (b, used_b) = B::decode_prefix(&bytes[used_a..])?;
        Ok(((a, b), used_a + used_b))
    }
}

impl<A: Encode, B: Encode, C: Encode> Encode for (A, B, C) {
    fn encode(&self, buf: &mut Vec<u8>) {
        self.0.encode(buf);
        self.1.encode(buf);
        self.2.encode(buf);
    }

    fn encoded_len(&self) -> usize {
        self.0.encoded_len() + self.1.encoded_len() + self.2.encoded_len()
    }
}

impl<A: Decode, B: Decode, C: Decode> Decode for (A, B, C) {
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
        let (a, used_a) = A::decode_prefix(bytes)?;
        let ((b, c), used_bc) = <(B, C)>::decode_prefix(&bytes[used_a..])?;
        Ok(((a, b, c), used_a + used_bc))
    }
}
