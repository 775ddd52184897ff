//! Iteration context
//!
//! Builds the byte prefix for scans of one column family view, reusing
//! buffers across calls.

use parking_lot::Mutex;

use crate::codec::Encode;

use super::key::{write_composite_key, ColumnFamilyId, ORDINAL_WIDTH};

/// Per-view pool of prefix buffers
///
/// A scan borrows a buffer for as long as its action runs and returns it
/// afterwards. Scans nested inside a visitor of the same view borrow a
/// second buffer, so the outer prefix is never overwritten.
pub struct IterationContext {
    id: ColumnFamilyId,
    buffer_capacity: usize,
    buffers: Mutex<Vec<Vec<u8>>>,
}

impl IterationContext {
    pub fn new(id: ColumnFamilyId, buffer_capacity: usize) -> Self {
        Self {
            id,
            buffer_capacity: buffer_capacity.max(ORDINAL_WIDTH),
            buffers: Mutex::new(Vec::new()),
        }
    }

    /// Run `action` with `ordinal ++ encode(prefix)`
    ///
    /// The slice is only valid for the duration of `action`.
    pub fn with_prefix_key<P, R>(&self, prefix: &P, action: impl FnOnce(&[u8]) -> R) -> R
    where
        P: Encode + ?Sized,
    {
        let mut buffer = self
            .buffers
            .lock()
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.buffer_capacity));

        write_composite_key(self.id, prefix, &mut buffer);

        let pooled = PooledBuffer {
            context: self,
            buffer: Some(buffer),
        };
        action(pooled.as_slice())
    }

    /// Number of idle buffers held for reuse
    pub fn pooled_buffers(&self) -> usize {
        self.buffers.lock().len()
    }
}

/// Returns its buffer to the pool when dropped, even if the action panics
struct PooledBuffer<'a> {
    context: &'a IterationContext,
    buffer: Option<Vec<u8>>,
}

impl PooledBuffer<'_> {
    fn as_slice(&self) -> &[u8] {
        self.buffer.as_deref().unwrap_or_default()
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        if let Some(buffer) = self.buffer.take() {
            self.context.buffers.lock().push(buffer);
        }
    }
}
