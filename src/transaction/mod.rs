//! Transaction Module
//!
//! Reentrant, flattening transaction scope around store access.
//!
//! ## State Machine
//! ```text
//!                 run_in_transaction (depth 0 -> 1)
//!   ┌──────────┐ ─────────────────────────────────▶ ┌──────────┐
//!   │ inactive │                                    │  active  │ ◀─┐ nested call
//!   └──────────┘ ◀───────────────────────────────── └──────────┘ ──┘ (depth +1/-1)
//!                 outermost return (commit)
//! ```
//!
//! ## Semantics
//! - Nested calls on the same thread join the outermost transaction.
//! - Mutations are visible immediately; there is no isolation.
//! - Commit happens when the outermost call returns, on every exit path.
//! - There is no rollback: a body that fails leaves its earlier writes.

mod context;

pub use context::{Transaction, TransactionContext};
