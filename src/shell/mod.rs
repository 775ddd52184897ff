//! Shell Module
//!
//! A line-oriented text front-end for poking at a database by hand or from
//! a script. Keys and values are raw UTF-8 bytes; column families are
//! addressed by ordinal.
//!
//! ## Commands
//! ```text
//! put <cf> <key> <value>     -> OK
//! get <cf> <key>             -> VALUE <value> | NOT_FOUND
//! del <cf> <key>             -> OK | NOT_FOUND
//! exists <cf> <key>          -> TRUE | FALSE
//! scan <cf> [prefix]         -> ENTRY <key> <value> ... END
//! empty <cf>                 -> TRUE | FALSE
//! count <cf>                 -> COUNT <n>
//! clear                      -> OK
//! ping                       -> PONG
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Failures render as
//! `ERROR <message>` and do not stop a script.

mod command;
mod session;

pub use command::{Command, Response};
pub use session::Session;
