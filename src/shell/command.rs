//! Shell command and response definitions

use std::fmt;

use crate::error::{ColumnKvError, Result};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Put a key-value pair
    Put { cf: u64, key: Vec<u8>, value: Vec<u8> },

    /// Get a value by key
    Get { cf: u64, key: Vec<u8> },

    /// Delete a key
    Delete { cf: u64, key: Vec<u8> },

    /// Check whether a key exists
    Exists { cf: u64, key: Vec<u8> },

    /// List entries whose key starts with a prefix
    Scan { cf: u64, prefix: Vec<u8> },

    /// Check whether a column family is empty
    Empty { cf: u64 },

    /// Count the entries of a column family
    Count { cf: u64 },

    /// Drop every entry
    Clear,

    /// Health check
    Ping,
}

impl Command {
    /// Parse one script line
    ///
    /// Returns `Ok(None)` for blank lines and comments.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("put", [cf, key, value]) => Command::Put {
                cf: parse_cf(cf)?,
                key: key.as_bytes().to_vec(),
                value: value.as_bytes().to_vec(),
            },
            ("get", [cf, key]) => Command::Get {
                cf: parse_cf(cf)?,
                key: key.as_bytes().to_vec(),
            },
            ("del" | "delete", [cf, key]) => Command::Delete {
                cf: parse_cf(cf)?,
                key: key.as_bytes().to_vec(),
            },
            ("exists", [cf, key]) => Command::Exists {
                cf: parse_cf(cf)?,
                key: key.as_bytes().to_vec(),
            },
            ("scan", [cf]) => Command::Scan {
                cf: parse_cf(cf)?,
                prefix: Vec::new(),
            },
            ("scan", [cf, prefix]) => Command::Scan {
                cf: parse_cf(cf)?,
                prefix: prefix.as_bytes().to_vec(),
            },
            ("empty", [cf]) => Command::Empty { cf: parse_cf(cf)? },
            ("count", [cf]) => Command::Count { cf: parse_cf(cf)? },
            ("clear", []) => Command::Clear,
            ("ping", []) => Command::Ping,
            (
                "put" | "get" | "del" | "delete" | "exists" | "scan" | "empty" | "count"
                | "clear" | "ping",
                _,
            ) => {
                return Err(ColumnKvError::Command(format!(
                    "wrong number of arguments for '{}'",
                    verb
                )))
            }
            _ => {
                return Err(ColumnKvError::Command(format!(
                    "unknown command '{}'",
                    verb
                )))
            }
        };

        Ok(Some(command))
    }
}

fn parse_cf(word: &str) -> Result<u64> {
    word.parse::<u64>().map_err(|_| {
        ColumnKvError::Command(format!("column family must be an ordinal, got '{}'", word))
    })
}

/// Result of one shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok,
    NotFound,
    Value(Vec<u8>),
    Bool(bool),
    Entries(Vec<(Vec<u8>, Vec<u8>)>),
    Count(usize),
    Pong,
    Error(String),
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok => write!(f, "OK"),
            Response::NotFound => write!(f, "NOT_FOUND"),
            Response::Value(value) => write!(f, "VALUE {}", String::from_utf8_lossy(value)),
            Response::Bool(true) => write!(f, "TRUE"),
            Response::Bool(false) => write!(f, "FALSE"),
            Response::Entries(entries) => {
                for (key, value) in entries {
                    writeln!(
                        f,
                        "ENTRY {} {}",
                        String::from_utf8_lossy(key),
                        String::from_utf8_lossy(value)
                    )?;
                }
                write!(f, "END")
            }
            Response::Count(count) => write!(f, "COUNT {}", count),
            Response::Pong => write!(f, "PONG"),
            Response::Error(message) => write!(f, "ERROR {}", message),
        }
    }
}
