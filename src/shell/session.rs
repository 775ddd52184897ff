//! Shell session
//!
//! Executes shell commands against one database.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::column_family::{ColumnFamily, ColumnFamilyId};
use crate::database::Database;
use crate::error::Result;

use super::{Command, Response};

/// Raw byte column family as seen from the shell
type RawColumnFamily = ColumnFamily<Vec<u8>, Vec<u8>>;

/// A database plus the column family views opened so far
pub struct Session {
    database: Database,
    views: HashMap<u64, RawColumnFamily>,
}

impl Session {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            views: HashMap::new(),
        }
    }

    /// Get the underlying database
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn view(&mut self, cf: u64) -> &RawColumnFamily {
        let database = &self.database;
        self.views
            .entry(cf)
            .or_insert_with(|| database.column_family(ColumnFamilyId(cf)))
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Put { cf, key, value } => {
                self.view(cf).put(&key, &value);
                Response::Ok
            }
            Command::Get { cf, key } => match self.view(cf).get(&key) {
                Ok(Some(value)) => Response::Value(value),
                Ok(None) => Response::NotFound,
                Err(e) => Response::Error(e.to_string()),
            },
            Command::Delete { cf, key } => {
                if self.view(cf).delete_if_exists(&key) {
                    Response::Ok
                } else {
                    Response::NotFound
                }
            }
            Command::Exists { cf, key } => Response::Bool(self.view(cf).exists(&key)),
            Command::Scan { cf, prefix } => {
                let mut entries = Vec::new();
                let scanned = self
                    .view(cf)
                    .for_each_with_prefix(prefix.as_slice(), |key, value| {
                        entries.push((key, value))
                    });
                match scanned {
                    Ok(()) => Response::Entries(entries),
                    Err(e) => Response::Error(e.to_string()),
                }
            }
            Command::Empty { cf } => Response::Bool(self.view(cf).is_empty()),
            Command::Count { cf } => Response::Count(self.view(cf).count()),
            Command::Clear => {
                self.database.clear();
                Response::Ok
            }
            Command::Ping => Response::Pong,
        }
    }

    /// Parse and execute one line; `None` for blank lines and comments
    pub fn execute_line(&mut self, line: &str) -> Option<Response> {
        match Command::parse(line) {
            Ok(Some(command)) => {
                debug!(?command, "executing");
                Some(self.execute(command))
            }
            Ok(None) => None,
            Err(e) => {
                warn!(line, error = %e, "rejected command");
                Some(Response::Error(e.to_string()))
            }
        }
    }

    /// Run every line of `input`, writing one response per command to `output`
    ///
    /// Returns the number of commands executed.
    pub fn run_script(&mut self, input: impl BufRead, mut output: impl Write) -> Result<usize> {
        let mut executed = 0;
        for line in input.lines() {
            let line = line?;
            if let Some(response) = self.execute_line(&line) {
                writeln!(output, "{}", response)?;
                executed += 1;
            }
        }
        output.flush()?;
        Ok(executed)
    }
}
