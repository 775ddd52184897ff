//! Configuration for ColumnKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{ColumnKvError, Result};

/// Main configuration for a ColumnKV database instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------
    /// Name attached to every log event of this instance
    pub name: String,

    // -------------------------------------------------------------------------
    // Scan Configuration
    // -------------------------------------------------------------------------
    /// How prefix scans terminate
    pub prefix_scan: PrefixScan,

    /// Initial capacity (in bytes) of each pooled prefix buffer
    pub prefix_buffer_capacity: usize,
}

/// Prefix scan termination strategy
///
/// Both strategies visit the same entries in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixScan {
    /// Stop at the first key that no longer carries the prefix
    Bounded,

    /// Skip keys without the prefix and keep going until the store ends
    Exhaustive,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "columnkv".to_string(),
            prefix_scan: PrefixScan::Bounded,
            prefix_buffer_capacity: 64,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config before a database is opened with it
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ColumnKvError::Config(
                "database name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the instance name used in log events
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the prefix scan strategy
    pub fn prefix_scan(mut self, strategy: PrefixScan) -> Self {
        self.config.prefix_scan = strategy;
        self
    }

    /// Set the initial capacity of pooled prefix buffers (in bytes)
    pub fn prefix_buffer_capacity(mut self, capacity: usize) -> Self {
        self.config.prefix_buffer_capacity = capacity;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
