//! Configuration source trait.

use crate::error::Result;
use std::collections::HashMap;

/// Trait for configuration sources.
///
/// Implement this trait to feed values from somewhere other than files or the
/// environment (a secrets file mounted by an orchestrator, a test fixture, ...).
/// Parsing is left to the `config` crate; a source only hands back values.
pub trait ConfigSource: Send + Sync {
    /// Load configuration as a key-value map, possibly with nested tables.
    ///
    /// The returned map will be merged with other sources according to precedence rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or parsed.
    fn load(&self) -> Result<HashMap<String, config::Value>>;

    /// Get a human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// Get the priority of this source (higher = takes precedence).
    ///
    /// Default priorities:
    /// - Environment variables: 300
    /// - Files: 100, 110, 120, ... in the order they were added
    /// - Serialized defaults sit below every source
    fn priority(&self) -> i32 {
        100
    }
}
