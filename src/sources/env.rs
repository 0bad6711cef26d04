//! Environment variable configuration source.

use super::ConfigSource;
use crate::error::{ConfigError, Result};
use config::Environment;
use std::collections::HashMap;

/// Environment variable configuration source.
///
/// Loads configuration from environment variables with a specified prefix
/// and separator for nested keys. Keys are lowercased. Values stay strings;
/// numeric and boolean fields convert them when the tree is deserialized, so
/// a password such as `0123` keeps its leading zero.
///
/// # Examples
///
/// ```rust
/// use vetted_config::sources::EnvSource;
///
/// // APP_DATABASES__SESSION__PORT=6380 -> databases.session.port = 6380
/// let source = EnvSource::new("APP", "__");
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
    priority: i32,
}

impl EnvSource {
    /// Create a new environment variable source.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP"), joined to the key with `_`
    /// * `separator` - Separator for nested keys (e.g., "__" for APP_SECURITY__TLS)
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            priority: 300,
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl ConfigSource for EnvSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        let env_source = Environment::with_prefix(&self.prefix)
            .prefix_separator("_")
            .separator(&self.separator);

        let config = config::Config::builder()
            .add_source(env_source)
            .build()
            .map_err(|e| {
                ConfigError::LoadError(format!("Failed to load environment variables: {}", e))
            })?;

        config
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| {
                ConfigError::DeserializationError(format!(
                    "Failed to parse environment variables: {}",
                    e
                ))
            })
    }

    fn name(&self) -> String {
        format!("env:{}_*", self.prefix)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_source_creation() {
        let source = EnvSource::new("APP", "__");
        assert_eq!(source.prefix, "APP");
        assert_eq!(source.separator, "__");
        assert_eq!(source.priority(), 300);
    }

    #[test]
    fn test_with_priority() {
        let source = EnvSource::new("APP", "__").with_priority(400);
        assert_eq!(source.priority(), 400);
    }

    #[test]
    fn test_name() {
        let source = EnvSource::new("APP", "__");
        assert_eq!(source.name(), "env:APP_*");
    }

    #[test]
    fn test_load_without_matching_vars() {
        let source = EnvSource::new("VETTED_CONFIG_UNIT_NONEXISTENT", "__");
        let map = source.load().unwrap();
        assert!(map.is_empty());
    }
}
