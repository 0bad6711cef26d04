//! Configuration loader that merges multiple sources.

use crate::error::{ConfigError, Result};
use crate::sources::ConfigSource;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Loads and merges configuration from defaults and multiple sources.
///
/// The loader handles precedence by sorting sources by priority and merging them
/// in order (lower priority first, higher priority sources override). Nested
/// tables are merged key by key, so a source that sets a single nested field
/// leaves its siblings untouched.
pub struct ConfigLoader {
    defaults: Option<config::Config>,
    sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self {
            defaults: None,
            sources: Vec::new(),
        }
    }

    /// Use a serialized value as the lowest layer, under every source.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as configuration.
    pub fn set_defaults<T: Serialize>(&mut self, defaults: &T) -> Result<()> {
        let config = config::Config::try_from(defaults)
            .map_err(|e| ConfigError::LoadError(format!("Failed to serialize defaults: {}", e)))?;
        self.defaults = Some(config);
        Ok(())
    }

    /// Add a configuration source.
    pub fn add_source(&mut self, source: Box<dyn ConfigSource>) {
        self.sources.push(source);
    }

    /// Load and merge configuration from the defaults and all sources.
    ///
    /// Sources are merged in priority order (lowest to highest), so higher priority
    /// sources override values from lower priority sources.
    ///
    /// # Type Parameters
    ///
    /// * `T` - The target configuration type
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Neither defaults nor sources were given
    /// - Any source fails to load
    /// - Deserialization fails
    pub fn load<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if self.sources.is_empty() && self.defaults.is_none() {
            return Err(ConfigError::LoadError(
                "No configuration sources specified".to_string(),
            ));
        }

        let mut builder = config::Config::builder();
        if let Some(defaults) = &self.defaults {
            builder = builder.add_source(defaults.clone());
        }

        for source in self.sorted_sources() {
            let values = source.load().map_err(|e| {
                ConfigError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;

            let mut leaves = Vec::new();
            flatten_into("", values, &mut leaves);
            tracing::debug!(
                source = %source.name(),
                priority = source.priority(),
                keys = leaves.len(),
                "merging configuration source"
            );

            for (key, value) in leaves {
                builder = builder.set_override(&key, value).map_err(|e| {
                    ConfigError::LoadError(format!(
                        "Failed to merge source '{}': {}",
                        source.name(),
                        e
                    ))
                })?;
            }
        }

        let config = builder
            .build()
            .map_err(|e| ConfigError::LoadError(format!("Failed to build configuration: {}", e)))?;

        config.try_deserialize::<T>().map_err(|e| {
            ConfigError::DeserializationError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    /// Get the list of source names in priority order.
    pub fn source_names(&self) -> Vec<String> {
        self.sorted_sources().iter().map(|s| s.name()).collect()
    }

    fn sorted_sources(&self) -> Vec<&dyn ConfigSource> {
        let mut sorted: Vec<&dyn ConfigSource> = self.sources.iter().map(|s| &**s).collect();
        sorted.sort_by_key(|s| s.priority());
        sorted
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn nested tables into dotted leaf keys (`databases.session.port`).
fn flatten_into<I>(prefix: &str, entries: I, out: &mut Vec<(String, config::Value)>)
where
    I: IntoIterator<Item = (String, config::Value)>,
{
    for (key, value) in entries {
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };
        match value.kind {
            config::ValueKind::Table(table) => flatten_into(&path, table, out),
            kind => out.push((path, config::Value::new(None, kind))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestConfig {
        port: u16,
        host: String,
        pool: PoolConfig,
    }

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct PoolConfig {
        size: u32,
        idle: String,
    }

    fn defaults() -> TestConfig {
        TestConfig {
            port: 8080,
            host: "localhost".to_string(),
            pool: PoolConfig {
                size: 4,
                idle: "30s".to_string(),
            },
        }
    }

    struct MockSource {
        name: String,
        priority: i32,
        values: HashMap<String, config::Value>,
    }

    impl MockSource {
        fn new(name: &str, priority: i32) -> Self {
            Self {
                name: name.to_string(),
                priority,
                values: HashMap::new(),
            }
        }

        fn with_value(mut self, key: &str, value: impl Into<config::Value>) -> Self {
            self.values.insert(key.to_string(), value.into());
            self
        }
    }

    impl ConfigSource for MockSource {
        fn load(&self) -> Result<HashMap<String, config::Value>> {
            Ok(self.values.clone())
        }

        fn name(&self) -> String {
            self.name.clone()
        }

        fn priority(&self) -> i32 {
            self.priority
        }
    }

    #[test]
    fn test_empty_loader() {
        let loader = ConfigLoader::new();
        let result: Result<TestConfig> = loader.load();
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_defaults_only() {
        let mut loader = ConfigLoader::new();
        loader.set_defaults(&defaults()).unwrap();

        let config: TestConfig = loader.load().unwrap();
        assert_eq!(config, defaults());
    }

    #[test]
    fn test_precedence() {
        let mut loader = ConfigLoader::new();
        loader.set_defaults(&defaults()).unwrap();

        let low = MockSource::new("file", 100)
            .with_value("port", 9000i64)
            .with_value("host", "file-host");
        let high = MockSource::new("env", 300).with_value("port", 9090i64);

        loader.add_source(Box::new(high));
        loader.add_source(Box::new(low));

        let config: TestConfig = loader.load().unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "file-host");
    }

    #[test]
    fn test_nested_tables_merge_per_key() {
        let mut loader = ConfigLoader::new();
        loader.set_defaults(&defaults()).unwrap();

        let mut pool = config::Map::new();
        pool.insert("size".to_string(), config::Value::from(16i64));
        let source = MockSource::new("file", 100).with_value("pool", pool);
        loader.add_source(Box::new(source));

        let config: TestConfig = loader.load().unwrap();
        assert_eq!(config.pool.size, 16);
        assert_eq!(config.pool.idle, "30s");
    }

    #[test]
    fn test_source_names() {
        let mut loader = ConfigLoader::new();
        loader.add_source(Box::new(MockSource::new("source1", 100)));
        loader.add_source(Box::new(MockSource::new("source2", 200)));
        loader.add_source(Box::new(MockSource::new("source3", 50)));

        let names = loader.source_names();
        assert_eq!(names, vec!["source3", "source1", "source2"]);
    }
}
