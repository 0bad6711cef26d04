//! File-based configuration source.

use super::ConfigSource;
use crate::error::{ConfigError, Result};
use config::File;
use std::collections::HashMap;
use std::path::PathBuf;

/// File-based configuration source.
///
/// Loads configuration from YAML, TOML, or JSON files with automatic format detection
/// based on file extension. A source is required by default; an optional source
/// that does not exist contributes nothing.
///
/// # Examples
///
/// ```rust,no_run
/// use vetted_config::sources::FileSource;
///
/// let required = FileSource::new("/etc/app/config.yaml");
/// let local = FileSource::new("config.toml").optional();
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
    required: bool,
}

impl FileSource {
    /// Create a new required file source with automatic format detection.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
            required: true,
        }
    }

    /// Skip the file silently if it does not exist.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Validate that the file extension is supported.
    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ConfigError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" | "toml" | "json" => Ok(()),
            _ => Err(ConfigError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            ))),
        }
    }
}

impl ConfigSource for FileSource {
    fn load(&self) -> Result<HashMap<String, config::Value>> {
        self.validate_extension()?;

        if !self.path.exists() {
            if self.required {
                return Err(ConfigError::LoadError(format!(
                    "Configuration file not found: {}",
                    self.path.display()
                )));
            }
            tracing::debug!(path = %self.path.display(), "optional configuration file not found");
            return Ok(HashMap::new());
        }

        let config = config::Config::builder()
            .add_source(File::from(self.path.clone()).required(true))
            .build()
            .map_err(|e| ConfigError::LoadError(format!("Failed to load file: {}", e)))?;

        config
            .try_deserialize::<HashMap<String, config::Value>>()
            .map_err(|e| ConfigError::DeserializationError(format!("Failed to parse file: {}", e)))
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_extension_known() {
        for name in ["config.yaml", "config.yml", "config.toml", "config.json"] {
            assert!(FileSource::new(name).validate_extension().is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_validate_extension_unknown() {
        assert!(FileSource::new("config.env").validate_extension().is_err());
        assert!(FileSource::new("config").validate_extension().is_err());
    }

    #[test]
    fn test_load_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
port = 8080

[security]
tls = true
"#,
        )
        .unwrap();

        let map = FileSource::new(&config_path).load().unwrap();
        assert!(map.contains_key("port"));
        assert!(map.contains_key("security"));
    }

    #[test]
    fn test_load_missing_required_file() {
        let source = FileSource::new("/nonexistent/config.yaml");
        assert!(matches!(source.load(), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_missing_optional_file() {
        let source = FileSource::new("/nonexistent/config.yaml").optional();
        assert!(source.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ \"port\": ").unwrap();

        assert!(FileSource::new(&config_path).load().is_err());
    }

    #[test]
    fn test_with_priority() {
        let source = FileSource::new("config.yaml").with_priority(200);
        assert_eq!(source.priority(), 200);
    }

    #[test]
    fn test_name() {
        let source = FileSource::new("config.yaml");
        assert!(source.name().contains("config.yaml"));
    }
}
