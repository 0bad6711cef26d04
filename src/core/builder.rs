//! Builder for loading and validating a configuration tree.

use crate::core::{ConfigLoader, Validate};
use crate::error::{Result, ValidationError};
use crate::sources::{ConfigSource, EnvSource, FileSource};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::path::PathBuf;

/// Type alias for extra validator functions run after `Validate::validate`.
type ExtraValidator<T> = Box<dyn Fn(&T) -> std::result::Result<(), ValidationError> + Send + Sync>;

/// Builder for loading a configuration tree of type `T`.
///
/// Values are layered as `T::default()` < files (in the order added) < custom
/// sources (by their own priority) < environment variables. The merged tree is
/// then validated once; the build fails with every violation if anything is wrong.
///
/// # Examples
///
/// ```rust,no_run
/// use vetted_config::prelude::*;
///
/// # fn example() -> Result<()> {
/// let config = ConfigBuilder::<Configuration>::new()
///     .with_optional_file("config.yml")
///     .with_env_overrides("APP", "__")
///     .build()?;
/// println!("listening on {:?}", config.socket_address());
/// # Ok(())
/// # }
/// ```
pub struct ConfigBuilder<T> {
    file_paths: Vec<(PathBuf, bool)>,
    env_prefix: Option<String>,
    env_separator: Option<String>,
    custom_sources: Vec<Box<dyn ConfigSource>>,
    validators: Vec<ExtraValidator<T>>,
    _target: PhantomData<fn() -> T>,
}

impl<T> ConfigBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            file_paths: Vec::new(),
            env_prefix: None,
            env_separator: None,
            custom_sources: Vec::new(),
            validators: Vec::new(),
            _target: PhantomData,
        }
    }

    /// Add a required file source with automatic format detection.
    ///
    /// Supported formats: YAML (.yaml, .yml), TOML (.toml), JSON (.json)
    ///
    /// Files are added in the order they are specified. Later files have higher
    /// priority and will override earlier files.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push((path.into(), true));
        self
    }

    /// Add a file source that is skipped if the file does not exist.
    pub fn with_optional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_paths.push((path.into(), false));
        self
    }

    /// Add environment variable source with custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP")
    /// * `separator` - Separator for nested keys (e.g., "__" for APP_SECURITY__TLS)
    ///
    /// Environment variables have the highest priority by default (300).
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self.env_separator = Some(separator.to_string());
        self
    }

    /// Add a custom configuration source.
    pub fn with_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
        self.custom_sources.push(Box::new(source));
        self
    }

    /// Add a deployment-specific check that runs after the tree's own validation.
    ///
    /// Its violations are reported together with the tree's, in the order the
    /// validators were added.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use vetted_config::prelude::*;
    ///
    /// # fn example() -> Result<()> {
    /// let config = ConfigBuilder::<Configuration>::new()
    ///     .with_validation(|config: &Configuration| {
    ///         if !config.security.tls {
    ///             return Err(ValidationError::custom("TLS is mandatory in production"));
    ///         }
    ///         Ok(())
    ///     })
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_validation<F>(mut self, validator: F) -> Self
    where
        F: Fn(&T) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Box::new(validator));
        self
    }

    fn into_loader(self) -> (ConfigLoader, Vec<ExtraValidator<T>>) {
        let mut loader = ConfigLoader::new();

        // Add file sources with increasing priority
        for (index, (path, required)) in self.file_paths.into_iter().enumerate() {
            let priority = 100 + (index as i32 * 10); // 100, 110, 120, etc.
            let source = FileSource::new(path).with_priority(priority);
            let source = if required { source } else { source.optional() };
            loader.add_source(Box::new(source));
        }

        for source in self.custom_sources {
            loader.add_source(source);
        }

        if let (Some(prefix), Some(separator)) = (self.env_prefix, self.env_separator) {
            loader.add_source(Box::new(EnvSource::new(prefix, separator)));
        }

        (loader, self.validators)
    }
}

impl<T> ConfigBuilder<T>
where
    T: DeserializeOwned + Serialize + Default + Validate,
{
    /// Load the configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any source fails to load
    /// - Deserialization fails
    /// - Validation fails, in which case the error carries every violation
    pub fn build(self) -> Result<T> {
        let (mut loader, validators) = self.into_loader();
        loader.set_defaults(&T::default())?;

        let config: T = loader.load()?;

        let outcome = ValidationError::merge(
            std::iter::once(config.validate()).chain(validators.iter().map(|v| v(&config))),
        );

        match outcome {
            Ok(()) => {
                tracing::info!(sources = ?loader.source_names(), "configuration validated");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!(violations = err.len(), "configuration rejected");
                Err(err.into())
            }
        }
    }
}

impl<T> Default for ConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
