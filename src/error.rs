//! Error types for vetted-config.

use std::fmt;

/// Result type alias for vetted-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to deserialize configuration.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),

    /// Configuration validation failed.
    ///
    /// Carries every violation found in the validation pass, not only the first.
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl ConfigError {
    /// The validation aggregate, if this error came from a failed validation pass.
    pub fn violations(&self) -> Option<&ValidationError> {
        match self {
            Self::ValidationError(err) => Some(err),
            _ => None,
        }
    }
}

/// A single failed check, tagged with the chain of sections that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    path: Vec<String>,
    message: String,
}

impl Violation {
    /// Create an unlabeled violation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// The message recorded by the failed check.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Section labels from the outermost section down to the one that ran the check.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The innermost section label, i.e. the section whose check failed.
    pub fn section(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "[{}] {}", self.path.join("."), self.message)
        }
    }
}

/// Aggregate of every violation found during one validation pass.
///
/// Violations keep the order in which their checks ran. A `ValidationError`
/// is never empty when returned inside an `Err`: the constructors that merge
/// results hand back `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<Violation>,
}

impl ValidationError {
    /// Create an aggregate holding a single custom message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Self {
            violations: vec![Violation::new(msg)],
        }
    }

    /// Build an aggregate from raw messages, preserving their order.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            violations: messages.into_iter().map(Violation::new).collect(),
        }
    }

    /// Prefix every contained violation with a section label.
    pub fn within(mut self, label: &str) -> Self {
        for violation in &mut self.violations {
            violation.path.insert(0, label.to_string());
        }
        self
    }

    /// Merge several results into one, keeping every violation in order.
    ///
    /// Returns `Ok(())` if none of the results carried a violation.
    pub fn merge<I>(results: I) -> std::result::Result<(), ValidationError>
    where
        I: IntoIterator<Item = std::result::Result<(), ValidationError>>,
    {
        let violations: Vec<Violation> = results
            .into_iter()
            .filter_map(std::result::Result::err)
            .flat_map(|err| err.violations)
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self { violations })
        }
    }

    /// Merge the results of one section and its children under the section's label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted_config::error::ValidationError;
    ///
    /// let own = Err(ValidationError::custom("port must be valid"));
    /// let child = Err(ValidationError::custom("key is blank").within("security"));
    ///
    /// let err = ValidationError::collect("root", [own, child, Ok(())]).unwrap_err();
    /// assert_eq!(err.len(), 2);
    /// assert_eq!(err.violations()[1].path(), ["root", "security"]);
    /// ```
    pub fn collect<I>(label: &str, results: I) -> std::result::Result<(), ValidationError>
    where
        I: IntoIterator<Item = std::result::Result<(), ValidationError>>,
    {
        Self::merge(results).map_err(|err| err.within(label))
    }

    /// All violations, in check order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The bare messages of all violations, in check order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(Violation::message)
    }

    /// Violations whose innermost section is `section`.
    pub fn in_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |v| v.section() == Some(section))
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Whether the aggregate holds no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.violations.as_slice() {
            [] => write!(f, "no violations"),
            [single] => write!(f, "{}", single),
            many => {
                writeln!(f, "Multiple validation errors:")?;
                for (i, violation) in many.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, violation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}
