//! Configuration validation support.

use crate::error::ValidationError;

/// Trait for configuration sections that can check themselves.
///
/// A section runs its own field checks with a fresh [`Validator`](super::Validator),
/// validates every child section it owns, and merges everything under its own
/// label with [`ValidationError::collect`]. Validation only reads the section,
/// and a failing check never stops the remaining ones from running.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::{Validate, Validator};
/// use vetted_config::error::ValidationError;
///
/// struct Listener {
///     port: u32,
///     max_connections: u64,
/// }
///
/// impl Validate for Listener {
///     fn validate(&self) -> Result<(), ValidationError> {
///         let mut v = Validator::new();
///         v.is_port(self.port, "The listener port must be a valid port")
///             .is_positive(self.max_connections, "The connection limit must be positive");
///         ValidationError::collect("listener", [v.all_valid()])
///     }
/// }
///
/// let err = Listener { port: 0, max_connections: 0 }.validate().unwrap_err();
/// assert_eq!(err.len(), 2);
/// assert!(err.violations().iter().all(|v| v.section() == Some("listener")));
/// ```
pub trait Validate {
    /// Validate the section and everything below it.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` holding every violation found.
    fn validate(&self) -> Result<(), ValidationError>;
}
