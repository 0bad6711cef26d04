//! HTTP server tuning parameters.

use crate::core::{DurationError, Validate, Validator, parse_duration};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Server parameters. Timeouts are duration expressions such as `"10s"` or `"2m"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Keep-alive idle timeout
    pub idle_timeout: String,
    /// Timeout for reading the request head
    pub read_header_timeout: String,
    /// Timeout for reading the whole request, head and body
    pub read_timeout: String,
    /// Timeout for writing the response
    pub write_timeout: String,
    /// Maximum size of the request headers in bytes
    pub max_header_bytes: u64,
    /// Where to place uploaded files
    pub upload_folder: String,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            idle_timeout: "2s".to_string(),
            read_header_timeout: "10s".to_string(),
            read_timeout: "100s".to_string(),
            write_timeout: "2m".to_string(),
            max_header_bytes: 2_097_152,
            upload_folder: "./upload".to_string(),
        }
    }
}

fn timeout(expression: &str) -> Result<Duration, DurationError> {
    parse_duration(expression)?.try_into()
}

impl Parameters {
    /// The idle timeout as a duration.
    ///
    /// # Errors
    ///
    /// Fails if the expression is malformed or negative.
    pub fn idle_timeout_duration(&self) -> Result<Duration, DurationError> {
        timeout(&self.idle_timeout)
    }

    /// The read header timeout as a duration.
    ///
    /// # Errors
    ///
    /// Fails if the expression is malformed or negative.
    pub fn read_header_timeout_duration(&self) -> Result<Duration, DurationError> {
        timeout(&self.read_header_timeout)
    }

    /// The read timeout as a duration.
    ///
    /// # Errors
    ///
    /// Fails if the expression is malformed or negative.
    pub fn read_timeout_duration(&self) -> Result<Duration, DurationError> {
        timeout(&self.read_timeout)
    }

    /// The write timeout as a duration.
    ///
    /// # Errors
    ///
    /// Fails if the expression is malformed or negative.
    pub fn write_timeout_duration(&self) -> Result<Duration, DurationError> {
        timeout(&self.write_timeout)
    }
}

impl Validate for Parameters {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.is_duration(&self.idle_timeout, "The idle timeout must be a valid duration")
            .is_positive(
                self.max_header_bytes,
                "The maximum header bytes must be a positive number",
            )
            .is_duration(
                &self.read_header_timeout,
                "The read header timeout must be a valid duration",
            )
            .is_duration(&self.read_timeout, "The read timeout must be a valid duration")
            .is_not_empty(&self.upload_folder, "The upload folder must not be empty")
            .is_duration(&self.write_timeout, "The write timeout must be a valid duration");
        ValidationError::collect("parameters", [v.all_valid()])
    }
}
