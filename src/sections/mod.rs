//! The service configuration tree.
//!
//! ```text
//! Configuration (root)
//! ├── security
//! ├── databases
//! │   ├── relational
//! │   └── session
//! └── parameters
//! ```
//!
//! Every section has usable defaults, deserializes with missing keys falling
//! back to those defaults, and validates itself and its children in one pass.

mod databases;
mod family;
mod parameters;
mod security;

pub use databases::{Databases, MAX_SESSION_DATABASE, Relational, Session};
pub use family::AddressFamily;
pub use parameters::Parameters;
pub use security::Security;

use crate::core::{ConfigBuilder, Validate, Validator};
use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Prefix of the environment variables read by [`Configuration::load_default`].
pub const ENV_PREFIX: &str = "APP";

/// Separator between nested keys in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Files read, lowest priority first, by [`Configuration::load_default`].
pub const DEFAULT_FILES: [&str; 4] = ["config.json", "config.yml", "config.yaml", "config.toml"];

/// Root of the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// The address to listen on: a host for the socket family, a path for unix
    pub address: String,
    /// How `address` is interpreted
    #[serde(with = "family::optional")]
    pub family: Option<AddressFamily>,
    /// The port used by this server
    pub port: u32,
    /// TLS configuration of the server
    pub security: Security,
    /// Backing stores
    pub databases: Databases,
    /// Server tuning parameters
    pub parameters: Parameters,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            family: Some(AddressFamily::Socket),
            port: 20038,
            security: Security::default(),
            databases: Databases::default(),
            parameters: Parameters::default(),
        }
    }
}

impl Configuration {
    /// A builder layering files and environment variables over the defaults.
    pub fn builder() -> ConfigBuilder<Self> {
        ConfigBuilder::new()
    }

    /// Load from the optional `./config.{json,yml,yaml,toml}` files and `APP_*`
    /// environment variables, then validate.
    ///
    /// # Errors
    ///
    /// Fails if a present file cannot be parsed, a value has the wrong type, or
    /// validation finds any violation.
    pub fn load_default() -> Result<Self> {
        DEFAULT_FILES
            .iter()
            .fold(Self::builder(), |builder, file| builder.with_optional_file(*file))
            .with_env_overrides(ENV_PREFIX, ENV_SEPARATOR)
            .build()
    }

    /// The endpoint to listen on: `address:port` for sockets, the bare path for
    /// unix sockets, `None` if the family is not set.
    pub fn socket_address(&self) -> Option<String> {
        match self.family? {
            AddressFamily::Socket => Some(format!("{}:{}", self.address, self.port)),
            AddressFamily::Unix => Some(self.address.clone()),
        }
    }
}

impl Validate for Configuration {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut v = Validator::new();
        v.is_present(
            self.family.as_ref(),
            "The server address family must not be empty",
        )
        .is_port(self.port, "The server port must be a valid port");

        ValidationError::collect(
            "root",
            [
                v.all_valid(),
                self.security.validate(),
                self.databases.validate(),
                self.parameters.validate(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn test_socket_address() {
        let mut config = Configuration::default();
        assert_eq!(config.socket_address().as_deref(), Some("127.0.0.1:20038"));

        config.family = Some(AddressFamily::Unix);
        config.address = "/run/app.sock".to_string();
        assert_eq!(config.socket_address().as_deref(), Some("/run/app.sock"));

        config.family = None;
        assert_eq!(config.socket_address(), None);
    }

    #[test]
    fn test_family_and_port_checked_independently() {
        let config = Configuration {
            family: None,
            port: 0,
            ..Configuration::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.len(), 2);
        assert!(err.violations().iter().all(|v| v.path() == ["root"]));
    }
}
