//! Relational and session store connection settings.

use super::family::{self, AddressFamily};
use crate::core::{Validate, Validator};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Highest database index a session store accepts.
pub const MAX_SESSION_DATABASE: i64 = 15;

/// Configuration related to databases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Databases {
    /// The relational database
    pub relational: Relational,
    /// The session store
    pub session: Session,
}

impl Validate for Databases {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::collect(
            "databases",
            [self.relational.validate(), self.session.validate()],
        )
    }
}

/// Connection settings of the relational database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relational {
    /// Host name, or socket path for the unix family
    pub host: String,
    /// Server port
    pub port: u32,
    /// Database to use
    pub database: String,
    /// User to connect as
    pub username: String,
    /// Password of the user
    pub password: String,
    /// Whether or not to enable TLS
    pub tls: bool,
    /// Location of the PEM certificate to use
    pub certificate: String,
    /// Location of the PEM key to use
    pub key: String,
    /// Transport kind of `host`
    #[serde(with = "family::optional")]
    pub family: Option<AddressFamily>,
}

impl Default for Relational {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            database: "example".to_string(),
            username: "example".to_string(),
            password: "example123".to_string(),
            tls: false,
            certificate: "./postgresql-certificate.pem".to_string(),
            key: "./postgresql-key.pem".to_string(),
            family: Some(AddressFamily::Socket),
        }
    }
}

impl Validate for Relational {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.is_not_empty(&self.database, "The relational database must not be empty")
            .is_port(self.port, "The relational database port must be a valid port")
            .is_not_empty_when(
                self.tls,
                &self.certificate,
                "When TLS is active the certificate must not be blank",
            )
            .is_not_empty_when(
                self.tls,
                &self.key,
                "When TLS is active the key must not be blank",
            )
            .is_present(
                self.family.as_ref(),
                "The relational database address family must not be empty",
            );
        ValidationError::collect("relational", [v.all_valid()])
    }
}

/// Connection settings of the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Host name, or socket path for the unix family
    pub host: String,
    /// Server port
    pub port: u32,
    /// Logical database index, 0 to 15
    pub database: i64,
    /// User to connect as
    pub username: String,
    /// Password of the user
    pub password: String,
    /// Whether or not to enable TLS
    pub tls: bool,
    /// Location of the PEM certificate to use
    pub certificate: String,
    /// Location of the PEM key to use
    pub key: String,
    /// Transport kind of `host`
    #[serde(with = "family::optional")]
    pub family: Option<AddressFamily>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6789,
            database: 12,
            username: "example".to_string(),
            password: "example123".to_string(),
            tls: false,
            certificate: "./redis-certificate.pem".to_string(),
            key: "./redis-key.pem".to_string(),
            family: Some(AddressFamily::Socket),
        }
    }
}

impl Validate for Session {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut v = Validator::new();
        v.is_between_numbers(
            self.database,
            0,
            MAX_SESSION_DATABASE,
            "The session database index must be between 0 and 15",
        )
        .is_port(self.port, "The session store port must be a valid port")
        .is_not_empty_when(
            self.tls,
            &self.certificate,
            "When TLS is active the certificate must not be blank",
        )
        .is_not_empty_when(
            self.tls,
            &self.key,
            "When TLS is active the key must not be blank",
        )
        .is_present(
            self.family.as_ref(),
            "The session store address family must not be empty",
        );
        ValidationError::collect("session", [v.all_valid()])
    }
}
